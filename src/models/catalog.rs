//! Descriptions shown next to each image in the report

use std::collections::BTreeMap;

/// Maps an output file name to a human-readable description
#[derive(Debug, Clone, Default)]
pub struct DiagramCatalog {
    descriptions: BTreeMap<String, String>,
    fallback: String,
}

impl DiagramCatalog {
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            descriptions: BTreeMap::new(),
            fallback: fallback.into(),
        }
    }

    pub fn insert(&mut self, file_name: impl Into<String>, description: impl Into<String>) {
        self.descriptions.insert(file_name.into(), description.into());
    }

    pub fn with(mut self, file_name: impl Into<String>, description: impl Into<String>) -> Self {
        self.insert(file_name, description);
        self
    }

    /// Description for `file_name`, or the fallback
    pub fn describe(&self, file_name: &str) -> &str {
        self.descriptions
            .get(file_name)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }

    pub fn len(&self) -> usize {
        self.descriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_falls_back() {
        let catalog = DiagramCatalog::new("Generic diagram.")
            .with("flow.png", "The main flow.");

        assert_eq!(catalog.describe("flow.png"), "The main flow.");
        assert_eq!(catalog.describe("other.png"), "Generic diagram.");
        assert_eq!(catalog.len(), 1);
    }
}
