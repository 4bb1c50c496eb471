//! Run configuration
//!
//! Job list, descriptions, rendering options, and the tool and installer
//! commands all live here and are passed into the converter and report
//! generator at call time. A config file is JSON5; any field left out
//! keeps its default.

mod defaults;

use crate::error::GalleryError;
use crate::models::{ConversionJob, DiagramCatalog};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub project: ProjectInfo,
    pub tool: ToolConfig,
    pub render: RenderSettings,
    pub output_dir: PathBuf,
    pub report_file: String,
    pub image_extension: String,
    /// Description for images without a catalog entry. Derived from the
    /// project name when unset.
    pub fallback_description: Option<String>,
    pub diagrams: Vec<DiagramEntry>,
}

/// Text used in the report page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectInfo {
    pub name: String,
    pub tagline: String,
    pub summary: String,
}

/// How to find, query, and install the rendering tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    pub display_name: String,
    pub program: String,
    pub version_args: Vec<String>,
    pub install_program: String,
    pub install_args: Vec<String>,
}

/// Options passed to the rendering tool for every job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    pub theme: String,
    pub background: String,
    /// Appended verbatim after the standard options
    pub extra_args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramEntry {
    pub input: PathBuf,
    pub output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            theme: "default".to_string(),
            background: "white".to_string(),
            extra_args: Vec::new(),
        }
    }
}

impl RenderSettings {
    /// Command-line arguments for rendering `input` into `output`
    pub fn args(&self, input: &Path, output: &Path) -> Vec<String> {
        let mut args = vec![
            "-i".to_string(),
            input.display().to_string(),
            "-o".to_string(),
            output.display().to_string(),
            "-t".to_string(),
            self.theme.clone(),
            "-w".to_string(),
            self.width.to_string(),
            "-H".to_string(),
            self.height.to_string(),
            "--backgroundColor".to_string(),
            self.background.clone(),
        ];
        args.extend(self.extra_args.iter().cloned());
        args
    }
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            display_name: "Mermaid CLI".to_string(),
            program: "mmdc".to_string(),
            version_args: vec!["--version".to_string()],
            install_program: "npm".to_string(),
            install_args: vec![
                "install".to_string(),
                "-g".to_string(),
                "@mermaid-js/mermaid-cli".to_string(),
            ],
        }
    }
}

impl Default for ProjectInfo {
    fn default() -> Self {
        defaults::project()
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            project: ProjectInfo::default(),
            tool: ToolConfig::default(),
            render: RenderSettings::default(),
            output_dir: PathBuf::from("images"),
            report_file: "index.html".to_string(),
            image_extension: "png".to_string(),
            fallback_description: None,
            diagrams: defaults::diagrams(),
        }
    }
}

impl GalleryConfig {
    /// Load and validate a JSON5 config file
    pub fn load(path: &Path) -> Result<Self, GalleryError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            GalleryError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_str(&content)
    }

    /// Parse and validate JSON5 (plain JSON is accepted too)
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, GalleryError> {
        let config: Self = json5::from_str(content)
            .map_err(|e| GalleryError::Config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_pretty_json(&self) -> Result<String, GalleryError> {
        serde_json::to_string_pretty(self).map_err(|e| GalleryError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), GalleryError> {
        if self.render.width == 0 || self.render.height == 0 {
            return Err(GalleryError::Config(format!(
                "render size must be positive, got {}x{}",
                self.render.width, self.render.height
            )));
        }
        if self.tool.program.trim().is_empty() {
            return Err(GalleryError::Config("tool.program is empty".to_string()));
        }
        if self.report_file.trim().is_empty() {
            return Err(GalleryError::Config("report_file is empty".to_string()));
        }
        if self.image_extension.trim().is_empty() || self.image_extension.starts_with('.') {
            return Err(GalleryError::Config(format!(
                "image_extension must be a bare extension such as \"png\", got {:?}",
                self.image_extension
            )));
        }

        let mut seen = HashSet::new();
        for entry in &self.diagrams {
            if entry.output.trim().is_empty() {
                return Err(GalleryError::Config(format!(
                    "diagram {} has an empty output name",
                    entry.input.display()
                )));
            }
            if !seen.insert(entry.output.as_str()) {
                return Err(GalleryError::Config(format!(
                    "output {} is produced by more than one diagram",
                    entry.output
                )));
            }
        }
        Ok(())
    }

    /// Jobs in declared order
    pub fn jobs(&self) -> Vec<ConversionJob> {
        self.diagrams
            .iter()
            .map(|d| ConversionJob::new(&d.input, &d.output))
            .collect()
    }

    pub fn fallback_description(&self) -> String {
        self.fallback_description
            .clone()
            .unwrap_or_else(|| format!("System design diagram for {} platform.", self.project.name))
    }

    pub fn catalog(&self) -> DiagramCatalog {
        let mut catalog = DiagramCatalog::new(self.fallback_description());
        for entry in &self.diagrams {
            if let Some(description) = &entry.description {
                catalog.insert(entry.output.clone(), description.clone());
            }
        }
        catalog
    }

    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(&self.report_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_match_builtin_set() {
        let config = GalleryConfig::default();
        config.validate().unwrap();

        let jobs = config.jobs();
        assert_eq!(jobs.len(), 9);
        assert_eq!(
            jobs[0],
            ConversionJob::new(
                "diagrams/user_registration_workflow.mmd",
                "user_registration_workflow.png"
            )
        );
        assert_eq!(config.report_path(), PathBuf::from("images/index.html"));
        assert_eq!(config.catalog().len(), 9);
        assert_eq!(
            config.catalog().describe("unknown.png"),
            "System design diagram for DevConnect platform."
        );
    }

    #[test]
    fn test_render_args() {
        let args = RenderSettings::default()
            .args(Path::new("diagrams/a.mmd"), Path::new("images/a.png"));
        assert_eq!(
            args,
            vec![
                "-i", "diagrams/a.mmd", "-o", "images/a.png", "-t", "default", "-w", "1200",
                "-H", "800", "--backgroundColor", "white",
            ]
        );
    }

    #[test]
    fn test_partial_json5_keeps_defaults() {
        let config = GalleryConfig::from_str(
            r#"{
                // only override what differs
                project: { name: "Acme" },
                render: { theme: "dark", extra_args: ["-s", "2"] },
                diagrams: [
                    { input: "flows/login.mmd", output: "login.png", description: "Login." },
                ],
            }"#,
        )
        .unwrap();

        assert_eq!(config.project.name, "Acme");
        assert_eq!(config.render.theme, "dark");
        assert_eq!(config.render.width, 1200);
        assert_eq!(config.tool.program, "mmdc");
        assert_eq!(config.output_dir, PathBuf::from("images"));
        assert_eq!(config.jobs(), vec![ConversionJob::new("flows/login.mmd", "login.png")]);
        assert_eq!(config.catalog().describe("login.png"), "Login.");
        assert_eq!(
            config.catalog().describe("other.png"),
            "System design diagram for Acme platform."
        );
    }

    #[test]
    fn test_rejects_duplicate_outputs() {
        let err = GalleryConfig::from_str(
            r#"{ diagrams: [
                { input: "a.mmd", output: "same.png" },
                { input: "b.mmd", output: "same.png" },
            ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, GalleryError::Config(_)));
    }

    #[test]
    fn test_rejects_zero_width() {
        assert!(GalleryConfig::from_str("{ render: { width: 0 } }").is_err());
    }

    #[test]
    fn test_pretty_json_round_trips_through_loader() {
        let config = GalleryConfig::default();
        let json = config.to_pretty_json().unwrap();
        assert_eq!(GalleryConfig::from_str(&json).unwrap(), config);
    }
}
