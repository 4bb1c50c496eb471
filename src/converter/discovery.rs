//! Build a job list from a directory of diagram sources

use crate::models::ConversionJob;
use crate::utils::helpers::slugify;
use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Every `*.<input_extension>` file under `dir`, sorted by path. The output
/// name is the slugged path relative to `dir` plus `image_extension`, so
/// `hld/flow.mmd` becomes `hld_flow.png`. Two sources that still land on
/// the same output name are an error.
pub fn discover_jobs(
    dir: &Path,
    input_extension: &str,
    image_extension: &str,
) -> Result<Vec<ConversionJob>> {
    if !dir.is_dir() {
        bail!("{} is not a directory", dir.display());
    }

    let mut jobs = Vec::new();
    let mut claimed: HashMap<String, PathBuf> = HashMap::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to scan {}", dir.display()))?;
        let path = entry.path();
        if !entry.file_type().is_file() || !crate::filesystem::has_extension(path, input_extension) {
            continue;
        }

        let slug = slugify(&relative_name(dir, path));
        if slug.is_empty() {
            tracing::warn!(path = %path.display(), "skipping diagram with unusable name");
            continue;
        }

        let output = format!("{slug}.{image_extension}");
        if let Some(first) = claimed.get(&output) {
            bail!(
                "{} and {} would both render to {output}",
                first.display(),
                path.display()
            );
        }
        claimed.insert(output.clone(), path.to_path_buf());
        jobs.push(ConversionJob::new(path, output));
    }

    Ok(jobs)
}

/// Directories below `dir` and the file stem, joined with `_`
fn relative_name(dir: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(dir).unwrap_or(path);
    let mut parts: Vec<String> = relative
        .parent()
        .map(|parent| {
            parent
                .components()
                .map(|c| c.as_os_str().to_string_lossy().to_string())
                .collect()
        })
        .unwrap_or_default();
    if let Some(stem) = path.file_stem() {
        parts.push(stem.to_string_lossy().to_string());
    }
    parts.join("_")
}
