//! Report generation

pub mod generator;
mod template;

pub use generator::{render_html, ReportEntry};

use crate::config::ProjectInfo;
use crate::error::GalleryError;
use crate::filesystem::FileSystem;
use crate::models::DiagramCatalog;
use crate::utils::helpers::title_from_file_name;
use std::path::{Path, PathBuf};

/// One entry per image in `output_dir`, sorted by file name
pub fn collect_entries(
    fs: &dyn FileSystem,
    output_dir: &Path,
    image_extension: &str,
    catalog: &DiagramCatalog,
) -> std::io::Result<Vec<ReportEntry>> {
    let entries = fs
        .list_files(output_dir, image_extension)?
        .into_iter()
        .filter_map(|path| path.file_name().map(|n| n.to_string_lossy().to_string()))
        .map(|file_name| ReportEntry {
            title: title_from_file_name(&file_name),
            description: catalog.describe(&file_name).to_string(),
            file_name,
        })
        .collect();
    Ok(entries)
}

/// Write the gallery page to `output_dir/report_file`, replacing any
/// earlier one. Returns `None` without writing when `output_dir` does not
/// exist.
pub fn generate_report(
    fs: &dyn FileSystem,
    output_dir: &Path,
    report_file: &str,
    image_extension: &str,
    project: &ProjectInfo,
    catalog: &DiagramCatalog,
) -> Result<Option<PathBuf>, GalleryError> {
    if !fs.is_dir(output_dir) {
        tracing::debug!(dir = %output_dir.display(), "no output directory, skipping report");
        return Ok(None);
    }

    let report_path = output_dir.join(report_file);
    let write_error = |source: std::io::Error| GalleryError::ReportWrite {
        path: report_path.clone(),
        source,
    };

    let entries = collect_entries(fs, output_dir, image_extension, catalog).map_err(write_error)?;
    let html = render_html(project, &entries);
    fs.write(&report_path, html.as_bytes()).map_err(write_error)?;

    tracing::info!(path = %report_path.display(), images = entries.len(), "report written");
    Ok(Some(report_path))
}
