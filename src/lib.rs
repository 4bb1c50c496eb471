//! Mermaid diagram to PNG gallery generator
//!
//! Renders `.mmd` diagram sources to PNG images with an external renderer
//! (mermaid-cli's `mmdc`), then writes a static HTML gallery of the results.
//! The renderer, the package manager used to install it, and the filesystem
//! are reached through small traits so runs can be driven with fakes.

pub mod config;
pub mod converter;
pub mod error;
pub mod filesystem;
pub mod models;
pub mod observer;
pub mod process;
pub mod report;
pub mod toolchain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::GalleryConfig;
pub use error::{GalleryError, JobFailure};
pub use models::{BatchReport, BatchSummary, ConversionJob, ConversionResult, ProducedFile};
pub use observer::{RunObserver, SilentObserver};
pub use toolchain::{ensure_tool_available, ToolAvailability};

use anyhow::{Context, Result};
use filesystem::FileSystem;
use process::CommandRunner;
use std::path::PathBuf;
use toolchain::Installer;

/// The external collaborators of a run
#[derive(Clone, Copy)]
pub struct Host<'a> {
    pub runner: &'a dyn CommandRunner,
    pub fs: &'a dyn FileSystem,
    pub installer: &'a dyn Installer,
}

#[derive(Debug, Clone)]
pub struct GalleryOptions {
    pub generate_report: bool,
}

impl Default for GalleryOptions {
    fn default() -> Self {
        Self {
            generate_report: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GalleryOutcome {
    pub tool: ToolAvailability,
    pub batch: BatchReport,
    pub produced: Vec<ProducedFile>,
    pub report_path: Option<PathBuf>,
}

/// Main entry point: check the renderer, convert `jobs`, then write the
/// report.
///
/// Fails with [`GalleryError::ToolUnavailable`] before any job runs when the
/// renderer is missing and cannot be installed. Per-job failures are
/// recorded in the outcome and never fail the run.
pub fn generate_gallery(
    config: &GalleryConfig,
    jobs: &[ConversionJob],
    host: Host<'_>,
    options: &GalleryOptions,
    observer: &mut dyn RunObserver,
) -> Result<GalleryOutcome> {
    // 1. Make sure the renderer can be run
    let tool = ensure_tool_available(&config.tool, host.runner, host.installer, observer);
    if let ToolAvailability::Unavailable { reason } = &tool {
        return Err(GalleryError::ToolUnavailable {
            tool: config.tool.display_name.clone(),
            reason: reason.clone(),
        }
        .into());
    }

    // 2. Render every diagram
    let batch = converter::convert_all(
        jobs,
        &config.output_dir,
        &config.tool.program,
        &config.render,
        host.runner,
        host.fs,
        observer,
    )?;

    // 3. List what is on disk now
    let produced = converter::produced_files(host.fs, &config.output_dir, &config.image_extension)
        .with_context(|| format!("Failed to list {}", config.output_dir.display()))?;
    observer.batch_finished(&batch.summary(), &config.output_dir, &produced);

    // 4. Gallery page
    let report_path = if options.generate_report {
        write_report(config, host.fs, observer)?
    } else {
        None
    };

    Ok(GalleryOutcome {
        tool,
        batch,
        produced,
        report_path,
    })
}

/// Regenerate the gallery page from whatever images are in the output
/// directory
pub fn write_report(
    config: &GalleryConfig,
    fs: &dyn FileSystem,
    observer: &mut dyn RunObserver,
) -> Result<Option<PathBuf>> {
    let path = report::generate_report(
        fs,
        &config.output_dir,
        &config.report_file,
        &config.image_extension,
        &config.project,
        &config.catalog(),
    )?;
    if let Some(path) = &path {
        observer.report_written(path);
    }
    Ok(path)
}
