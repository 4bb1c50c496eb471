//! Progress callbacks for a gallery run
//!
//! The library never prints; the CLI implements this trait to turn events
//! into console lines.

use crate::config::ToolConfig;
use crate::models::{BatchSummary, ConversionJob, ConversionResult, ProducedFile};
use crate::toolchain::ToolAvailability;
use std::path::Path;

#[allow(unused_variables)]
pub trait RunObserver {
    /// The version query failed and an install attempt is about to start
    fn tool_missing(&mut self, tool: &ToolConfig, reason: &str) {}

    fn tool_checked(&mut self, tool: &ToolConfig, availability: &ToolAvailability) {}

    fn batch_started(&mut self, total: usize) {}

    /// `index` is zero-based
    fn job_started(&mut self, index: usize, total: usize, job: &ConversionJob) {}

    fn job_finished(&mut self, index: usize, total: usize, result: &ConversionResult) {}

    fn batch_finished(&mut self, summary: &BatchSummary, output_dir: &Path, produced: &[ProducedFile]) {}

    fn report_written(&mut self, path: &Path) {}
}

/// Ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl RunObserver for SilentObserver {}
