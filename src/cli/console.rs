//! Console output for a gallery run

use crate::config::ToolConfig;
use crate::models::{BatchSummary, ConversionJob, ConversionResult, ProducedFile};
use crate::observer::RunObserver;
use crate::toolchain::ToolAvailability;
use crate::utils::helpers::format_thousands;
use crate::JobFailure;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Prints one status line per event, with a progress bar under the batch
#[derive(Default)]
pub struct ConsoleObserver {
    progress: Option<ProgressBar>,
    project: String,
}

impl ConsoleObserver {
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            progress: None,
            project: project.into(),
        }
    }

    fn line(&self, text: impl AsRef<str>) {
        match &self.progress {
            Some(bar) => bar.println(text.as_ref()),
            None => println!("{}", text.as_ref()),
        }
    }
}

impl RunObserver for ConsoleObserver {
    fn tool_missing(&mut self, tool: &ToolConfig, _reason: &str) {
        println!("{}", missing_line(tool).yellow());
    }

    fn tool_checked(&mut self, tool: &ToolConfig, availability: &ToolAvailability) {
        match availability {
            ToolAvailability::Found { version } => {
                println!("{}", format!("✅ {} found: {}", tool.display_name, version).green());
            }
            ToolAvailability::Installed { .. } => {
                println!("{}", format!("✅ {} installed successfully", tool.display_name).green());
            }
            ToolAvailability::Unavailable { reason } => {
                println!("{}", unavailable_line(tool).red().bold());
                println!("  {}", reason.dimmed());
            }
        }
    }

    fn batch_started(&mut self, total: usize) {
        println!();
        println!("{}", format!("🚀 Generating {} Diagram Images...", self.project).bold().blue());
        println!("{}", "=".repeat(50).blue());

        let bar = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::with_template("{bar:30.cyan/blue} {pos}/{len} {msg}") {
            bar.set_style(style);
        }
        self.progress = Some(bar);
    }

    fn job_started(&mut self, _index: usize, _total: usize, job: &ConversionJob) {
        if let Some(bar) = &self.progress {
            bar.set_message(job.input_path.display().to_string());
        }
        self.line(processing_line(job));
    }

    fn job_finished(&mut self, _index: usize, _total: usize, result: &ConversionResult) {
        let outcome = outcome_line(result);
        match &result.failure {
            None => self.line(format!("{}", outcome.green())),
            Some(JobFailure::InputMissing) => self.line(format!("{}", outcome.yellow())),
            Some(JobFailure::ToolInvocationFailed(detail)) => {
                self.line(format!("{}", outcome.red()));
                for detail_line in detail.lines() {
                    self.line(format!("   {}", detail_line.dimmed()));
                }
            }
            Some(JobFailure::OutputMissingAfterSuccess) => self.line(format!("{}", outcome.red())),
        }

        if let Some(bar) = &self.progress {
            bar.inc(1);
        }
    }

    fn batch_finished(&mut self, summary: &BatchSummary, output_dir: &Path, produced: &[ProducedFile]) {
        if let Some(bar) = self.progress.take() {
            bar.finish_and_clear();
        }

        println!("{}", "=".repeat(50).blue());
        let tally = format!(
            "🎉 Successfully generated {}/{} images",
            summary.succeeded, summary.total
        );
        if summary.failed() == 0 {
            println!("{}", tally.green().bold());
        } else {
            println!("{}", tally.yellow().bold());
        }

        if summary.succeeded > 0 {
            let shown = std::fs::canonicalize(output_dir).unwrap_or_else(|_| output_dir.to_path_buf());
            println!("📁 Images saved in: {}", shown.display());
        }

        if !produced.is_empty() {
            println!();
            println!("{}", "📋 Generated Files:".bold());
            for file in produced {
                println!(
                    "   • {} ({} bytes)",
                    file.file_name.cyan(),
                    format_thousands(file.size_bytes)
                );
            }
        }
    }

    fn report_written(&mut self, path: &Path) {
        println!("📄 Created index file: {}", path.display());
    }
}

fn missing_line(tool: &ToolConfig) -> String {
    format!("❌ {} not found", tool.display_name)
}

fn unavailable_line(tool: &ToolConfig) -> String {
    format!("❌ {} is unavailable", tool.display_name)
}

fn processing_line(job: &ConversionJob) -> String {
    format!("📊 Processing: {}", job.input_path.display())
}

/// Uncolored headline for a finished job
fn outcome_line(result: &ConversionResult) -> String {
    let input = result.job.input_path.display();
    let output = result.job.output_path.display();
    match &result.failure {
        None => format!("✅ Generated: {output}"),
        Some(JobFailure::InputMissing) => format!("❌ Input file not found: {input}"),
        Some(JobFailure::ToolInvocationFailed(_)) => format!("❌ Error processing {input}:"),
        Some(JobFailure::OutputMissingAfterSuccess) => format!("❌ Failed to generate: {output}"),
    }
}
