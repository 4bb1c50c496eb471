//! Conversion jobs and their results

use crate::error::JobFailure;
use std::path::PathBuf;

/// One diagram to render. `output_path` is resolved against the run's
/// output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl ConversionJob {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    pub job: ConversionJob,
    pub failure: Option<JobFailure>,
}

impl ConversionResult {
    pub fn success(job: ConversionJob) -> Self {
        Self { job, failure: None }
    }

    pub fn failed(job: ConversionJob, failure: JobFailure) -> Self {
        Self {
            job,
            failure: Some(failure),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.failure.is_none()
    }

    /// Human-readable failure reason, if any
    pub fn error_detail(&self) -> Option<String> {
        self.failure.as_ref().map(ToString::to_string)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub total: usize,
}

impl BatchSummary {
    pub fn failed(&self) -> usize {
        self.total - self.succeeded
    }
}

/// Results of one pass over a job list, in job order
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub results: Vec<ConversionResult>,
}

impl BatchReport {
    pub fn summary(&self) -> BatchSummary {
        BatchSummary {
            succeeded: self.results.iter().filter(|r| r.succeeded()).count(),
            total: self.results.len(),
        }
    }

    pub fn failures(&self) -> impl Iterator<Item = &ConversionResult> {
        self.results.iter().filter(|r| !r.succeeded())
    }
}

/// A file found in the output directory after a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProducedFile {
    pub file_name: String,
    pub size_bytes: u64,
}
