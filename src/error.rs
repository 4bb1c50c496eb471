//! Error types for gallery generation

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a whole run
#[derive(Error, Debug)]
pub enum GalleryError {
    /// The rendering tool is missing and installing it failed
    #[error("{tool} is not available: {reason}")]
    ToolUnavailable { tool: String, reason: String },

    /// The output directory could not be created
    #[error("Failed to create output directory {}: {source}", path.display())]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The HTML report could not be written
    #[error("Failed to write report {}: {source}", path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid or unreadable configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Why a single conversion job failed. Never fatal to the run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JobFailure {
    #[error("input not found")]
    InputMissing,

    #[error("{0}")]
    ToolInvocationFailed(String),

    #[error("tool reported success but produced no file")]
    OutputMissingAfterSuccess,
}
