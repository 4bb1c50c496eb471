//! Rendering tool availability

pub mod installer;

pub use installer::{DisabledInstaller, Installer, PackageManagerInstaller};

use crate::config::ToolConfig;
use crate::observer::RunObserver;
use crate::process::CommandRunner;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolAvailability {
    /// Already on the path
    Found { version: String },
    /// Installed during this run. The version is re-queried for display
    /// only and may be missing when the shell path has not picked the tool up.
    Installed { version: Option<String> },
    Unavailable { reason: String },
}

impl ToolAvailability {
    pub fn is_available(&self) -> bool {
        !matches!(self, ToolAvailability::Unavailable { .. })
    }
}

/// Query the tool's version; if that fails, make exactly one install
/// attempt.
pub fn ensure_tool_available(
    tool: &ToolConfig,
    runner: &dyn CommandRunner,
    installer: &dyn Installer,
    observer: &mut dyn RunObserver,
) -> ToolAvailability {
    let availability = match query_version(tool, runner) {
        Ok(version) => ToolAvailability::Found { version },
        Err(reason) => {
            tracing::warn!(tool = %tool.program, %reason, "rendering tool not found");
            observer.tool_missing(tool, &reason);

            match installer.install(tool) {
                Ok(()) => ToolAvailability::Installed {
                    version: query_version(tool, runner).ok(),
                },
                Err(e) => ToolAvailability::Unavailable {
                    reason: format!("{e:#}"),
                },
            }
        }
    };

    observer.tool_checked(tool, &availability);
    availability
}

fn query_version(tool: &ToolConfig, runner: &dyn CommandRunner) -> Result<String, String> {
    let output = runner
        .run(&tool.program, &tool.version_args)
        .map_err(|e| format!("failed to run {}: {e}", tool.program))?;

    if output.success() {
        Ok(output.stdout.trim().to_string())
    } else {
        Err(output.diagnostic())
    }
}
