//! Remediation when the rendering tool is missing

use crate::config::ToolConfig;
use crate::process::CommandRunner;
use anyhow::{bail, Context, Result};

/// Installs the rendering tool. Mutates the host environment.
pub trait Installer {
    fn install(&self, tool: &ToolConfig) -> Result<()>;
}

/// Runs the configured package manager command, `npm install -g
/// @mermaid-js/mermaid-cli` by default
pub struct PackageManagerInstaller<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> PackageManagerInstaller<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }
}

impl Installer for PackageManagerInstaller<'_> {
    fn install(&self, tool: &ToolConfig) -> Result<()> {
        tracing::info!(
            program = %tool.install_program,
            args = ?tool.install_args,
            "installing {}", tool.display_name
        );

        let output = self
            .runner
            .run(&tool.install_program, &tool.install_args)
            .with_context(|| format!("Failed to run {}", tool.install_program))?;

        if !output.success() {
            bail!(
                "{} {} failed: {}",
                tool.install_program,
                tool.install_args.join(" "),
                output.diagnostic()
            );
        }
        Ok(())
    }
}

/// Refuses to install, for `--no-install` and read-only hosts
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledInstaller;

impl Installer for DisabledInstaller {
    fn install(&self, tool: &ToolConfig) -> Result<()> {
        bail!("automatic installation of {} is disabled", tool.display_name)
    }
}
