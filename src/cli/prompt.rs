//! Interactive confirmation before changing the host

use crate::config::ToolConfig;
use crate::toolchain::Installer;
use anyhow::{bail, Result};
use colored::*;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::io::IsTerminal;

/// Asks before delegating to the wrapped installer. Without a terminal on
/// stdin there is nobody to answer, so the install goes ahead unasked.
pub struct PromptingInstaller<I> {
    inner: I,
    assume_yes: bool,
    attended: bool,
}

impl<I: Installer> PromptingInstaller<I> {
    pub fn new(inner: I, assume_yes: bool) -> Self {
        Self {
            inner,
            assume_yes,
            attended: std::io::stdin().is_terminal(),
        }
    }

    fn should_ask(&self) -> bool {
        self.attended && !self.assume_yes
    }
}

impl<I: Installer> Installer for PromptingInstaller<I> {
    fn install(&self, tool: &ToolConfig) -> Result<()> {
        let command = install_command(tool);

        if self.should_ask() {
            let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(format!("📦 Install {} now? ({command})", tool.display_name))
                .default(true)
                .interact()?;
            if !confirmed {
                bail!("installation declined");
            }
        } else if !self.assume_yes {
            tracing::info!("stdin is not a terminal, installing without confirmation");
        }

        println!("{}", installing_line(tool).yellow());
        self.inner.install(tool)
    }
}

fn install_command(tool: &ToolConfig) -> String {
    format!("{} {}", tool.install_program, tool.install_args.join(" "))
}

fn installing_line(tool: &ToolConfig) -> String {
    format!("📦 Installing {} ({})...", tool.display_name, install_command(tool))
}
