//! Fakes shared by the integration tests

#![allow(dead_code)]

use mmd2png::config::ToolConfig;
use mmd2png::filesystem::FileSystem;
use mmd2png::process::{CommandOutput, CommandRunner};
use mmd2png::toolchain::Installer;
use std::cell::{Cell, RefCell};
use std::io;
use std::path::PathBuf;

/// Stands in for `mmdc`: answers `--version` and "renders" by writing a
/// small PNG header to the `-o` path through the given filesystem.
pub struct FakeMermaid<'a> {
    pub fs: &'a dyn FileSystem,
    pub installed: Cell<bool>,
    pub failing_inputs: Vec<String>,
    pub calls: RefCell<Vec<(String, Vec<String>)>>,
}

impl<'a> FakeMermaid<'a> {
    pub fn installed(fs: &'a dyn FileSystem) -> Self {
        Self {
            fs,
            installed: Cell::new(true),
            failing_inputs: Vec::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn missing(fs: &'a dyn FileSystem) -> Self {
        let fake = Self::installed(fs);
        fake.installed.set(false);
        fake
    }

    pub fn failing_on(mut self, input: &str) -> Self {
        self.failing_inputs.push(input.to_string());
        self
    }

    /// Render invocations, i.e. every call that was not a version query
    pub fn render_calls(&self) -> Vec<Vec<String>> {
        self.calls
            .borrow()
            .iter()
            .filter(|(_, args)| args.first().map(String::as_str) == Some("-i"))
            .map(|(_, args)| args.clone())
            .collect()
    }
}

impl CommandRunner for FakeMermaid<'_> {
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput> {
        self.calls.borrow_mut().push((program.to_string(), args.to_vec()));

        if !self.installed.get() {
            return Err(io::Error::new(io::ErrorKind::NotFound, "No such file or directory"));
        }

        if args == ["--version".to_string()] {
            return Ok(CommandOutput {
                status: Some(0),
                stdout: "11.4.2\n".to_string(),
                stderr: String::new(),
            });
        }

        let input = &args[1];
        let output = PathBuf::from(&args[3]);
        if self.failing_inputs.contains(input) {
            return Ok(CommandOutput {
                status: Some(1),
                stdout: String::new(),
                stderr: format!("Error: Parse error on line 1 of {input}"),
            });
        }

        self.fs.write(&output, b"\x89PNG\r\n\x1a\n")?;
        Ok(CommandOutput {
            status: Some(0),
            stdout: String::new(),
            stderr: String::new(),
        })
    }
}

/// Installer with a fixed outcome. On success it flips the fake tool to
/// installed.
pub struct FakeInstaller<'a> {
    pub tool: Option<&'a FakeMermaid<'a>>,
    pub succeed: bool,
    pub calls: Cell<usize>,
}

impl<'a> FakeInstaller<'a> {
    pub fn succeeding(tool: &'a FakeMermaid<'a>) -> Self {
        Self {
            tool: Some(tool),
            succeed: true,
            calls: Cell::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            tool: None,
            succeed: false,
            calls: Cell::new(0),
        }
    }
}

impl Installer for FakeInstaller<'_> {
    fn install(&self, _tool: &ToolConfig) -> anyhow::Result<()> {
        self.calls.set(self.calls.get() + 1);
        if !self.succeed {
            anyhow::bail!("npm ERR! code EACCES");
        }
        if let Some(tool) = self.tool {
            tool.installed.set(true);
        }
        Ok(())
    }
}
