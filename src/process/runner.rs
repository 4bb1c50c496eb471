//! Command runner for external process execution

use std::io;
use std::process::{Command, Stdio};

/// Captured output of a finished process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was killed by a signal
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// Best text to show when the process failed: stderr, then stdout,
    /// then the bare exit status.
    pub fn diagnostic(&self) -> String {
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            return stderr.to_string();
        }
        let stdout = self.stdout.trim();
        if !stdout.is_empty() {
            return stdout.to_string();
        }
        match self.status {
            Some(code) => format!("exited with status {code}"),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Runs a program to completion. Blocks until the process exits; no timeout.
pub trait CommandRunner {
    /// `Err` means the process could not be spawned at all
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput>;
}

/// Spawns real processes with `std::process::Command`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput> {
        tracing::debug!(program, ?args, "spawning");

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()?;

        let result = CommandOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };
        tracing::debug!(program, status = ?result.status, "process exited");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_prefers_stderr() {
        let output = CommandOutput {
            status: Some(1),
            stdout: "partial\n".to_string(),
            stderr: "  Parse error on line 3\n".to_string(),
        };
        assert_eq!(output.diagnostic(), "Parse error on line 3");
    }

    #[test]
    fn test_diagnostic_falls_back_to_status() {
        let output = CommandOutput {
            status: Some(2),
            ..Default::default()
        };
        assert!(!output.success());
        assert_eq!(output.diagnostic(), "exited with status 2");

        let killed = CommandOutput::default();
        assert_eq!(killed.diagnostic(), "terminated by signal");
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let runner = SystemCommandRunner;
        let result = runner.run("mmd2png-definitely-not-a-real-program", &[]);
        assert!(result.is_err());
    }
}
