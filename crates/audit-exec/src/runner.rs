//! Command runner trait and the system-backed implementation

use std::process::Command;

use crate::{ExecError, Result};

/// Captured result of one external command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Combined stdout and stderr text
    pub text: String,
    /// Process exit code, if the process terminated normally
    pub code: Option<i32>,
}

impl CommandOutput {
    /// Whether the command exited with status zero.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Narrow capability for invoking external commands.
///
/// One blocking call per invocation; no timeout management. A hang in
/// the external command hangs the caller.
pub trait CommandRunner {
    /// Run `program` with `args`, wait for it to exit, and capture its
    /// combined stdout and stderr.
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput>;
}

/// Runner backed by `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        tracing::debug!(program, ?args, "invoking external command");
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| ExecError::Spawn {
                program: program.to_string(),
                source: e,
            })?;

        // stdout first, stderr appended: the closest capture of the
        // tool's combined output without a shared pipe.
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(CommandOutput {
            text,
            code: output.status.code(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_a_spawn_error() {
        let err = SystemRunner
            .run("definitely-not-a-real-program-xyz", &[])
            .unwrap_err();
        assert!(matches!(err, ExecError::Spawn { program, .. } if program.contains("xyz")));
    }

    #[test]
    fn test_output_success_requires_zero_exit() {
        let ok = CommandOutput {
            text: String::new(),
            code: Some(0),
        };
        let failed = CommandOutput {
            text: String::new(),
            code: Some(2),
        };
        let killed = CommandOutput {
            text: String::new(),
            code: None,
        };
        assert!(ok.success());
        assert!(!failed.success());
        assert!(!killed.success());
    }
}
