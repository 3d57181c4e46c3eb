//! Shell command execution.

use crate::error::{DoualError, Result};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Outcome of a command that ran to a successful exit.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Execution duration.
    pub duration: Duration,
}

/// Run a command line through the system shell with the terminal attached.
///
/// Standard streams are inherited so prompts such as `sudo`'s password
/// request reach the user. Fails with [`DoualError::CommandFailed`] when the
/// shell cannot be spawned (carrying the OS error) or exits non-zero.
pub fn execute_inherited(command: &str) -> Result<CommandResult> {
    let start = Instant::now();

    let (shell, flag) = system_shell();
    tracing::debug!("Running `{}` via {} {}", command, shell, flag);

    let status = Command::new(shell)
        .arg(flag)
        .arg(command)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| {
            tracing::debug!("Failed to spawn {}: {}", shell, e);
            spawn_error(command, shell, &e)
        })?;

    let result = CommandResult {
        exit_code: status.code(),
        duration: start.elapsed(),
    };
    tracing::debug!(
        "`{}` exited with {:?} after {:?}",
        command,
        result.exit_code,
        result.duration
    );

    if status.success() {
        Ok(result)
    } else {
        Err(DoualError::CommandFailed {
            command: command.to_string(),
            code: result.exit_code,
            message: None,
        })
    }
}

fn spawn_error(command: &str, shell: &str, e: &std::io::Error) -> DoualError {
    DoualError::CommandFailed {
        command: command.to_string(),
        code: None,
        message: Some(format!("could not start {}: {}", shell, e)),
    }
}

/// The shell used to interpret command lines, and its command flag.
fn system_shell() -> (&'static str, &'static str) {
    if cfg!(target_os = "windows") {
        ("cmd", "/C")
    } else {
        ("/bin/sh", "-c")
    }
}
