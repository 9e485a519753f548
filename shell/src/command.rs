use std::process::{Command, Stdio};

use crate::error::{Result, ShellError};
use serde::Serialize;
use tracing::{debug, warn};

/// Outcome of a single shell command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    /// Whether the process exited with status zero.
    pub success: bool,

    /// Captured standard output.
    pub output: String,

    /// The command line as it was handed to the shell.
    pub command: String,

    /// Raw exit code, `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
}

impl CommandResult {
    /// Whether the command exited with status zero
    pub fn passed(&self) -> bool {
        self.success
    }

    /// Captured output without surrounding whitespace
    pub fn trimmed_output(&self) -> &str {
        self.output.trim()
    }
}

/// How `execute` reports what it does and what it does on failure
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecOptions {
    /// Don't echo the command before running it.
    pub silent: bool,

    /// Return a failed `CommandResult` instead of an error on non-zero exit.
    pub tolerate_failure: bool,
}

impl ExecOptions {
    pub fn silent(mut self) -> Self {
        self.silent = true;
        self
    }

    pub fn tolerate_failure(mut self) -> Self {
        self.tolerate_failure = true;
        self
    }
}

/// Run `command` through the platform shell and classify the outcome.
///
/// Standard output is captured, standard error goes straight to the caller's
/// terminal. A non-zero exit is an `ExecutionFailed` error carrying
/// `error_message`, the command and its output, unless the options tolerate
/// failure, in which case `error_message` is printed and the failed result is
/// returned.
pub fn execute(command: &str, error_message: &str, options: &ExecOptions) -> Result<CommandResult> {
    if !options.silent {
        println!("Running command: {}", command);
    }

    let output = shell_command(command)
        .stdin(Stdio::inherit())
        .stderr(Stdio::inherit())
        .output()
        .map_err(|source| ShellError::Spawn {
            command: command.to_string(),
            source,
        })?;

    let result = CommandResult {
        success: output.status.success(),
        output: String::from_utf8_lossy(&output.stdout).to_string(),
        command: command.to_string(),
        exit_code: output.status.code(),
    };
    debug!(command, exit_code = ?result.exit_code, "command finished");

    if result.success {
        return Ok(result);
    }

    if options.tolerate_failure {
        warn!(command, exit_code = ?result.exit_code, "tolerating failed command");
        println!("{}", error_message);
        return Ok(result);
    }

    Err(ShellError::ExecutionFailed {
        message: error_message.to_string(),
        command: result.command,
        output: result.output,
    })
}

#[cfg(unix)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}
