use thiserror::Error;

/// Command execution error type
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("{message}\nShell failed: {command}\n{output}")]
    ExecutionFailed {
        message: String,
        command: String,
        output: String,
    },

    #[error("Failed to start shell for '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}: {1}")]
    WithContext(String, Box<ShellError>),
}

impl ShellError {
    /// Add context to an error
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        ShellError::WithContext(context.into(), Box::new(self))
    }

    /// Get a user-friendly message for command line display
    pub fn user_message(&self) -> String {
        match self {
            ShellError::ExecutionFailed {
                message,
                command,
                output,
            } => {
                if output.trim().is_empty() {
                    format!("{}\nShell failed: {}", message, command)
                } else {
                    format!("{}\nShell failed: {}\n{}", message, command, output.trim_end())
                }
            }
            ShellError::Spawn { command, source } => {
                format!("Could not run '{}': {}", command, source)
            }
            ShellError::WithContext(ctx, err) => format!("{}: {}", ctx, err.user_message()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShellError>;

