pub mod command;
pub mod error;

pub use command::{CommandResult, ExecOptions, execute};
pub use error::{Result, ShellError};
