use std::path::PathBuf;
use std::result;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SupportError {
    #[error("File doesn't exist: '{}'", .0.display())]
    PathNotFound(PathBuf),

    #[error("Build failed! {0}")]
    Assertion(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid glob pattern: {0}")]
    PatternError(#[from] glob::PatternError),

    #[error("Failed to read directory entry: {0}")]
    GlobError(#[from] glob::GlobError),

    #[error("{0}: {1}")]
    WithContext(String, Box<SupportError>),
}

impl SupportError {
    /// Add context to an error
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        SupportError::WithContext(context.into(), Box::new(self))
    }

    /// True when this error, or the error it wraps, is a missing path
    pub fn is_path_not_found(&self) -> bool {
        match self {
            SupportError::PathNotFound(_) => true,
            SupportError::WithContext(_, err) => err.is_path_not_found(),
            _ => false,
        }
    }

    /// Get a user-friendly message for command line display
    pub fn user_message(&self) -> String {
        match self {
            SupportError::PathNotFound(path) => format!("Path not found: {}", path.display()),
            SupportError::IoError(e) => format!("File operation failed: {}", e),
            SupportError::WithContext(ctx, err) => format!("{}: {}", ctx, err.user_message()),
            _ => format!("{}", self),
        }
    }
}

pub type Result<T> = result::Result<T, SupportError>;

// Helper trait for adding context to results
pub trait ResultExt<T, E> {
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T, E> for result::Result<T, E>
where
    E: Into<SupportError>,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|err| {
            let support_err: SupportError = err.into();
            support_err.with_context(context())
        })
    }
}
