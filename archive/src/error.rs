use support::SupportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error(transparent)]
    Support(#[from] SupportError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Zip error: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("Invalid archive path: {0}")]
    InvalidPath(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<ArchiveError>),
}

impl ArchiveError {
    /// Add context to an error
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        ArchiveError::WithContext(context.into(), Box::new(self))
    }

    /// True when the directory to pack does not exist
    pub fn is_path_not_found(&self) -> bool {
        match self {
            ArchiveError::Support(err) => err.is_path_not_found(),
            ArchiveError::WithContext(_, err) => err.is_path_not_found(),
            _ => false,
        }
    }

    /// Get a user-friendly message for command line display
    pub fn user_message(&self) -> String {
        match self {
            ArchiveError::Support(err) => err.user_message(),
            ArchiveError::IoError(e) => format!("I/O error: {}", e),
            ArchiveError::ZipError(e) => format!("Failed to write archive: {}", e),
            ArchiveError::InvalidPath(msg) => format!("Invalid archive path: {}", msg),
            ArchiveError::WithContext(ctx, err) => format!("{}: {}", ctx, err.user_message()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ArchiveError>;
