use std::fmt::{self, Display, Formatter};
use support::SupportError;
use thiserror::Error;

/// Why a version's section could not be bounded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionError {
    /// No line carries the requested version header.
    MissingHeader,
    /// No numbered release header follows the requested one, which is the
    /// case for the newest release in the file.
    MissingBoundary,
}

impl Display for SectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHeader => write!(f, "version header not found"),
            Self::MissingBoundary => {
                write!(f, "no later release header marks the end of the section")
            }
        }
    }
}

/// Errors that can occur when working with changelogs
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Failed to read changelog file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error(transparent)]
    Support(#[from] SupportError),

    #[error("Can't extract release notes for '{version}': {reason}")]
    ReleaseNotes { version: String, reason: SectionError },

    #[error("Invalid release header '{0}': {1}")]
    InvalidVersion(String, std::num::ParseIntError),

    #[error("{0}: {1}")]
    WithContext(String, Box<ChangelogError>),
}

impl ChangelogError {
    #[must_use]
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    /// True when the changelog file itself is missing
    #[must_use]
    pub fn is_path_not_found(&self) -> bool {
        match self {
            Self::Support(err) => err.is_path_not_found(),
            Self::WithContext(_, err) => err.is_path_not_found(),
            _ => false,
        }
    }

    /// The section failure, if this is one
    #[must_use]
    pub fn section_error(&self) -> Option<SectionError> {
        match self {
            Self::ReleaseNotes { reason, .. } => Some(*reason),
            Self::WithContext(_, err) => err.section_error(),
            _ => None,
        }
    }

    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::ReadError(e) => format!("File operation failed: {e}"),
            Self::Support(e) => e.user_message(),
            Self::ReleaseNotes { version, reason } => match reason {
                SectionError::MissingHeader => {
                    format!("Can't extract release notes: no '## v.{version}' header in changelog")
                }
                SectionError::MissingBoundary => format!(
                    "Can't extract release notes: '## v.{version}' is not followed by another release header"
                ),
            },
            Self::InvalidVersion(header, e) => {
                format!("Release header '{header}' has an unusable version number: {e}")
            }
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}
