//! Release-notes extraction for changelogs headed `## v.<version>`.

pub mod config;
pub mod error;
pub mod extractor;
pub mod notes;
pub mod types;
mod utils;

pub use config::ChangelogConfig;
pub use error::{ChangelogError, SectionError};
pub use extractor::{escape_quotes, extract_section, locate_section, released_versions};
pub use notes::{ReleaseNotes, load_release_notes};
pub use types::{ReleaseSection, Result};
