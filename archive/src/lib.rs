//! Packs one directory tree into one ZIP archive.

pub mod error;
pub mod pack;

pub use error::{ArchiveError, Result};
pub use pack::{default_output, pack_directory};
