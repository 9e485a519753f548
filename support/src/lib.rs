//! Filesystem and precondition helpers used by the release crates.

pub mod assert;
pub mod error;
pub mod fs;
pub mod pattern;

pub use assert::{ensure, ensure_not, fail, require};
pub use error::{Result, ResultExt, SupportError};
pub use fs::{list_files, make_dir, path_exists, remove_file_if_exists, resolve_path};
pub use pattern::capture;
