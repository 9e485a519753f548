//! Filesystem helpers shared by the release crates.

use crate::error::{Result, ResultExt, SupportError};
use glob::MatchOptions;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Check whether a file or directory exists at `path`
pub fn path_exists(path: &Path) -> bool {
    path.is_dir() || path.exists()
}

/// Return `path` unchanged when it exists, fail with `PathNotFound` otherwise
pub fn resolve_path(path: &Path) -> Result<PathBuf> {
    if path_exists(path) {
        Ok(path.to_path_buf())
    } else {
        Err(SupportError::PathNotFound(path.to_path_buf()))
    }
}

/// Create `path` and every missing parent.
///
/// With `overwrite`, an existing tree at `path` is removed first so the
/// directory starts out empty.
pub fn make_dir(path: &Path, overwrite: bool) -> Result<()> {
    if overwrite && path.exists() {
        debug!(path = %path.display(), "removing existing directory");
        fs::remove_dir_all(path)
            .with_context(|| format!("Failed to remove directory {}", path.display()))?;
    }

    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory {}", path.display()))
}

/// Remove the file at `path`; a missing file is not an error
pub fn remove_file_if_exists(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => {
            debug!(path = %path.display(), "removed existing file");
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(SupportError::IoError(e)
            .with_context(format!("Failed to remove file {}", path.display()))),
    }
}

/// List every regular file under `root`, recursively, in sorted order.
///
/// Hidden files are included and directories are not. When `root` is itself
/// a file, the result holds just that file. Paths are absolute, so
/// `root.strip_prefix` works on them however `root` was spelled.
pub fn list_files(root: &Path) -> Result<Vec<PathBuf>> {
    let root = std::path::absolute(resolve_path(root)?)?;
    if root.is_file() {
        return Ok(vec![root]);
    }

    let escaped = glob::Pattern::escape(&root.to_string_lossy());
    let pattern = format!("{}/**/*", escaped.trim_end_matches('/'));
    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: false,
        require_literal_leading_dot: false,
    };

    let mut files = Vec::new();
    for entry in glob::glob_with(&pattern, options)? {
        let path = entry?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    debug!(root = %root.display(), count = files.len(), "listed files");
    Ok(files)
}
