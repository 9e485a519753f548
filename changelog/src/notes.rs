use crate::config::ChangelogConfig;
use crate::extractor::{extract_section, released_versions};
use crate::types::Result;
use semver::Version as SemverVersion;
use std::fs;
use std::path::{Path, PathBuf};
use support::resolve_path;
use tracing::debug;

/// Reads a repository's changelog and pulls release notes out of it
#[derive(Debug, Clone, Default)]
pub struct ReleaseNotes {
    config: ChangelogConfig,
}

impl ReleaseNotes {
    #[must_use]
    pub const fn new(config: ChangelogConfig) -> Self {
        Self { config }
    }

    /// Location of the changelog inside `repo_dir`
    #[must_use]
    pub fn changelog_path(&self, repo_dir: &Path) -> PathBuf {
        repo_dir.join(&self.config.file_name)
    }

    /// Read the changelog as a list of lines.
    ///
    /// Lines are split on `\n` only, so a CRLF file keeps its `\r` and
    /// extracted notes come back with the file's own line endings.
    ///
    /// # Errors
    /// Returns `PathNotFound` when the file is missing, or a read error
    pub fn read_lines(&self, repo_dir: &Path) -> Result<Vec<String>> {
        let path = resolve_path(&self.changelog_path(repo_dir))?;
        let content = fs::read_to_string(&path)?;
        let lines: Vec<String> = content.split_terminator('\n').map(str::to_string).collect();
        debug!(path = %path.display(), lines = lines.len(), "read changelog");
        Ok(lines)
    }

    /// Release notes for `version`, ready to embed in a double-quoted string
    ///
    /// # Errors
    /// Returns an error if the changelog can't be read or the section can't
    /// be bounded
    pub fn load(&self, repo_dir: &Path, version: &str) -> Result<String> {
        let lines = self.read_lines(repo_dir)?;
        extract_section(&lines, version)
    }

    /// Numbered releases listed in the changelog, in document order
    ///
    /// # Errors
    /// Returns an error if the changelog can't be read
    pub fn versions(&self, repo_dir: &Path) -> Result<Vec<SemverVersion>> {
        let lines = self.read_lines(repo_dir)?;
        released_versions(&lines)
    }
}

/// Read `<repo_dir>/CHANGELOG.md` and return the notes for `version`
///
/// # Errors
/// Returns an error if the changelog is missing or the section can't be bounded
pub fn load_release_notes(repo_dir: &Path, version: &str) -> Result<String> {
    ReleaseNotes::default().load(repo_dir, version)
}
