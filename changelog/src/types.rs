use crate::error::ChangelogError;

/// Type alias for Result with `ChangelogError`
pub type Result<T> = std::result::Result<T, ChangelogError>;

/// Inclusive line range holding one version's release notes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseSection {
    /// First line after the version header.
    pub start_line: usize,
    /// Last line before the next release header.
    pub end_line: usize,
}

impl ReleaseSection {
    /// The lines of `document` covered by this section
    #[must_use]
    pub fn slice<'a, S>(&self, document: &'a [S]) -> &'a [S] {
        &document[self.start_line..=self.end_line]
    }
}
