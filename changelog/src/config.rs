/// Configuration options for reading release notes
#[derive(Debug, Clone)]
pub struct ChangelogConfig {
    /// Changelog file name, relative to the repository directory.
    pub file_name: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file_name: "CHANGELOG.md".to_string(),
        }
    }
}
