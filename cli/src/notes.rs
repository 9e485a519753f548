use crate::error::{CliError, Result};
use changelog::{ChangelogConfig, ReleaseNotes};
use std::path::PathBuf;

/// Print one version's release notes, or the list of releases
pub fn execute(release: Option<String>, dir: PathBuf, file: String, list: bool) -> Result<()> {
    let notes = ReleaseNotes::new(ChangelogConfig { file_name: file });

    if list {
        let versions = notes.versions(&dir)?;
        if versions.is_empty() {
            return Err(CliError::Other(format!(
                "No numbered releases in {}",
                notes.changelog_path(&dir).display()
            )));
        }
        for version in versions {
            println!("{version}");
        }
        return Ok(());
    }

    let release = support::require(release)?;
    let text = notes.load(&dir, &release).map_err(|e| {
        CliError::from(e).with_context(format!(
            "Reading {}",
            notes.changelog_path(&dir).display()
        ))
    })?;

    // Plain output so scripts can capture it
    println!("{text}");
    Ok(())
}
