//! Release-notes extraction from `## v.<version>` headed changelogs.
//!
//! A section starts on the line after the requested header and runs up to
//! the line before the next numbered release header (`## v.X.Y.Z`). The
//! requested header is found by substring search, so `1.1` also matches
//! `## v.1.10.0`; callers pass full versions.

use crate::error::{ChangelogError, SectionError};
use crate::types::{ReleaseSection, Result};
use crate::utils::{RELEASE_HEADER_PATTERN, target_header};
use semver::Version as SemverVersion;
use support::capture;
use tracing::debug;

/// Find the line range holding the notes for `version`.
///
/// The search for the closing header starts one line past the first section
/// line, so a release header directly under the requested one is not treated
/// as the boundary. The newest release has no closing header and is reported
/// as `MissingBoundary`.
pub fn locate_section<S: AsRef<str>>(lines: &[S], version: &str) -> Result<ReleaseSection> {
    let header = target_header(version);
    let missing = |reason: SectionError| ChangelogError::ReleaseNotes {
        version: version.to_string(),
        reason,
    };

    let start_line = lines
        .iter()
        .position(|line| line.as_ref().contains(&header))
        .map(|idx| idx + 1)
        .ok_or_else(|| missing(SectionError::MissingHeader))?;

    // The boundary sits at `pos + start_line + 1`; the section ends just above it.
    let end_line = lines
        .iter()
        .skip(start_line + 1)
        .position(|line| RELEASE_HEADER_PATTERN.is_match(line.as_ref()))
        .map(|pos| pos + start_line)
        .ok_or_else(|| missing(SectionError::MissingBoundary))?;

    debug!(version, start_line, end_line, "located release section");
    Ok(ReleaseSection {
        start_line,
        end_line,
    })
}

/// Extract the release notes for `version`, trimmed and with every `"`
/// escaped so the text can go inside a double-quoted shell or JSON string.
pub fn extract_section<S: AsRef<str>>(lines: &[S], version: &str) -> Result<String> {
    let section = locate_section(lines, version)?;
    let notes = section
        .slice(lines)
        .iter()
        .map(|line| line.as_ref())
        .collect::<Vec<&str>>()
        .join("\n");

    Ok(escape_quotes(notes.trim()))
}

pub fn escape_quotes(text: &str) -> String {
    text.replace('"', "\\\"")
}

/// Every numbered release header in document order
pub fn released_versions<S: AsRef<str>>(lines: &[S]) -> Result<Vec<SemverVersion>> {
    let mut versions = Vec::new();

    for line in lines.iter().map(|line| line.as_ref()) {
        if !RELEASE_HEADER_PATTERN.is_match(line) {
            continue;
        }

        let part = |name: &str| -> Result<u64> {
            capture(line, &RELEASE_HEADER_PATTERN, name)
                .unwrap_or_default()
                .parse::<u64>()
                .map_err(|e| ChangelogError::InvalidVersion(line.trim().to_string(), e))
        };
        versions.push(SemverVersion::new(part("major")?, part("minor")?, part("patch")?));
    }

    Ok(versions)
}
