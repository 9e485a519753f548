use once_cell::sync::Lazy;
use regex::Regex;

/// Prefix shared by every release header, e.g. `## v.1.2.0`
pub const RELEASE_HEADER_PREFIX: &str = "## v.";

/// Header of a numbered release, the only kind that ends a section.
/// ASCII digits only.
pub static RELEASE_HEADER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"## v\.(?P<major>[0-9]+)\.(?P<minor>[0-9]+)\.(?P<patch>[0-9]+)")
        .expect("Failed to compile release header regex")
});

pub fn target_header(version: &str) -> String {
    format!("{RELEASE_HEADER_PREFIX}{version}")
}
