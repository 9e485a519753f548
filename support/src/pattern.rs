use regex::Regex;

/// Return the named capture `name` of the first match of `pattern` in `text`
pub fn capture(text: &str, pattern: &Regex, name: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|captures| captures.name(name))
        .map(|m| m.as_str().to_string())
}
