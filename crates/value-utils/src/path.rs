//! Path strings for nested lookups.

use regex::Regex;
use std::sync::OnceLock;

fn bracket_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[([A-Za-z0-9_]+)\]").unwrap())
}

/// Split a path string into its segments.
///
/// Dots separate keys and a bracketed word (`[0]`, `[key]`) is a synonym
/// for `.0` / `.key`. Every dot splits, so empty segments are kept.
///
/// # Examples
///
/// ```
/// use value_utils::path::to_path;
///
/// assert_eq!(to_path("a.b[0].c"), vec!["a", "b", "0", "c"]);
/// assert_eq!(to_path("a[b]"), vec!["a", "b"]);
/// assert_eq!(to_path("[0]"), vec!["", "0"]);
/// ```
pub fn to_path(path: &str) -> Vec<String> {
    bracket_regex()
        .replace_all(path, ".${1}")
        .split('.')
        .map(str::to_string)
        .collect()
}
