//! Helpers for the "video version" text scraped from subtitle detail pages.

use once_cell::sync::Lazy;
use regex_lite::Regex;

/// Longest version string kept after cleaning.
pub const MAX_VERSION_TEXT_CHARS: usize = 100;

static VERSION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"[A-Za-z0-9]+\.[A-Za-z0-9]+\.[0-9]+p\.[A-Za-z0-9]+\.[A-Za-z0-9-]+",
        r"[0-9]+p[.-][A-Za-z0-9.-]+",
        r"(?i)(?:BluRay|BDRip|DVDRip|WEBRip|HDTV|WEB-DL)[.-]?[A-Za-z0-9.-]*",
        r"(?i)(?:x264|x265|H\.264|H\.265|HEVC)[.-]?[A-Za-z0-9.-]*",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

fn is_version_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '.' | '-' | '[' | ']')
}

/// Normalise a version cell: punctuation outside `.-[]` becomes whitespace,
/// whitespace collapses, and the result is capped in length.
pub fn clean_version_text(text: &str) -> String {
    let replaced: String = text
        .chars()
        .map(|c| if is_version_char(c) { c } else { ' ' })
        .collect();

    replaced
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(MAX_VERSION_TEXT_CHARS)
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// First release-looking token run in free page text.
///
/// Patterns are tried from most to least specific.
pub fn find_version_string(text: &str) -> Option<String> {
    VERSION_PATTERNS
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| m.as_str().to_string())
}
