use regex::Regex;
use std::sync::LazyLock;

static RE_EMPTY_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,6}\s*$").unwrap());
static RE_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bTODO\b|\bFIXME\b").unwrap());

pub fn is_empty_heading(line: &str) -> bool {
    RE_EMPTY_HEADING.is_match(line)
}

pub fn is_placeholder(line: &str) -> bool {
    RE_PLACEHOLDER.is_match(line)
}

/// Drops heading markers with no text. The line is removed, not blanked.
pub fn remove_empty_headings(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter(|l| !is_empty_heading(l))
        .cloned()
        .collect()
}

/// Drops any line mentioning TODO or FIXME as a whole word.
pub fn remove_placeholders(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter(|l| !is_placeholder(l))
        .cloned()
        .collect()
}
