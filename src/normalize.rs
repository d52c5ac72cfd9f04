/// Line boundaries recognized in addition to `\r\n`.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

fn is_line_break(c: char) -> bool {
    LINE_BREAKS.contains(&c)
}

/// Splits `text` into lines and trims trailing whitespace from each.
/// A terminating line break does not start an extra empty line.
pub fn split_lines(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let text = text.replace("\r\n", "\n");
    let mut lines: Vec<String> = text
        .split(is_line_break)
        .map(|l| l.trim_end().to_string())
        .collect();
    if text.ends_with(is_line_break) {
        lines.pop();
    }
    lines
}
