fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Replaces every run of blank lines with a single empty line.
pub fn collapse_blank_runs(lines: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut prev_blank = false;

    for line in lines {
        if is_blank(line) {
            if !prev_blank {
                out.push(String::new());
            }
            prev_blank = true;
        } else {
            out.push(line.clone());
            prev_blank = false;
        }
    }

    out
}
