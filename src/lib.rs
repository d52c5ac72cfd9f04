pub mod batch;
pub mod collapse;
pub mod config;
pub mod document;
pub mod error;
pub mod filter;
pub mod lint;
pub mod normalize;
pub mod report;

use document::{Cleaned, Document};
use std::fs;
use std::path::{Path, PathBuf};

/// Cleans one markdown document. Pure: no I/O, no state between calls.
///
/// Each stage runs once over the output of the previous one. Removing a
/// heading or placeholder between two blank lines leaves both blanks in place.
pub fn clean(text: &str) -> Cleaned {
    // Stage 1: split lines, trim trailing whitespace
    let doc = Document::new(text);

    // Stage 2: collapse blank runs
    let lines = collapse::collapse_blank_runs(&doc.lines);

    // Stage 3: drop empty headings
    let lines = filter::remove_empty_headings(&lines);

    // Stage 4: drop TODO/FIXME lines
    let mut lines = filter::remove_placeholders(&lines);

    // Stage 5: reassemble with exactly one newline at EOF
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    let mut result = lines.join("\n");
    result.push('\n');

    let changed = result != doc.raw;
    Cleaned {
        text: result,
        changed,
    }
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|want| want.eq_ignore_ascii_case(ext)))
}

/// Collects matching files under `inputs`, recursing into directories.
/// Symlinked directories are not followed. A missing input, or an input file
/// with none of the extensions, is an error.
pub fn list_files(inputs: &[PathBuf], extensions: &[String]) -> error::Result<Vec<PathBuf>> {
    let mut out: Vec<PathBuf> = Vec::new();

    for p in inputs {
        if p.is_dir() {
            for entry in fs::read_dir(p)? {
                let entry = entry?;
                let sub_path = entry.path();
                if entry.file_type()?.is_dir() {
                    let sub_files = list_files(&[sub_path], extensions)?;
                    out.extend(sub_files);
                } else if sub_path.is_file() && has_extension(&sub_path, extensions) {
                    out.push(sub_path);
                }
            }
        } else if !p.exists() {
            return Err(error::Error::NotFound(p.clone()));
        } else if !has_extension(p, extensions) {
            return Err(error::Error::Extension {
                path: p.clone(),
                extensions: extensions.join("/"),
            });
        } else if p.is_file() {
            out.push(p.clone());
        }
    }

    out.sort();
    Ok(out)
}
