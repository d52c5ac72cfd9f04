use crate::error::{Error, Result};
use crate::report::{Outcome, Report};
use std::fs;
use std::path::{Path, PathBuf};

/// Cleans one file in place. Returns whether its content changed.
pub fn process_file(path: &Path, dry_run: bool) -> Result<bool> {
    let original = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let cleaned = crate::clean(&original);
    if cleaned.changed && !dry_run {
        fs::write(path, &cleaned.text).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(cleaned.changed)
}

/// Processes every file in order. A failing file is logged and recorded,
/// then the batch moves on.
pub fn run(files: &[PathBuf], dry_run: bool) -> Report {
    let mut report = Report::new(dry_run);

    for fp in files {
        let outcome = match process_file(fp, dry_run) {
            Ok(true) => {
                log::debug!("cleaned {}", fp.display());
                Outcome::Changed
            }
            Ok(false) => Outcome::Unchanged,
            Err(e) => {
                log::error!("{}", e);
                Outcome::Failed(e.to_string())
            }
        };
        report.record(fp.clone(), outcome);
    }

    log::info!(
        "processed {} file(s): {} changed, {} failed",
        report.len(),
        report.changed().count(),
        report.failed().count()
    );
    report
}
