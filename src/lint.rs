use crate::config::LintConfig;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintStatus {
    /// The linter could not be started; nothing happened.
    Skipped,
    /// The linter ran. Its exit status and output are not inspected.
    Ran,
}

pub fn lint_args(lint: &LintConfig) -> Vec<String> {
    vec![
        "-c".to_string(),
        lint.config_file.clone(),
        "-f".to_string(),
        "quiet".to_string(),
        "-r".to_string(),
        lint.rules.join(","),
    ]
}

/// Runs the external linter once from `root`.
pub fn run_linter(lint: &LintConfig, root: &Path) -> LintStatus {
    let result = Command::new(&lint.program)
        .args(lint_args(lint))
        .current_dir(root)
        .stdin(Stdio::null())
        .output();

    match result {
        Ok(output) => {
            log::debug!("{} exited with {}", lint.program, output.status);
            LintStatus::Ran
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("{} not found, skipping lint", lint.program);
            LintStatus::Skipped
        }
        Err(e) => {
            log::warn!("cannot run {}: {}", lint.program, e);
            LintStatus::Skipped
        }
    }
}
