use indexmap::IndexMap;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Unchanged,
    Changed,
    Failed(String),
}

/// Per-document outcomes, kept in processing order.
#[derive(Debug, Default)]
pub struct Report {
    entries: IndexMap<PathBuf, Outcome>,
    dry_run: bool,
}

#[derive(Serialize)]
struct JsonFailure<'a> {
    path: String,
    error: &'a str,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    changed: Vec<String>,
    failed: Vec<JsonFailure<'a>>,
    unchanged: usize,
}

impl Report {
    pub fn new(dry_run: bool) -> Self {
        Report {
            entries: IndexMap::new(),
            dry_run,
        }
    }

    pub fn record(&mut self, path: PathBuf, outcome: Outcome) {
        self.entries.insert(path, outcome);
    }

    pub fn get(&self, path: &Path) -> Option<&Outcome> {
        self.entries.get(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn changed(&self) -> impl Iterator<Item = &Path> {
        self.entries
            .iter()
            .filter(|(_, o)| **o == Outcome::Changed)
            .map(|(p, _)| p.as_path())
    }

    pub fn failed(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.entries.iter().filter_map(|(p, o)| match o {
            Outcome::Failed(msg) => Some((p.as_path(), msg.as_str())),
            _ => None,
        })
    }

    pub fn unchanged_count(&self) -> usize {
        self.entries
            .values()
            .filter(|o| **o == Outcome::Unchanged)
            .count()
    }

    pub fn render_text(&self) -> String {
        let changed: Vec<&Path> = self.changed().collect();
        if changed.is_empty() {
            return "No changes needed.\n".to_string();
        }
        let mut out = String::from(if self.dry_run {
            "Files needing changes:\n"
        } else {
            "Modified files:\n"
        });
        for p in changed {
            out.push_str(&p.display().to_string());
            out.push('\n');
        }
        out
    }

    pub fn render_json(&self) -> String {
        let report = JsonReport {
            changed: self.changed().map(|p| p.display().to_string()).collect(),
            failed: self
                .failed()
                .map(|(p, error)| JsonFailure {
                    path: p.display().to_string(),
                    error,
                })
                .collect(),
            unchanged: self.unchanged_count(),
        };
        // Only strings and integers: serialization cannot fail.
        serde_json::to_string_pretty(&report).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Report {
        let mut report = Report::new(false);
        report.record(PathBuf::from("b.md"), Outcome::Changed);
        report.record(PathBuf::from("a.md"), Outcome::Unchanged);
        report.record(PathBuf::from("c.md"), Outcome::Failed("bad utf-8".to_string()));
        report.record(PathBuf::from("a/z.md"), Outcome::Changed);
        report
    }

    #[test]
    fn test_no_changes() {
        let mut report = Report::new(false);
        report.record(PathBuf::from("a.md"), Outcome::Unchanged);
        assert_eq!(report.render_text(), "No changes needed.\n");
        assert_eq!(Report::new(false).render_text(), "No changes needed.\n");
    }

    #[test]
    fn test_changed_listing_in_processing_order() {
        assert_eq!(sample().render_text(), "Modified files:\nb.md\na/z.md\n");
    }

    #[test]
    fn test_dry_run_header() {
        let mut report = Report::new(true);
        report.record(PathBuf::from("x.md"), Outcome::Changed);
        assert_eq!(report.render_text(), "Files needing changes:\nx.md\n");
    }

    #[test]
    fn test_counts() {
        let report = sample();
        assert_eq!(report.len(), 4);
        assert_eq!(report.unchanged_count(), 1);
        assert_eq!(report.failed().count(), 1);
        assert_eq!(report.get(Path::new("a.md")), Some(&Outcome::Unchanged));
    }

    #[test]
    fn test_render_json() {
        let value: serde_json::Value = serde_json::from_str(&sample().render_json()).unwrap();
        assert_eq!(value["changed"], serde_json::json!(["b.md", "a/z.md"]));
        assert_eq!(value["failed"][0]["path"], "c.md");
        assert_eq!(value["failed"][0]["error"], "bad utf-8");
        assert_eq!(value["unchanged"], 1);
    }
}
