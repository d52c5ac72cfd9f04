use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILES: [&str; 2] = ["mdclean.config.json", "config/mdclean.config.json"];

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    #[serde(default)]
    pub dry_run: bool,

    #[serde(default)]
    pub lint: LintConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LintConfig {
    #[serde(default = "default_lint_enabled")]
    pub enabled: bool,

    #[serde(default = "default_lint_program")]
    pub program: String,

    #[serde(default = "default_lint_config_file")]
    pub config_file: String,

    #[serde(default = "default_lint_rules")]
    pub rules: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    vec!["md".to_string()]
}
fn default_lint_enabled() -> bool {
    true
}
fn default_lint_program() -> String {
    "markdownlint".to_string()
}
fn default_lint_config_file() -> String {
    "./.markdownlint.json".to_string()
}
fn default_lint_rules() -> Vec<String> {
    (1..=300).map(|n| format!("MD{:03}", n)).collect()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            extensions: default_extensions(),
            dry_run: false,
            lint: LintConfig::default(),
        }
    }
}

impl Default for LintConfig {
    fn default() -> Self {
        LintConfig {
            enabled: true,
            program: default_lint_program(),
            config_file: default_lint_config_file(),
            rules: default_lint_rules(),
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Config> {
        let text = fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&text).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Loads the first of the default config files found under `root`,
    /// falling back to built-in defaults.
    pub fn discover(root: &Path) -> Result<Config> {
        for name in &DEFAULT_CONFIG_FILES {
            let path: PathBuf = root.join(name);
            if path.is_file() {
                log::debug!("using config {}", path.display());
                return Config::from_file(&path);
            }
        }
        Ok(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.extensions, vec!["md"]);
        assert!(!config.dry_run);
        assert!(config.lint.enabled);
        assert_eq!(config.lint.program, "markdownlint");
        assert_eq!(config.lint.config_file, "./.markdownlint.json");
        assert_eq!(config.lint.rules.len(), 300);
        assert_eq!(config.lint.rules[0], "MD001");
        assert_eq!(config.lint.rules[299], "MD300");
    }

    #[test]
    fn test_deserialize_full_config() {
        let json = r#"{
            "extensions": ["md", "markdown"],
            "dry_run": true,
            "lint": {
                "enabled": false,
                "program": "mdl",
                "config_file": "lint.json",
                "rules": ["MD009", "MD012"]
            }
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.extensions, vec!["md", "markdown"]);
        assert!(config.dry_run);
        assert!(!config.lint.enabled);
        assert_eq!(config.lint.program, "mdl");
        assert_eq!(config.lint.config_file, "lint.json");
        assert_eq!(config.lint.rules, vec!["MD009", "MD012"]);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: Config = serde_json::from_str(r#"{"lint": {"enabled": false}}"#).unwrap();
        assert_eq!(config.extensions, vec!["md"]);
        assert!(!config.lint.enabled);
        assert_eq!(config.lint.program, "markdownlint");
        assert_eq!(config.lint.rules.len(), 300);
    }

    #[test]
    fn test_discover_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config.extensions, vec!["md"]);
    }

    #[test]
    fn test_discover_reads_nested_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("config")).unwrap();
        fs::write(
            dir.path().join("config/mdclean.config.json"),
            r#"{"extensions": ["markdown"]}"#,
        )
        .unwrap();
        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config.extensions, vec!["markdown"]);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mdclean.config.json");
        fs::write(&path, "{ not json").unwrap();
        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
