//! Diff engine configuration

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Configuration for a single comparison.
///
/// This is an immutable value object: defaults are produced fresh by
/// [`DiffConfig::default`] and callers override fields on their own
/// copy. No shared default instance is ever mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Primary key columns; `None` enables auto-detection
    pub primary_key: Option<Vec<String>>,

    /// Cap on stored examples per category (added / removed / modified)
    pub max_examples: usize,

    /// Case-insensitive substring patterns marking columns whose changes
    /// are not meaningful on their own
    pub excluded_patterns: Vec<String>,

    /// When false, values are lowercased before hashing and comparison
    pub case_sensitive: bool,

    /// When true, values are trimmed before hashing and comparison
    pub trim_whitespace: bool,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            primary_key: None,
            max_examples: 10,
            excluded_patterns: vec!["inventory".to_string(), "availability".to_string()],
            case_sensitive: true,
            trim_whitespace: true,
        }
    }
}

/// Optional on-disk configuration (`tabdiff.toml`).
#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    diff: DiffSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct DiffSection {
    primary_key: Option<Vec<String>>,
    max_examples: Option<usize>,
    excluded_patterns: Option<Vec<String>>,
    case_sensitive: Option<bool>,
    trim_whitespace: Option<bool>,
}

impl DiffSection {
    /// Overlay the file values onto `base`, leaving unset fields alone.
    fn apply(self, base: DiffConfig) -> DiffConfig {
        DiffConfig {
            primary_key: self.primary_key.or(base.primary_key),
            max_examples: self.max_examples.unwrap_or(base.max_examples),
            excluded_patterns: self.excluded_patterns.unwrap_or(base.excluded_patterns),
            case_sensitive: self.case_sensitive.unwrap_or(base.case_sensitive),
            trim_whitespace: self.trim_whitespace.unwrap_or(base.trim_whitespace),
        }
    }
}

/// Resolve the effective configuration.
///
/// Priority order (highest to lowest):
/// 1. Explicit config file via the `TABDIFF_CONFIG` env var
/// 2. Local config file (`tabdiff.toml` in the current directory)
/// 3. Default configuration
pub fn get_config() -> Result<DiffConfig> {
    if let Ok(config_path) = env::var("TABDIFF_CONFIG") {
        return load_config_file(Path::new(&config_path));
    }

    if let Ok(current_dir) = env::current_dir() {
        let local_path = current_dir.join("tabdiff.toml");
        if local_path.exists() {
            return load_config_file(&local_path);
        }
    }

    Ok(DiffConfig::default())
}

/// Load a config file and overlay it onto the defaults.
pub fn load_config_file(path: &Path) -> Result<DiffConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        crate::error::TabdiffError::config(format!(
            "failed to read config file '{}': {e}",
            path.display()
        ))
    })?;
    let file: ConfigFile = toml::from_str(&content).map_err(|e| {
        crate::error::TabdiffError::config(format!(
            "failed to parse config file '{}': {e}",
            path.display()
        ))
    })?;
    Ok(file.diff.apply(DiffConfig::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = DiffConfig::default();
        assert_eq!(config.primary_key, None);
        assert_eq!(config.max_examples, 10);
        assert_eq!(config.excluded_patterns, vec!["inventory", "availability"]);
        assert!(config.case_sensitive);
        assert!(config.trim_whitespace);
    }

    #[test]
    fn file_section_overlays_only_set_fields() {
        let file: ConfigFile = toml::from_str(
            r#"
            [diff]
            max_examples = 3
            case_sensitive = false
            "#,
        )
        .unwrap();
        let config = file.diff.apply(DiffConfig::default());
        assert_eq!(config.max_examples, 3);
        assert!(!config.case_sensitive);
        // untouched fields keep their defaults
        assert!(config.trim_whitespace);
        assert_eq!(config.excluded_patterns, vec!["inventory", "availability"]);
    }

    #[test]
    fn load_config_file_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tabdiff.toml");
        std::fs::write(&path, "[diff\nmax_examples = 3").unwrap();
        assert!(load_config_file(&path).is_err());
    }
}
