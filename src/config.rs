// src/config.rs

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Source file read when the caller does not name one.
pub const DEFAULT_SOURCE_PATH: &str = "adult.data.csv";

/// Everything a single analysis run needs to know.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// CSV file with a header line and 15 columns per row.
    pub source_path: PathBuf,
    /// Echo the statistics to stdout after computing them.
    pub print_data: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE_PATH),
            print_data: true,
        }
    }
}

impl AnalyzerConfig {
    pub fn with_source_path(mut self, path: impl AsRef<Path>) -> Self {
        self.source_path = path.as_ref().to_path_buf();
        self
    }

    pub fn with_print_data(mut self, print_data: bool) -> Self {
        self.print_data = print_data;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_fixed_source() {
        let cfg = AnalyzerConfig::default();
        assert_eq!(cfg.source_path, PathBuf::from("adult.data.csv"));
        assert!(cfg.print_data);
    }

    #[test]
    fn test_deserialize_fills_missing_fields() {
        let cfg: AnalyzerConfig = serde_json::from_str(r#"{"print_data": false}"#).unwrap();
        assert_eq!(cfg.source_path, PathBuf::from(DEFAULT_SOURCE_PATH));
        assert!(!cfg.print_data);

        let cfg: AnalyzerConfig = serde_yaml::from_str("source_path: data/other.csv\n").unwrap();
        assert_eq!(cfg.source_path, PathBuf::from("data/other.csv"));
        assert!(cfg.print_data);
    }

    #[test]
    fn test_builders() {
        let cfg = AnalyzerConfig::default()
            .with_source_path("x.csv")
            .with_print_data(false);
        assert_eq!(cfg.source_path, PathBuf::from("x.csv"));
        assert!(!cfg.print_data);
    }
}
