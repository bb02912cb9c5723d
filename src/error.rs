// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort an analysis run. Unparseable numeric cells are not
/// errors; they become `None` during cleaning.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv decode error: {0}")]
    Csv(#[from] csv::Error),

    #[error("schema mismatch: {0}")]
    Schema(String),
}

impl AnalyzerError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AnalyzerError::Io {
            path: path.into(),
            source,
        }
    }

    /// `NotFound` and friends, when the failure came from the filesystem.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            AnalyzerError::Io { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
