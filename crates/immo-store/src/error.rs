//! Storage error types for immo-store.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading or saving records.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading, writing or renaming a file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stored row could not be decoded.
    #[error("Malformed record in {} (line {line}): {reason}", .path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// A value cannot be written without corrupting the delimited format.
    #[error("Field '{field}' cannot be stored: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
