//! Error types for the weekly loader

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for loader operations
pub type Result<T> = std::result::Result<T, LoaderError>;

/// Errors that can occur while reading an export document
#[derive(Error, Debug)]
pub enum LoaderError {
    /// The document could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document was read but is not a valid export
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoaderError {
    /// Path of the document that failed
    pub fn path(&self) -> &PathBuf {
        match self {
            LoaderError::Io { path, .. } | LoaderError::Decode { path, .. } => path,
        }
    }

    /// True when the document simply does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoaderError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
