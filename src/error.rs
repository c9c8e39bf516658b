//! Error types for the config store.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by config load, save, and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file or its parent directory could not be read, written, or created.
    #[error("Failed to access {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file contents did not parse as the expected record shape.
    #[error("Failed to parse {}: {}", .path.display(), .source)]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The record could not be serialized.
    #[error("Failed to serialize config: {0}")]
    Encode(#[source] serde_json::Error),

    /// A semantic constraint was violated.
    #[error("Invalid config: {0}")]
    Validation(String),
}
