//! Error types for update-version.
//!
//! All operations return `Result<T>` which aliases `Result<T, VersionError>`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from version rewrite operations.
#[derive(Debug, Error)]
pub enum VersionError {
    /// Manifest could not be read (missing, unreadable, not UTF-8).
    #[error("Failed to read manifest {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest could not be written back.
    ///
    /// The file may be partially written; nothing is rolled back.
    #[error("Failed to write manifest {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No `version = "..."` line in the manifest (strict mode only).
    #[error("No version declaration found in {}", .0.display())]
    NoMatch(PathBuf),

    /// Regex compilation failed (indicates bug).
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// Result type alias for update-version operations.
pub type Result<T> = std::result::Result<T, VersionError>;
