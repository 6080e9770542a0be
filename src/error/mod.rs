//! Error handling for population data loading and aggregation.

pub mod util;

use std::io;
use std::path::PathBuf;

/// Specialized error type for the population atlas
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error opening or reading a file
    #[error("IO error for {}: {source}", .path.display())]
    Io {
        /// Path of the file or directory being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error decoding a JSON record
    #[error("JSON error in {}: {source}", .path.display())]
    Json {
        /// Path of the file being decoded
        path: PathBuf,
        /// Underlying decode error
        #[source]
        source: serde_json::Error,
    },

    /// No static record exists for the requested country, state or file
    #[error("Not found: {0}")]
    NotFound(String),

    /// Record decoded but its contents are unusable
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Internal state could not be accessed (e.g. a poisoned cache lock)
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

impl Error {
    /// Build an I/O error carrying the offending path
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Build a JSON decode error carrying the offending path
    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    /// Whether this error means the record simply does not exist
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result type for population atlas operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_path() {
        let err = Error::io(
            "data/population/atlantis.json",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("atlantis.json"));
        assert!(msg.contains("denied"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_not_found() {
        let err = Error::NotFound("Country data not found: atlantis".to_string());
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Not found: Country data not found: atlantis");
    }
}
