//! Utility functions for error handling
//!
//! File access helpers that attach the path and purpose to every failure.

use std::fs;
use std::io;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Safely read a file to string with rich error information
///
/// A missing file is reported as [`Error::NotFound`] so callers can tell
/// "no record for this key" apart from a genuine I/O failure.
///
/// # Arguments
/// * `path` - The path to the file to read
/// * `purpose` - Why the file is being read (for error context)
pub fn safe_read_to_string(path: &Path, purpose: &str) -> Result<String> {
    if !path.exists() {
        return Err(Error::NotFound(format!(
            "{} (needed for: {purpose})",
            path.display()
        )));
    }

    if !path.is_file() {
        return Err(Error::io(
            path,
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("path is not a file, expected a file for: {purpose}"),
            ),
        ));
    }

    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::NotFound(format!(
            "{} was removed during operation (needed for: {purpose})",
            path.display()
        )),
        _ => Error::io(path, e),
    })
}

/// Read and decode a JSON file
pub fn read_json<T: DeserializeOwned>(path: &Path, purpose: &str) -> Result<T> {
    let content = safe_read_to_string(path, purpose)?;
    serde_json::from_str(&content).map_err(|e| Error::json(path, e))
}

/// Check if a directory exists and is readable, with rich error information
pub fn validate_directory(path: &Path, purpose: &str) -> Result<()> {
    if !path.exists() {
        return Err(Error::NotFound(format!(
            "directory {} (needed for: {purpose})",
            path.display()
        )));
    }

    if !path.is_dir() {
        return Err(Error::io(
            path,
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("path is not a directory, expected a directory for: {purpose}"),
            ),
        ));
    }

    fs::read_dir(path).map(|_| ()).map_err(|e| Error::io(path, e))
}
