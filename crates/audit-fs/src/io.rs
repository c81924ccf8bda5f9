//! Tolerant readers for project text files
//!
//! A missing file yields empty content: callers treat "file absent" and
//! "file empty" identically. Input is always UTF-8 text; anything else
//! is an error.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::{Error, Result};

/// Read the full content of a UTF-8 text file.
///
/// Returns an empty string if the file does not exist.
pub fn read_text(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "file not found, treating as empty");
            Ok(String::new())
        }
        Err(e) => Err(Error::io(path, e)),
    }
}

/// Read a UTF-8 text file into a list of whitespace-trimmed lines.
///
/// Returns an empty list if the file does not exist.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    Ok(read_text(path)?
        .lines()
        .map(|line| line.trim().to_string())
        .collect())
}
