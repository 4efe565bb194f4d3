//! Utility functions for error handling
//!
//! File helpers that attach the path and purpose to every failure.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{CensusError, Result};

/// Open a file for reading with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::NotFound => format!("File not found - needed for {purpose}"),
            io::ErrorKind::PermissionDenied => {
                "Permission denied - check file permissions".to_string()
            }
            _ => format!("Failed to open file for {purpose}"),
        };
        CensusError::io(path, context, e)
    })
}

/// Create (or truncate) a file for writing with rich error information
pub fn create_file(path: &Path, purpose: &str) -> Result<fs::File> {
    fs::File::create(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "Permission denied - check directory permissions".to_string()
            }
            io::ErrorKind::NotFound => {
                format!("Parent directory does not exist - needed for {purpose}")
            }
            _ => format!("Failed to create file for {purpose}"),
        };
        CensusError::io(path, context, e)
    })
}
