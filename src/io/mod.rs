pub mod destinations;

// Re-export destinations for convenient access
pub use destinations::{FileDestination, MemoryDestination, OutputDestination, StdoutDestination};

use crate::errors::{GenError, Result};
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| GenError::io(path, e))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| GenError::io(path, e))
}

/// Read a file that may legitimately be absent
pub fn read_optional_file(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(GenError::io(path, e)),
    }
}

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}
