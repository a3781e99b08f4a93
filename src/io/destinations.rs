//! Output destinations for the generated table.
//!
//! The generator renders the complete text in memory first and hands it to
//! exactly one destination in a single `write_str` call, so a failed run never
//! leaves a truncated file behind.
//!
//! # Example
//!
//! ```rust
//! use irc_numerics::io::destinations::{MemoryDestination, OutputDestination};
//!
//! let dest = MemoryDestination::new();
//! dest.write_str("package irc\n").unwrap();
//! assert_eq!(dest.get_content(), "package irc\n");
//! ```

use crate::errors::{GenError, Result};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Trait for destinations that receive the generated text.
pub trait OutputDestination {
    /// Write string content to the destination.
    fn write_str(&self, content: &str) -> Result<()>;

    /// Flush any buffered content.
    fn flush(&self) -> Result<()>;

    /// Get a description of the destination for log and error messages.
    fn description(&self) -> String;
}

/// File system output destination.
#[derive(Debug, Clone)]
pub struct FileDestination {
    path: PathBuf,
}

impl FileDestination {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl OutputDestination for FileDestination {
    fn write_str(&self, content: &str) -> Result<()> {
        super::write_file(&self.path, content)
    }

    fn flush(&self) -> Result<()> {
        // File writes are already flushed
        Ok(())
    }

    fn description(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// In-memory output destination for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryDestination {
    buffer: Arc<RwLock<String>>,
}

impl MemoryDestination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current content of the buffer.
    pub fn get_content(&self) -> String {
        self.buffer.read().expect("RwLock poisoned").clone()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.read().expect("RwLock poisoned").is_empty()
    }
}

impl OutputDestination for MemoryDestination {
    fn write_str(&self, content: &str) -> Result<()> {
        self.buffer
            .write()
            .expect("RwLock poisoned")
            .push_str(content);
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn description(&self) -> String {
        "memory".to_string()
    }
}

/// Standard output destination.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutDestination;

impl StdoutDestination {
    pub fn new() -> Self {
        Self
    }

    fn output_error(source: io::Error) -> GenError {
        GenError::Output {
            destination: "stdout".to_string(),
            source,
        }
    }
}

impl OutputDestination for StdoutDestination {
    fn write_str(&self, content: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(content.as_bytes())
            .map_err(Self::output_error)
    }

    fn flush(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.flush().map_err(Self::output_error)
    }

    fn description(&self) -> String {
        "stdout".to_string()
    }
}
