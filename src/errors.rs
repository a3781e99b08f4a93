//! Error types for registry loading, configuration and rendering.
//!
//! Every variant is fatal for a generation run: the binary surfaces the
//! error on stderr and exits non-zero without writing any output.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for numerics generation.
#[derive(Debug, Error)]
pub enum GenError {
    /// File system errors while reading inputs or writing the output
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The registry is not a mapping with a `values` sequence of entries
    #[error("Failed to parse registry {}: {source}", .path.display())]
    RegistryParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The configuration file is not valid TOML or has unknown keys
    #[error("Failed to parse config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The configuration parsed but describes an unusable section plan
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An emitted entry lacks one of the attributes every declaration needs
    #[error("Registry entry #{index}{} is missing required field `{field}`", describe_name(.name))]
    MissingField {
        index: usize,
        field: &'static str,
        name: Option<String>,
    },

    /// A classification was paired with a registry it was not built from
    #[error("Classification refers to entry #{index} but the registry has {len} entries")]
    UnknownEntry { index: usize, len: usize },

    /// Check mode found the generated file out of date
    #[error("{} is out of date; regenerate it", .path.display())]
    Stale { path: PathBuf },

    /// Writing to a non-file destination failed
    #[error("Failed to write to {destination}: {source}")]
    Output {
        destination: String,
        #[source]
        source: std::io::Error,
    },
}

fn describe_name(name: &Option<String>) -> String {
    match name {
        Some(name) => format!(" ({name})"),
        None => String::new(),
    }
}

impl GenError {
    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration validation error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, GenError>;
