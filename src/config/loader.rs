use std::path::{Path, PathBuf};

use super::core::GeneratorConfig;
use crate::errors::{GenError, Result};
use crate::io;

pub const CONFIG_FILE_NAME: &str = ".irc-numerics.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// A configuration together with the file it came from, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: GeneratorConfig,
    pub source: Option<PathBuf>,
}

impl LoadedConfig {
    /// Registry path, resolved against the config file's directory
    pub fn registry_path(&self) -> PathBuf {
        let registry = &self.config.registry;
        match self.source.as_deref().and_then(Path::parent) {
            Some(dir) if registry.is_relative() => dir.join(registry),
            _ => registry.clone(),
        }
    }
}

/// Pure function to parse and validate config from a TOML string
pub fn parse_config(contents: &str, path: &Path) -> Result<GeneratorConfig> {
    let config =
        toml::from_str::<GeneratorConfig>(contents).map_err(|source| GenError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
    config.validate()?;
    Ok(config)
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Load the configuration.
///
/// An explicit path must exist. Otherwise `.irc-numerics.toml` is searched
/// from `start` upward; when none is found the defaults apply. A config
/// file that exists but does not parse is an error, never silently skipped.
pub fn load_config(explicit: Option<&Path>, start: &Path) -> Result<LoadedConfig> {
    if let Some(path) = explicit {
        let contents = io::read_file(path)?;
        return Ok(LoadedConfig {
            config: parse_config(&contents, path)?,
            source: Some(path.to_path_buf()),
        });
    }

    for candidate in directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
    {
        if let Some(contents) = io::read_optional_file(&candidate)? {
            tracing::debug!("Loaded config from {}", candidate.display());
            return Ok(LoadedConfig {
                config: parse_config(&contents, &candidate)?,
                source: Some(candidate),
            });
        }
    }

    tracing::debug!(
        "No config found after checking {} directories. Using default config.",
        MAX_TRAVERSAL_DEPTH
    );
    Ok(LoadedConfig {
        config: GeneratorConfig::default(),
        source: None,
    })
}
