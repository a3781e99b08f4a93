use std::path::Path;

use super::Registry;
use crate::errors::{GenError, Result};
use crate::io;

/// Read and parse the registry file at `path`.
pub fn load_registry(path: &Path) -> Result<Registry> {
    let contents = io::read_file(path)?;
    let registry = parse_registry(&contents, path)?;
    tracing::debug!(
        "Loaded {} registry entries from {}",
        registry.len(),
        path.display()
    );
    Ok(registry)
}

/// Pure function to parse registry YAML; `path` is only used in errors
pub fn parse_registry(contents: &str, path: &Path) -> Result<Registry> {
    serde_yaml::from_str::<Registry>(contents).map_err(|source| GenError::RegistryParse {
        path: path.to_path_buf(),
        source,
    })
}
