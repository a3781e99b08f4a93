//! Generator configuration: section plan inputs and output conventions.

mod core;
mod loader;

pub use self::core::{
    ExcludedConfig, ExtensionConfig, GeneratorConfig, Layout, OverrideConfig, DEFAULT_REGISTRY,
};
pub use self::loader::{
    directory_ancestors, load_config, parse_config, LoadedConfig, CONFIG_FILE_NAME,
};
