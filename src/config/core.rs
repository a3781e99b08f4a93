use serde::Deserialize;
use std::collections::HashSet;
use std::path::PathBuf;

use crate::errors::{GenError, Result};
use crate::registry::FilterValue;

/// Indentation convention of the generated block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// One tab per nesting level; excluded entries sit one level deeper
    #[default]
    Nested,
    /// No indentation at all
    Flat,
}

/// Root configuration structure for the generator
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Registry file, relative to the config file when one was loaded
    pub registry: PathBuf,

    /// Destination package declared in the preamble
    pub package: String,

    /// Comment lines emitted before the package declaration
    pub header: Vec<String>,

    pub layout: Layout,

    /// Standards documents in release order; earlier documents claim first
    pub standards: Vec<String>,

    pub extension: ExtensionConfig,

    /// Exact-match pulls, applied after the standards and extension passes
    pub overrides: Vec<OverrideConfig>,

    pub ignored: ExcludedConfig,

    pub obsolete: ExcludedConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            registry: PathBuf::from(DEFAULT_REGISTRY),
            package: "irc".to_string(),
            header: vec![
                "// Code generated by irc-numerics. DO NOT EDIT.".to_string(),
                "//nolint".to_string(),
            ],
            layout: Layout::Nested,
            standards: vec!["RFC1459".to_string(), "RFC2812".to_string()],
            extension: ExtensionConfig::default(),
            overrides: vec![OverrideConfig {
                heading: "Other".to_string(),
                field: "name".to_string(),
                value: FilterValue::Text("RPL_ISUPPORT".to_string()),
            }],
            ignored: ExcludedConfig {
                heading: "Ignored".to_string(),
                rationale: vec![
                    String::new(),
                    "Anything not in an RFC has not been included because".to_string(),
                    "there are way too many conflicts to deal with.".to_string(),
                ],
            },
            obsolete: ExcludedConfig {
                heading: "Obsolete".to_string(),
                rationale: Vec::new(),
            },
        }
    }
}

pub const DEFAULT_REGISTRY: &str = "numerics.yml";

/// Extension-protocol section, matched by a marker in contact/information
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtensionConfig {
    pub enabled: bool,
    /// Heading, also the nominal origin used for annotation
    pub heading: String,
    pub marker: String,
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            heading: "IRCv3".to_string(),
            marker: "ircv3.net".to_string(),
        }
    }
}

/// Pulls entries whose `field` equals `value` into their own section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OverrideConfig {
    pub heading: String,
    #[serde(default = "default_override_field")]
    pub field: String,
    pub value: FilterValue,
}

fn default_override_field() -> String {
    "name".to_string()
}

/// A catch-all section rendered inside a comment block
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExcludedConfig {
    pub heading: String,
    /// Comment lines explaining the exclusion; an empty string renders as `//`
    #[serde(default)]
    pub rationale: Vec<String>,
}

impl GeneratorConfig {
    /// Check the whole configuration, reporting every problem at once.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();

        if self.package.trim().is_empty() {
            problems.push("package must not be empty".to_string());
        }

        let mut seen = HashSet::new();
        for document in &self.standards {
            if document.trim().is_empty() {
                problems.push("standards entries must not be empty".to_string());
            } else if !seen.insert(document.as_str()) {
                problems.push(format!("standards document {document:?} is listed twice"));
            }
        }

        if self.extension.enabled && self.extension.marker.is_empty() {
            problems.push("extension.marker must not be empty".to_string());
        }

        for (position, filter) in self.overrides.iter().enumerate() {
            if filter.field.is_empty() {
                problems.push(format!("overrides[{position}].field must not be empty"));
            }
            if filter.heading.is_empty() {
                problems.push(format!("overrides[{position}].heading must not be empty"));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(GenError::invalid_config(problems.join("; ")))
        }
    }
}
