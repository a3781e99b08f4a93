//! Text rendering of a classification.
//!
//! Output is built in a `String` and only returned once every section has
//! rendered, so a missing field leaves nothing half-written.

use std::fmt::Write as _;

use crate::classify::{Classification, RenderMode, SectionGroup};
use crate::config::{GeneratorConfig, Layout};
use crate::errors::{GenError, Result};
use crate::registry::{NumericEntry, Registry};

/// Preamble and indentation settings for the generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub header: Vec<String>,
    pub package: String,
    pub layout: Layout,
}

impl RenderOptions {
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            header: config.header.clone(),
            package: config.package.clone(),
            layout: config.layout,
        }
    }

    fn indent(&self, level: usize) -> String {
        match self.layout {
            Layout::Nested => "\t".repeat(level),
            Layout::Flat => String::new(),
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from_config(&GeneratorConfig::default())
    }
}

/// Render the full generated file.
///
/// `classification` must have been computed over `registry`.
pub fn render(
    registry: &Registry,
    classification: &Classification<'_>,
    options: &RenderOptions,
) -> Result<String> {
    let mut out = String::new();

    for line in &options.header {
        push_line(&mut out, line);
    }
    push_line(&mut out, &format!("package {}", options.package));
    push_line(&mut out, "");
    push_line(&mut out, "const (");

    for (position, group) in classification.groups().iter().enumerate() {
        if position > 0 {
            push_line(&mut out, "");
        }
        render_group(&mut out, registry, group, options)?;
    }

    push_line(&mut out, ")");
    Ok(out)
}

fn render_group(
    out: &mut String,
    registry: &Registry,
    group: &SectionGroup<'_>,
    options: &RenderOptions,
) -> Result<()> {
    let section = group.section;
    let outer = options.indent(1);
    push_line(out, &format!("{outer}// {}", section.heading));

    let entry_indent = match &section.mode {
        RenderMode::Active => outer.clone(),
        RenderMode::Excluded { rationale } => {
            for line in rationale {
                push_line(out, &comment(&outer, line));
            }
            push_line(out, &format!("{outer}/*"));
            options.indent(2)
        }
    };

    for &index in &group.entries {
        let entry = registry.get(index).ok_or(GenError::UnknownEntry {
            index,
            len: registry.len(),
        })?;
        let declaration = declaration(index, entry)?;
        match section.annotation(entry) {
            Some(origin) => push_line(out, &format!("{entry_indent}{declaration} // {origin}")),
            None => push_line(out, &format!("{entry_indent}{declaration}")),
        }
    }

    if section.is_excluded() {
        push_line(out, &format!("{outer}//*/"));
    }
    Ok(())
}

/// `NAME = "code"` for one entry, failing when either part is missing.
pub fn declaration(index: usize, entry: &NumericEntry) -> Result<String> {
    let name = entry.name.as_deref().ok_or_else(|| GenError::MissingField {
        index,
        field: "name",
        name: None,
    })?;
    let numeric = entry
        .numeric
        .as_deref()
        .ok_or_else(|| GenError::MissingField {
            index,
            field: "numeric",
            name: Some(name.to_string()),
        })?;
    Ok(format!("{name} = \"{numeric}\""))
}

fn comment(indent: &str, text: &str) -> String {
    if text.is_empty() {
        format!("{indent}//")
    } else {
        format!("{indent}// {text}")
    }
}

fn push_line(out: &mut String, line: &str) {
    // Writing to a String cannot fail
    let _ = writeln!(out, "{line}");
}
