//! Section definitions and the fixed priority plan built from configuration.

use crate::config::{ExcludedConfig, GeneratorConfig};
use crate::registry::{FilterValue, NumericEntry};

/// What an entry must look like to be claimed by a section.
///
/// Every rule except `Remaining` also pins the obsolete flag, so an obsolete
/// entry can only ever land in an obsolete section or the obsolete catch-all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionRule {
    /// Origin mentions `document` (substring of a non-empty origin)
    Standard { document: String, obsolete: bool },
    /// Contact or information carries the extension marker; active entries only
    Extension { marker: String },
    /// Attribute `field` equals `value`; active entries only
    Override { field: String, value: FilterValue },
    /// Anything left with the given obsolete flag
    Remaining { obsolete: bool },
}

impl SectionRule {
    pub fn matches(&self, entry: &NumericEntry) -> bool {
        match self {
            Self::Standard { document, obsolete } => {
                entry.obsolete == *obsolete && entry.origin_mentions(document)
            }
            Self::Extension { marker } => !entry.obsolete && entry.affiliated_with(marker),
            Self::Override { field, value } => !entry.obsolete && entry.matches(field, value),
            Self::Remaining { obsolete } => entry.obsolete == *obsolete,
        }
    }
}

/// How a section's entries appear in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderMode {
    /// Live declarations
    Active,
    /// Declarations kept inside a comment block, after the rationale lines
    Excluded { rationale: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: String,
    /// Origin an entry is expected to carry here; any other non-empty
    /// origin gets annotated
    pub nominal_origin: Option<String>,
    pub rule: SectionRule,
    pub mode: RenderMode,
}

impl Section {
    pub fn active(
        heading: impl Into<String>,
        nominal_origin: Option<String>,
        rule: SectionRule,
    ) -> Self {
        Self {
            heading: heading.into(),
            nominal_origin,
            rule,
            mode: RenderMode::Active,
        }
    }

    fn excluded(config: &ExcludedConfig, obsolete: bool) -> Self {
        Self {
            heading: config.heading.clone(),
            nominal_origin: None,
            rule: SectionRule::Remaining { obsolete },
            mode: RenderMode::Excluded {
                rationale: config.rationale.clone(),
            },
        }
    }

    pub fn matches(&self, entry: &NumericEntry) -> bool {
        self.rule.matches(entry)
    }

    pub fn is_excluded(&self) -> bool {
        matches!(self.mode, RenderMode::Excluded { .. })
    }

    /// The annotation an entry gets in this section, if any.
    pub fn annotation<'e>(&self, entry: &'e NumericEntry) -> Option<&'e str> {
        let origin = entry.origin();
        let nominal = self.nominal_origin.as_deref().unwrap_or_default();
        (!origin.is_empty() && origin != nominal).then_some(origin)
    }
}

/// Sections in priority order; earlier sections claim entries first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionPlan {
    sections: Vec<Section>,
}

impl SectionPlan {
    /// Build the fixed pass sequence: each standards document (active, then
    /// obsolete) in release order, the extension protocol, the named
    /// overrides, then the ignored and obsolete catch-alls.
    ///
    /// The two catch-alls always close the plan, so every entry is claimed.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        let mut sections =
            Vec::with_capacity(config.standards.len() * 2 + config.overrides.len() + 3);

        for document in &config.standards {
            for obsolete in [false, true] {
                let heading = if obsolete {
                    format!("{document} (Obsolete)")
                } else {
                    document.clone()
                };
                sections.push(Section::active(
                    heading,
                    Some(document.clone()),
                    SectionRule::Standard {
                        document: document.clone(),
                        obsolete,
                    },
                ));
            }
        }

        if config.extension.enabled {
            sections.push(Section::active(
                config.extension.heading.clone(),
                Some(config.extension.heading.clone()),
                SectionRule::Extension {
                    marker: config.extension.marker.clone(),
                },
            ));
        }

        sections.extend(config.overrides.iter().map(|filter| {
            Section::active(
                filter.heading.clone(),
                None,
                SectionRule::Override {
                    field: filter.field.clone(),
                    value: filter.value.clone(),
                },
            )
        }));

        sections.push(Section::excluded(&config.ignored, false));
        sections.push(Section::excluded(&config.obsolete, true));

        Self { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Default for SectionPlan {
    fn default() -> Self {
        Self::from_config(&GeneratorConfig::default())
    }
}
