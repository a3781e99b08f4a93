//! In-memory form of the numerics registry.
//!
//! A registry is an ordered list of [`NumericEntry`] records. The order is the
//! order of the source file and is the only iteration order the classifier
//! uses; it carries no ranking.

pub mod loader;

pub use loader::{load_registry, parse_registry};

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// A value an override filter compares an entry attribute against.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Flag(bool),
    Text(String),
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl std::fmt::Display for FilterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag(flag) => write!(f, "{flag}"),
            Self::Text(text) => write!(f, "{text:?}"),
        }
    }
}

/// One registry record.
///
/// `name` and `numeric` may be absent at load time. The classifier never
/// reads them; the renderer rejects an entry that lacks either.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "RawNumericEntry")]
pub struct NumericEntry {
    pub name: Option<String>,

    /// The reply code text, kept verbatim (`"001"` stays `"001"`).
    pub numeric: Option<String>,

    pub origin: Option<String>,

    pub obsolete: bool,

    pub contact: Option<String>,

    pub information: Option<String>,

    /// Everything else in the record, available to override filters.
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// A record as written in the file, where the code may sit under either
/// `numeric` or `code`.
#[derive(Deserialize)]
struct RawNumericEntry {
    #[serde(default)]
    name: Option<String>,

    #[serde(default, deserialize_with = "scalar_text")]
    numeric: Option<ScalarText>,

    #[serde(default, deserialize_with = "scalar_text")]
    code: Option<ScalarText>,

    #[serde(default)]
    origin: Option<String>,

    #[serde(default)]
    obsolete: bool,

    #[serde(default)]
    contact: Option<String>,

    #[serde(default)]
    information: Option<String>,

    #[serde(flatten)]
    extra: BTreeMap<String, serde_yaml::Value>,
}

impl TryFrom<RawNumericEntry> for NumericEntry {
    type Error = String;

    fn try_from(raw: RawNumericEntry) -> Result<Self, Self::Error> {
        let label = raw.name.as_deref().unwrap_or("<unnamed>");
        let numeric = match (raw.numeric, raw.code) {
            (Some(numeric), Some(code)) if numeric.text() != code.text() => {
                return Err(format!(
                    "entry {label} has numeric {:?} and code {:?}; keep only one",
                    numeric.text(),
                    code.text()
                ));
            }
            (numeric, code) => numeric.or(code),
        };

        if let Some(ScalarText::Number(text)) = &numeric {
            tracing::warn!(
                entry = label,
                numeric = %text,
                "numeric written as a bare YAML number; quote it to keep leading zeros"
            );
        }

        Ok(Self {
            name: raw.name,
            numeric: numeric.map(ScalarText::into_text),
            origin: raw.origin,
            obsolete: raw.obsolete,
            contact: raw.contact,
            information: raw.information,
            extra: raw.extra,
        })
    }
}

impl NumericEntry {
    pub fn new(name: impl Into<String>, numeric: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            numeric: Some(numeric.into()),
            ..Self::default()
        }
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn with_obsolete(mut self, obsolete: bool) -> Self {
        self.obsolete = obsolete;
        self
    }

    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = Some(contact.into());
        self
    }

    pub fn with_information(mut self, information: impl Into<String>) -> Self {
        self.information = Some(information.into());
        self
    }

    /// Provenance label, empty when the record has none.
    pub fn origin(&self) -> &str {
        self.origin.as_deref().unwrap_or_default()
    }

    /// True when `document` occurs anywhere in a non-empty origin.
    ///
    /// Composite origins such as `"RFC1459,IRCv3"` match every document
    /// they mention; the section plan decides which one wins.
    pub fn origin_mentions(&self, document: &str) -> bool {
        let origin = self.origin();
        !origin.is_empty() && origin.contains(document)
    }

    /// True when the contact or information text carries `marker`.
    pub fn affiliated_with(&self, marker: &str) -> bool {
        [&self.contact, &self.information]
            .into_iter()
            .flatten()
            .any(|text| text.contains(marker))
    }

    /// Projects a named attribute onto a comparable filter value.
    ///
    /// Known fields are looked up directly; anything else comes from the
    /// extra attributes, where only scalar values are comparable.
    pub fn attribute(&self, field: &str) -> Option<FilterValue> {
        let text = |value: &Option<String>| value.clone().map(FilterValue::Text);
        match field {
            "name" => text(&self.name),
            "numeric" | "code" => text(&self.numeric),
            "origin" => text(&self.origin),
            "contact" => text(&self.contact),
            "information" => text(&self.information),
            "obsolete" => Some(FilterValue::Flag(self.obsolete)),
            other => self.extra.get(other).and_then(yaml_filter_value),
        }
    }

    pub fn matches(&self, field: &str, expected: &FilterValue) -> bool {
        self.attribute(field).as_ref() == Some(expected)
    }
}

fn yaml_filter_value(value: &serde_yaml::Value) -> Option<FilterValue> {
    match value {
        serde_yaml::Value::String(text) => Some(FilterValue::Text(text.clone())),
        serde_yaml::Value::Bool(flag) => Some(FilterValue::Flag(*flag)),
        serde_yaml::Value::Number(number) => Some(FilterValue::Text(number.to_string())),
        _ => None,
    }
}

/// A code scalar, remembering whether YAML read it as a string or a number.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ScalarText {
    Text(String),
    Number(String),
}

impl ScalarText {
    fn text(&self) -> &str {
        match self {
            Self::Text(text) | Self::Number(text) => text,
        }
    }

    fn into_text(self) -> String {
        match self {
            Self::Text(text) | Self::Number(text) => text,
        }
    }
}

/// Accepts a quoted or bare scalar and keeps its text form.
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<ScalarText>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<serde_yaml::Value>::deserialize(deserializer)? {
        None | Some(serde_yaml::Value::Null) => Ok(None),
        Some(serde_yaml::Value::String(text)) => Ok(Some(ScalarText::Text(text))),
        Some(serde_yaml::Value::Number(number)) => Ok(Some(ScalarText::Number(number.to_string()))),
        Some(other) => Err(D::Error::custom(format!(
            "expected a string or number for numeric, found {other:?}"
        ))),
    }
}

/// The ordered sequence of all registry records.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Registry {
    #[serde(default)]
    pub values: Vec<NumericEntry>,
}

impl Registry {
    pub fn new(values: Vec<NumericEntry>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&NumericEntry> {
        self.values.get(index)
    }

    /// Entries paired with their position in the source file.
    pub fn indexed(&self) -> impl Iterator<Item = (usize, &NumericEntry)> {
        self.values.iter().enumerate()
    }
}

impl FromIterator<NumericEntry> for Registry {
    fn from_iter<I: IntoIterator<Item = NumericEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
