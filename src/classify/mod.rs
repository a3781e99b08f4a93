//! Priority-ordered partitioning of the registry into output sections.
//!
//! `classify` walks the registry once per section, in plan order. A
//! [`ConsumedSet`] scoped to the call records every claimed index, and each
//! pass skips indices already in it, so the first section that matches an
//! entry keeps it. The plan always ends with the two catch-alls, which makes
//! the result a partition: every entry lands in exactly one group.

pub mod section;

pub use section::{RenderMode, Section, SectionPlan, SectionRule};

use crate::registry::Registry;
use std::collections::HashSet;

/// Indices already assigned to a section during one classification run.
///
/// Grows monotonically; a claimed index is never released.
#[derive(Debug, Default)]
pub struct ConsumedSet {
    claimed: HashSet<usize>,
}

impl ConsumedSet {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            claimed: HashSet::with_capacity(capacity),
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.claimed.contains(&index)
    }

    /// Returns false when the index was already claimed.
    pub fn claim(&mut self, index: usize) -> bool {
        self.claimed.insert(index)
    }

    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }
}

/// One section with the registry indices it claimed, in registry order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionGroup<'p> {
    pub section: &'p Section,
    pub entries: Vec<usize>,
}

/// The result of a classification run, groups in plan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification<'p> {
    groups: Vec<SectionGroup<'p>>,
}

impl<'p> Classification<'p> {
    pub fn groups(&self) -> &[SectionGroup<'p>] {
        &self.groups
    }

    /// Total number of assigned entries across all groups.
    pub fn assigned(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }

    /// The section that claimed the entry at `index`.
    pub fn section_of(&self, index: usize) -> Option<&'p Section> {
        self.groups
            .iter()
            .find(|group| group.entries.contains(&index))
            .map(|group| group.section)
    }

    pub fn group(&self, heading: &str) -> Option<&SectionGroup<'p>> {
        self.groups.iter().find(|g| g.section.heading == heading)
    }
}

/// Assign every registry entry to exactly one section of `plan`.
pub fn classify<'p>(registry: &Registry, plan: &'p SectionPlan) -> Classification<'p> {
    let mut consumed = ConsumedSet::with_capacity(registry.len());
    let mut groups = Vec::with_capacity(plan.len());

    for section in plan.sections() {
        let mut entries = Vec::new();
        for (index, entry) in registry.indexed() {
            if consumed.contains(index) || !section.matches(entry) {
                continue;
            }
            consumed.claim(index);
            entries.push(index);
        }

        tracing::debug!(
            section = %section.heading,
            claimed = entries.len(),
            "classification pass"
        );
        if section.is_excluded() && !entries.is_empty() {
            tracing::warn!(
                section = %section.heading,
                entries = entries.len(),
                "entries left out of the generated constants"
            );
        }
        groups.push(SectionGroup { section, entries });
    }

    debug_assert_eq!(consumed.len(), registry.len());
    Classification { groups }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::observability::capture_logs;
    use crate::registry::NumericEntry;
    use pretty_assertions::assert_eq;

    fn heading_of<'p>(classification: &Classification<'p>, index: usize) -> &'p str {
        classification.section_of(index).unwrap().heading.as_str()
    }

    fn sample_registry() -> Registry {
        Registry::new(vec![
            NumericEntry::new("RPL_WELCOME", "001").with_origin("RFC2812"),
            NumericEntry::new("ERR_FOO", "402").with_origin("RFC1459,IRCv3"),
            NumericEntry::new("RPL_OLD", "005")
                .with_origin("RFC1459")
                .with_obsolete(true),
            NumericEntry::new("X_CUSTOM", "999").with_origin(""),
            NumericEntry::new("RPL_ISUPPORT", "005"),
            NumericEntry::new("RPL_LOGGEDIN", "900").with_contact("https://ircv3.net/specs/sasl"),
            NumericEntry::new("RPL_STARTTLS", "670")
                .with_information("ircv3.net/specs/tls")
                .with_obsolete(true),
            NumericEntry::new("RPL_BOUNCE", "010").with_obsolete(true),
        ])
    }

    #[test]
    fn test_partition_covers_every_entry_once() {
        let registry = sample_registry();
        let plan = SectionPlan::default();
        let classification = classify(&registry, &plan);

        let mut seen: Vec<usize> = classification
            .groups()
            .iter()
            .flat_map(|g| g.entries.iter().copied())
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..registry.len()).collect::<Vec<_>>());
        assert_eq!(classification.groups().len(), plan.len());
    }

    #[test]
    fn test_routing_of_sample_registry() {
        let registry = sample_registry();
        let plan = SectionPlan::default();
        let classification = classify(&registry, &plan);

        assert_eq!(heading_of(&classification, 0), "RFC2812");
        assert_eq!(heading_of(&classification, 1), "RFC1459");
        assert_eq!(heading_of(&classification, 2), "RFC1459 (Obsolete)");
        assert_eq!(heading_of(&classification, 3), "Ignored");
        assert_eq!(heading_of(&classification, 4), "Other");
        assert_eq!(heading_of(&classification, 5), "IRCv3");
        // No extension-obsolete section: falls through to the catch-all
        assert_eq!(heading_of(&classification, 6), "Obsolete");
        assert_eq!(heading_of(&classification, 7), "Obsolete");
    }

    #[test]
    fn test_earlier_standard_wins_composite_origin() {
        let registry = Registry::new(vec![
            NumericEntry::new("RPL_BOTH", "301").with_origin("RFC2812, RFC1459")
        ]);
        let plan = SectionPlan::default();
        let classification = classify(&registry, &plan);
        assert_eq!(heading_of(&classification, 0), "RFC1459");
    }

    #[test]
    fn test_override_does_not_steal_from_standards() {
        let registry = Registry::new(vec![
            NumericEntry::new("RPL_ISUPPORT", "005").with_origin("RFC2812")
        ]);
        let plan = SectionPlan::default();
        let classification = classify(&registry, &plan);

        assert_eq!(heading_of(&classification, 0), "RFC2812");
        assert!(classification.group("Other").unwrap().entries.is_empty());
    }

    #[test]
    fn test_obsolete_override_target_is_not_pulled() {
        let registry = Registry::new(vec![
            NumericEntry::new("RPL_ISUPPORT", "005").with_obsolete(true)
        ]);
        let plan = SectionPlan::default();
        let classification = classify(&registry, &plan);
        assert_eq!(heading_of(&classification, 0), "Obsolete");
    }

    #[test]
    fn test_groups_keep_registry_order() {
        let registry = Registry::new(vec![
            NumericEntry::new("C", "003").with_origin("RFC1459"),
            NumericEntry::new("A", "001").with_origin("RFC2812"),
            NumericEntry::new("B", "002").with_origin("RFC1459"),
        ]);
        let plan = SectionPlan::default();
        let classification = classify(&registry, &plan);
        assert_eq!(classification.group("RFC1459").unwrap().entries, vec![0, 2]);
    }

    #[test]
    fn test_custom_standards_order_changes_priority() {
        let config = GeneratorConfig {
            standards: vec!["RFC2812".into(), "RFC1459".into()],
            ..GeneratorConfig::default()
        };
        let registry = Registry::new(vec![
            NumericEntry::new("RPL_BOTH", "301").with_origin("RFC1459,RFC2812")
        ]);
        let plan = SectionPlan::from_config(&config);
        let classification = classify(&registry, &plan);
        assert_eq!(heading_of(&classification, 0), "RFC2812");
    }

    #[test]
    fn test_empty_registry_yields_empty_groups() {
        let registry = Registry::default();
        let plan = SectionPlan::default();
        let classification = classify(&registry, &plan);
        assert_eq!(classification.assigned(), 0);
        assert!(classification.groups().iter().all(|g| g.entries.is_empty()));
    }

    #[test]
    fn test_catch_all_sections_emit_warnings() {
        let registry = Registry::new(vec![
            NumericEntry::new("RPL_WELCOME", "001").with_origin("RFC1459"),
            NumericEntry::new("X_CUSTOM", "999"),
            NumericEntry::new("RPL_GONE", "777").with_obsolete(true),
        ]);
        let plan = SectionPlan::default();

        let (_, logged) = capture_logs(|| classify(&registry, &plan));

        let warnings: Vec<_> = logged.lines().filter(|l| l.contains("WARN")).collect();
        assert_eq!(warnings.len(), 2, "logged: {logged}");
        assert!(warnings[0].contains("Ignored") && warnings[0].contains("entries=1"));
        assert!(warnings[1].contains("Obsolete") && warnings[1].contains("entries=1"));
    }

    #[test]
    fn test_fully_classified_registry_is_quiet() {
        let registry = Registry::new(vec![
            NumericEntry::new("RPL_WELCOME", "001").with_origin("RFC1459")
        ]);
        let plan = SectionPlan::default();

        let (_, logged) = capture_logs(|| classify(&registry, &plan));
        assert!(!logged.contains("WARN"), "logged: {logged}");
    }

    #[test]
    fn test_consumed_set_claims_once() {
        let mut consumed = ConsumedSet::default();
        assert!(consumed.is_empty());
        assert!(consumed.claim(4));
        assert!(!consumed.claim(4));
        assert!(consumed.contains(4));
        assert_eq!(consumed.len(), 1);
    }
}
