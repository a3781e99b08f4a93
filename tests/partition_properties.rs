//! Property tests for the classification partition and rendering determinism.

use irc_numerics::{classify, render, NumericEntry, Registry, RenderOptions, SectionPlan};
use proptest::prelude::*;

fn origin() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        Just(Some("RFC1459".to_string())),
        Just(Some("RFC2812".to_string())),
        Just(Some("RFC1459,IRCv3".to_string())),
        Just(Some("RFC2812, RFC1459".to_string())),
        Just(Some("Undernet".to_string())),
    ]
}

fn contact() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("https://ircv3.net/specs".to_string())),
        Just(Some("irc.example.org".to_string())),
    ]
}

fn entry() -> impl Strategy<Value = NumericEntry> {
    (
        prop_oneof![Just("RPL_ISUPPORT".to_string()), "[A-Z_]{3,12}"],
        "[0-9]{3}",
        origin(),
        any::<bool>(),
        contact(),
        contact(),
    )
        .prop_map(|(name, numeric, origin, obsolete, contact, information)| NumericEntry {
            name: Some(name),
            numeric: Some(numeric),
            origin,
            obsolete,
            contact,
            information,
            ..NumericEntry::default()
        })
}

fn registry() -> impl Strategy<Value = Registry> {
    prop::collection::vec(entry(), 0..40).prop_map(Registry::new)
}

proptest! {
    /// Property: every entry is assigned to exactly one section
    #[test]
    fn prop_classification_is_a_partition(registry in registry()) {
        let plan = SectionPlan::default();
        let classification = classify(&registry, &plan);

        let mut assigned: Vec<usize> = classification
            .groups()
            .iter()
            .flat_map(|g| g.entries.iter().copied())
            .collect();
        assigned.sort_unstable();

        prop_assert_eq!(assigned, (0..registry.len()).collect::<Vec<_>>());
    }

    /// Property: obsolete entries never land in an active section
    #[test]
    fn prop_obsolete_entries_stay_out_of_active_sections(registry in registry()) {
        let plan = SectionPlan::default();
        let classification = classify(&registry, &plan);

        for group in classification.groups() {
            for &index in &group.entries {
                let entry = registry.get(index).unwrap();
                if entry.obsolete {
                    prop_assert!(
                        group.section.is_excluded() || group.section.heading.ends_with("(Obsolete)")
                    );
                }
            }
        }
    }

    /// Property: rendering the same registry twice gives identical text, and
    /// every entry name appears once
    #[test]
    fn prop_rendering_is_deterministic(registry in registry()) {
        let plan = SectionPlan::default();
        let options = RenderOptions::default();

        let first = render(&registry, &classify(&registry, &plan), &options).unwrap();
        let second = render(&registry, &classify(&registry, &plan), &options).unwrap();
        prop_assert_eq!(&first, &second);

        let declarations = first.lines().filter(|line| line.contains(" = \"")).count();
        prop_assert_eq!(declarations, registry.len());
    }
}
