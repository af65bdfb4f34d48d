//! Property tests for the filter pipeline contracts
//!
//! Pins the four testable properties: idempotence, exclusion dominance,
//! default admission, and OR-combined admission across dimensions.

use proptest::prelude::*;
use velador::config::{FilterConfiguration, RawLists};
use velador::entity::{Alert, Severity};
use velador::pipeline;
use velador::policy::AlertPolicy;

fn vals(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn alert(kind: &str, name: &str) -> Alert {
    Alert {
        kind: kind.to_string(),
        name: name.to_string(),
        description: String::new(),
        entity: "obj".to_string(),
        group: String::new(),
        severity: Severity::Red,
        acknowledged: false,
        excluded: false,
    }
}

fn policy(raw: RawLists) -> AlertPolicy {
    AlertPolicy::new(FilterConfiguration::from_raw(raw).unwrap())
}

#[test]
fn test_default_admission() {
    // Everything unconstrained and permissive: nothing gets excluded.
    let mut alerts = vec![
        alert("Datastore", "Datastore usage on disk"),
        alert("ComputeNode", "Host cpu usage exceeded"),
    ];
    let tally = pipeline::apply(&mut alerts, &policy(RawLists::default()));
    assert_eq!(tally.excluded, 0);
    assert_eq!(tally.remaining, 2);
}

#[test]
fn test_exclusion_dominance() {
    // The same literal on both lists of the same dimension: excluded.
    let mut alerts = vec![alert("Datastore", "Datastore usage on disk")];
    let tally = pipeline::apply(
        &mut alerts,
        &policy(RawLists {
            include_kind: vals(&["Datastore"]),
            exclude_kind: vals(&["Datastore"]),
            ..Default::default()
        }),
    );
    assert_eq!(tally.remaining, 0);
}

#[test]
fn test_or_across_dimensions_admission() {
    // The kind gate does not match this alert, but the name gate does;
    // OR-combined admission keeps it in scope.
    let mut alerts = vec![alert("Datastore", "Datastore usage on disk")];
    let tally = pipeline::apply(
        &mut alerts,
        &policy(RawLists {
            include_kind: vals(&["ComputeNode"]),
            include_name: vals(&["datastore usage"]),
            ..Default::default()
        }),
    );
    assert_eq!(tally.remaining, 1);
}

#[test]
fn test_failing_every_active_gate_excludes() {
    let mut alerts = vec![alert("Network", "Link flapping")];
    let tally = pipeline::apply(
        &mut alerts,
        &policy(RawLists {
            include_kind: vals(&["ComputeNode"]),
            include_name: vals(&["datastore usage"]),
            ..Default::default()
        }),
    );
    assert_eq!(tally.remaining, 0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_apply_is_idempotent(
        names in prop::collection::vec("[a-zA-Z ]{1,20}", 0..8),
        fragment in "[a-z]{1,6}",
    ) {
        let policy = policy(RawLists {
            exclude_name: vec![fragment],
            ..Default::default()
        });
        let mut alerts: Vec<Alert> = names
            .iter()
            .map(|n| alert("ComputeNode", n))
            .collect();

        let first = pipeline::apply(&mut alerts, &policy);
        let markers: Vec<bool> = alerts.iter().map(|a| a.excluded).collect();
        let second = pipeline::apply(&mut alerts, &policy);
        let markers_after: Vec<bool> = alerts.iter().map(|a| a.excluded).collect();

        prop_assert_eq!(first, second);
        prop_assert_eq!(markers, markers_after);
    }

    #[test]
    fn prop_exclusion_always_dominates_inclusion(value in "[a-zA-Z]{1,12}") {
        // Any kind value appearing on both lists ends excluded.
        let policy = policy(RawLists {
            include_kind: vec![value.clone()],
            exclude_kind: vec![value.clone()],
            ..Default::default()
        });
        let mut alerts = vec![alert(&value, "some alert")];
        let tally = pipeline::apply(&mut alerts, &policy);
        prop_assert_eq!(tally.remaining, 0);
    }

    #[test]
    fn prop_tally_partitions_collection(
        names in prop::collection::vec("[a-z ]{1,15}", 0..10),
        fragment in "[a-z]{1,4}",
    ) {
        let policy = policy(RawLists {
            exclude_name: vec![fragment],
            ..Default::default()
        });
        let mut alerts: Vec<Alert> = names
            .iter()
            .map(|n| alert("Datastore", n))
            .collect();
        let tally = pipeline::apply(&mut alerts, &policy);

        prop_assert_eq!(tally.considered, alerts.len());
        prop_assert_eq!(tally.excluded + tally.remaining, tally.considered);
    }
}
