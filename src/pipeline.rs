//! Filter pipeline: marker annotation and tally derivation
//!
//! Applies a policy to every member of a collection and sets the
//! exclusion marker on the members the policy drops. Objects are never
//! removed or reordered, so the report sink can still enumerate
//! everything considered. The marker transition is one-way; applying the
//! same pipeline twice yields identical markers.

use crate::entity::Filterable;
use crate::policy::ExclusionPolicy;
use serde::Serialize;
use tracing::debug;

/// Aggregate counters derived from one pipeline application.
///
/// Reason buckets count decisions, not distinct causes: an object that
/// matches both a name and a kind exclusion value increments both
/// buckets. Only `considered`, `excluded` and `remaining` partition the
/// collection exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Total objects examined
    pub considered: usize,
    /// Objects carrying the exclusion marker after this run
    pub excluded: usize,
    /// Objects whose decision matched a name/description exclusion value
    pub excluded_by_name: usize,
    /// Objects whose decision matched a kind/severity exclusion value
    pub excluded_by_kind: usize,
    /// Objects dropped by container/group scoping
    pub excluded_by_container: usize,
    /// Objects still in scope for evaluation
    pub remaining: usize,
}

/// Annotate `collection` in place and derive the tally.
///
/// Stable length, stable order; markers set by an earlier run are left
/// untouched even if this policy would admit the object.
pub fn apply<E, P>(collection: &mut [E], policy: &P) -> Tally
where
    E: Filterable,
    P: ExclusionPolicy<E>,
{
    let mut tally = Tally {
        considered: collection.len(),
        ..Default::default()
    };

    for entity in collection.iter_mut() {
        let decision = policy.decide(entity);
        if decision.excluded {
            entity.mark_excluded();
        }
        if decision.by_name {
            tally.excluded_by_name += 1;
        }
        if decision.by_kind {
            tally.excluded_by_kind += 1;
        }
        if decision.by_container {
            tally.excluded_by_container += 1;
        }
    }

    // Second pass over the markers themselves, so that objects excluded
    // by an earlier application stay counted as excluded.
    tally.excluded = collection.iter().filter(|e| e.is_excluded()).count();
    tally.remaining = tally.considered - tally.excluded;

    debug!(
        considered = tally.considered,
        excluded = tally.excluded,
        remaining = tally.remaining,
        "filter pipeline applied"
    );

    tally
}
