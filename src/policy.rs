//! Policy combinator: whole-object keep/drop decisions
//!
//! Combines the per-dimension verdicts for one object into a single
//! excluded/included decision, then layers the entity-kind-specific
//! absolute policies on top. Precedence:
//!
//! 1. Any explicit exclusion match on any dimension is an absolute veto.
//! 2. If any dimension has an active inclusion list, the object must
//!    match at least one of them — active inclusion constraints form an
//!    OR-combined admission gate across dimensions, not independent
//!    AND-combined filters. With no active inclusion lists anywhere,
//!    every object passes this gate.
//! 3. Absolute policies (acknowledgement, power state, container scope)
//!    run last and can exclude an object that was explicitly included.

use crate::config::{ContainerScope, FilterConfiguration};
use crate::entity::{Alert, ComputeNode, PowerState};
use crate::filter::DimensionVerdict;
use crate::matcher;

/// Outcome of evaluating one object against a policy.
///
/// The reason flags are best-effort diagnostics for the tally and may
/// overlap: an object can match an exclusion value on more than one
/// dimension at once. Only `excluded` is authoritative.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decision {
    pub excluded: bool,
    pub by_name: bool,
    pub by_kind: bool,
    pub by_container: bool,
}

/// Combine per-dimension verdicts into the named-dimension exclusion
/// decision (absolute policies are applied separately).
pub fn combine_verdicts(verdicts: &[DimensionVerdict]) -> bool {
    if verdicts.iter().any(|v| v.explicitly_excluded) {
        return true;
    }
    let gate_active = verdicts.iter().any(|v| v.inclusion_active);
    gate_active && !verdicts.iter().any(|v| v.explicitly_included)
}

/// Decides whether one entity of kind `E` stays in scope.
pub trait ExclusionPolicy<E> {
    fn decide(&self, entity: &E) -> Decision;
}

/// Alert policy: six named dimensions plus the acknowledgement toggle.
#[derive(Debug, Clone)]
pub struct AlertPolicy {
    config: FilterConfiguration,
}

impl AlertPolicy {
    pub fn new(config: FilterConfiguration) -> Self {
        Self { config }
    }
}

impl ExclusionPolicy<Alert> for AlertPolicy {
    fn decide(&self, alert: &Alert) -> Decision {
        let criteria = &self.config.alerts;
        let kind = criteria.kind.evaluate(&alert.kind);
        let name = criteria.name.evaluate(&alert.name);
        let description = criteria.description.evaluate(&alert.description);
        let entity = criteria.entity.evaluate(&alert.entity);
        let group = criteria.group.evaluate(&alert.group);
        let severity = criteria.severity.evaluate(&alert.severity.to_string());

        let verdicts = [kind, name, description, entity, group, severity];
        let mut excluded = combine_verdicts(&verdicts);

        // Acknowledged alerts are an orthogonal safety default: skipped
        // even when explicitly included, unless evaluation is enabled.
        if alert.acknowledged && !self.config.evaluate_acknowledged {
            excluded = true;
        }

        Decision {
            excluded,
            by_name: name.explicitly_excluded || description.explicitly_excluded,
            by_kind: kind.explicitly_excluded || severity.explicitly_excluded,
            by_container: group.explicitly_excluded,
        }
    }
}

/// Compute node policy: name/group dimensions plus power-state and
/// container-scope absolute policies.
#[derive(Debug, Clone)]
pub struct NodePolicy {
    config: FilterConfiguration,
}

impl NodePolicy {
    pub fn new(config: FilterConfiguration) -> Self {
        Self { config }
    }

    /// Container scoping per the tagged variant: an inclusion list
    /// excludes everything outside all listed containers, an exclusion
    /// list removes only nodes inside the listed ones.
    fn outside_container_scope(&self, node: &ComputeNode) -> bool {
        match &self.config.container_scope {
            ContainerScope::Unrestricted => false,
            ContainerScope::Within(containers) => {
                !matcher::exact_match(&node.container, containers)
            }
            ContainerScope::Outside(containers) => {
                matcher::exact_match(&node.container, containers)
            }
        }
    }
}

impl ExclusionPolicy<ComputeNode> for NodePolicy {
    fn decide(&self, node: &ComputeNode) -> Decision {
        let criteria = &self.config.nodes;
        let name = criteria.name.evaluate(&node.name);
        let group = criteria.group.evaluate(&node.group);

        let verdicts = [name, group];
        let mut excluded = combine_verdicts(&verdicts);

        let by_container = self.outside_container_scope(node);
        if by_container {
            excluded = true;
        }

        if node.power_state == PowerState::PoweredOff && !self.config.evaluate_powered_off {
            excluded = true;
        }

        Decision {
            excluded,
            by_name: name.explicitly_excluded,
            by_kind: false,
            by_container: by_container || group.explicitly_excluded,
        }
    }
}
