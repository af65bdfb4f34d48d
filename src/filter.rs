//! Per-dimension inclusion/exclusion criteria
//!
//! A `DimensionCriteria` holds the operator-supplied allow-list and
//! deny-list for one filterable attribute (kind, name, severity, ...)
//! together with the match mode that attribute uses. Evaluating a
//! criteria against an attribute value yields a three-boolean verdict;
//! no single dimension decides an object's fate — that is the policy
//! combinator's job.

use crate::matcher;

/// How a dimension compares attribute values against match values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Case-insensitive full equality (kind, severity, container name).
    Exact,
    /// Case-insensitive containment (alert name, description).
    Substring,
}

/// Inclusion and exclusion match values for one filterable attribute.
///
/// Both lists may be empty. The same literal may appear in both lists;
/// exclusion wins in that case (enforced by the combinator, not here).
#[derive(Debug, Clone)]
pub struct DimensionCriteria {
    included: Vec<String>,
    excluded: Vec<String>,
    mode: MatchMode,
}

/// The three per-dimension answers exposed to the policy combinator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DimensionVerdict {
    /// The value matched the dimension's exclusion list.
    pub explicitly_excluded: bool,
    /// The dimension has a non-empty inclusion list.
    pub inclusion_active: bool,
    /// The inclusion list is active and the value matched it.
    pub explicitly_included: bool,
}

impl DimensionCriteria {
    /// Create criteria with no constraints (matches the unconfigured state).
    pub fn unconstrained(mode: MatchMode) -> Self {
        Self {
            included: Vec::new(),
            excluded: Vec::new(),
            mode,
        }
    }

    pub fn new(mode: MatchMode, included: Vec<String>, excluded: Vec<String>) -> Self {
        Self {
            included,
            excluded,
            mode,
        }
    }

    /// True if neither list is populated; such a dimension never
    /// influences the combined decision.
    pub fn is_unconstrained(&self) -> bool {
        self.included.is_empty() && self.excluded.is_empty()
    }

    /// Evaluate one attribute value against this dimension.
    pub fn evaluate(&self, value: &str) -> DimensionVerdict {
        let matches = |candidates: &[String]| match self.mode {
            MatchMode::Exact => matcher::exact_match(value, candidates),
            MatchMode::Substring => matcher::substring_match(value, candidates),
        };

        let inclusion_active = !self.included.is_empty();
        DimensionVerdict {
            explicitly_excluded: !self.excluded.is_empty() && matches(&self.excluded),
            inclusion_active,
            explicitly_included: inclusion_active && matches(&self.included),
        }
    }
}
