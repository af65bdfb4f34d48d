//! Filter configuration construction and validation
//!
//! All validation happens here, before any inventory is read: unknown
//! severity keywords and mutually exclusive container lists are rejected
//! as a single fatal configuration error. The filter pipeline itself is
//! total and is never invoked with an invalid configuration.
//!
//! The configuration is an explicit immutable value passed by parameter.
//! Nothing downstream reads flag state directly.

use crate::entity::Severity;
use crate::filter::{DimensionCriteria, MatchMode};
use thiserror::Error;

/// Configuration rejected before any inventory is fetched.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown severity keyword: {0} (expected gray, yellow or red)")]
    UnknownSeverity(String),

    #[error("container inclusion and exclusion lists are mutually exclusive")]
    ConflictingContainerLists,
}

/// Container scoping for compute nodes, chosen once at construction.
///
/// An inclusion list implicitly excludes every node outside all listed
/// containers; there is no default-container fallback. An exclusion list
/// removes only nodes inside the listed containers.
#[derive(Debug, Clone)]
pub enum ContainerScope {
    Unrestricted,
    Within(Vec<String>),
    Outside(Vec<String>),
}

impl ContainerScope {
    /// Build the scope from the two CLI lists, rejecting the combination.
    pub fn from_lists(
        included: Vec<String>,
        excluded: Vec<String>,
    ) -> Result<Self, ConfigError> {
        match (included.is_empty(), excluded.is_empty()) {
            (true, true) => Ok(ContainerScope::Unrestricted),
            (false, true) => Ok(ContainerScope::Within(included)),
            (true, false) => Ok(ContainerScope::Outside(excluded)),
            (false, false) => Err(ConfigError::ConflictingContainerLists),
        }
    }
}

/// Dimension criteria for alert filtering.
#[derive(Debug, Clone)]
pub struct AlertCriteria {
    /// Affected-entity type label (exact)
    pub kind: DimensionCriteria,
    /// Alert title (substring)
    pub name: DimensionCriteria,
    /// Alert description (substring)
    pub description: DimensionCriteria,
    /// Affected-entity display name (exact)
    pub entity: DimensionCriteria,
    /// Owning group of the affected entity (exact)
    pub group: DimensionCriteria,
    /// Severity label (exact, keywords validated)
    pub severity: DimensionCriteria,
}

/// Dimension criteria for compute node filtering.
#[derive(Debug, Clone)]
pub struct NodeCriteria {
    /// Node display name (exact)
    pub name: DimensionCriteria,
    /// Owning group (exact)
    pub group: DimensionCriteria,
}

/// Everything the filter pipeline needs for one run, for both entity
/// kinds, plus the absolute policy toggles.
#[derive(Debug, Clone)]
pub struct FilterConfiguration {
    pub alerts: AlertCriteria,
    pub nodes: NodeCriteria,
    /// Evaluate alerts an operator already acknowledged (default: skip)
    pub evaluate_acknowledged: bool,
    /// Evaluate nodes that are powered off (default: skip)
    pub evaluate_powered_off: bool,
    pub container_scope: ContainerScope,
}

/// Raw, unvalidated match lists as collected from the CLI.
#[derive(Debug, Clone, Default)]
pub struct RawLists {
    pub include_kind: Vec<String>,
    pub exclude_kind: Vec<String>,
    pub include_name: Vec<String>,
    pub exclude_name: Vec<String>,
    pub include_description: Vec<String>,
    pub exclude_description: Vec<String>,
    pub include_entity: Vec<String>,
    pub exclude_entity: Vec<String>,
    pub include_group: Vec<String>,
    pub exclude_group: Vec<String>,
    pub include_severity: Vec<String>,
    pub exclude_severity: Vec<String>,
    pub include_container: Vec<String>,
    pub exclude_container: Vec<String>,
    pub evaluate_acknowledged: bool,
    pub evaluate_powered_off: bool,
}

impl FilterConfiguration {
    /// Validate the raw lists and assemble the immutable configuration.
    pub fn from_raw(raw: RawLists) -> Result<Self, ConfigError> {
        let include_severity = normalize_severities(&raw.include_severity)?;
        let exclude_severity = normalize_severities(&raw.exclude_severity)?;
        let container_scope =
            ContainerScope::from_lists(raw.include_container, raw.exclude_container)?;

        Ok(Self {
            alerts: AlertCriteria {
                kind: DimensionCriteria::new(
                    MatchMode::Exact,
                    raw.include_kind,
                    raw.exclude_kind,
                ),
                name: DimensionCriteria::new(
                    MatchMode::Substring,
                    raw.include_name,
                    raw.exclude_name,
                ),
                description: DimensionCriteria::new(
                    MatchMode::Substring,
                    raw.include_description,
                    raw.exclude_description,
                ),
                entity: DimensionCriteria::new(
                    MatchMode::Exact,
                    raw.include_entity.clone(),
                    raw.exclude_entity.clone(),
                ),
                group: DimensionCriteria::new(
                    MatchMode::Exact,
                    raw.include_group.clone(),
                    raw.exclude_group.clone(),
                ),
                severity: DimensionCriteria::new(
                    MatchMode::Exact,
                    include_severity,
                    exclude_severity,
                ),
            },
            nodes: NodeCriteria {
                // Node names arrive as exact match values on the same
                // flags the alert entity dimension uses.
                name: DimensionCriteria::new(
                    MatchMode::Exact,
                    raw.include_entity,
                    raw.exclude_entity,
                ),
                group: DimensionCriteria::new(
                    MatchMode::Exact,
                    raw.include_group,
                    raw.exclude_group,
                ),
            },
            evaluate_acknowledged: raw.evaluate_acknowledged,
            evaluate_powered_off: raw.evaluate_powered_off,
            container_scope,
        })
    }

    /// Permissive default: no constraints, skip acknowledged and
    /// powered-off items.
    pub fn permissive() -> Self {
        Self::from_raw(RawLists::default()).expect("empty lists always validate")
    }
}

/// Parse each severity keyword and replace it with its canonical label,
/// so aliases like "grey" match the label alerts report.
fn normalize_severities(keywords: &[String]) -> Result<Vec<String>, ConfigError> {
    keywords
        .iter()
        .map(|keyword| {
            keyword
                .parse::<Severity>()
                .map(|severity| severity.to_string())
                .map_err(ConfigError::UnknownSeverity)
        })
        .collect()
}
