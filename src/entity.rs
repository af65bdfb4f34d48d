//! Inventory entity records
//!
//! The two filterable entity kinds delivered by the management API:
//! triggered alerts and virtualized compute nodes. Both carry a mutable
//! exclusion marker that the filter pipeline sets; exclusion is an
//! annotation, never a deletion, so collection length and order stay
//! stable for the report sink.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Alert severity label as reported by the management API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Gray,
    Yellow,
    Red,
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gray" | "grey" => Ok(Severity::Gray),
            "yellow" => Ok(Severity::Yellow),
            "red" => Ok(Severity::Red),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Gray => "gray",
            Severity::Yellow => "yellow",
            Severity::Red => "red",
        };
        f.write_str(label)
    }
}

/// Compute node power state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerState {
    PoweredOn,
    PoweredOff,
    Suspended,
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PowerState::PoweredOn => "powered_on",
            PowerState::PoweredOff => "powered_off",
            PowerState::Suspended => "suspended",
        };
        f.write_str(label)
    }
}

/// A triggered alert fetched from the management API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    /// Type label of the affected entity (e.g., "ComputeNode", "Datastore")
    pub kind: String,
    /// Alert title, free text
    pub name: String,
    /// Longer free-text description
    #[serde(default)]
    pub description: String,
    /// Display name of the affected inventory object
    pub entity: String,
    /// Owning group or container of the affected object
    #[serde(default)]
    pub group: String,
    pub severity: Severity,
    /// Whether an operator has acknowledged the alert
    #[serde(default)]
    pub acknowledged: bool,
    /// Exclusion marker, set by the filter pipeline (never by the API)
    #[serde(default)]
    pub excluded: bool,
}

/// A virtualized compute node fetched from the management API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeNode {
    /// Display name of the node
    pub name: String,
    /// Owning group (folder, pool) of the node
    #[serde(default)]
    pub group: String,
    /// Storage container the node lives in
    #[serde(default)]
    pub container: String,
    pub power_state: PowerState,
    /// Exclusion marker, set by the filter pipeline (never by the API)
    #[serde(default)]
    pub excluded: bool,
}

/// Access to the one-way exclusion marker shared by all entity kinds.
///
/// The marker transitions `Included -> Excluded` at most once per run;
/// nothing ever clears it, which is what makes re-applying a pipeline a
/// no-op.
pub trait Filterable {
    fn is_excluded(&self) -> bool;
    fn mark_excluded(&mut self);
}

impl Filterable for Alert {
    fn is_excluded(&self) -> bool {
        self.excluded
    }

    fn mark_excluded(&mut self) {
        self.excluded = true;
    }
}

impl Filterable for ComputeNode {
    fn is_excluded(&self) -> bool {
        self.excluded
    }

    fn mark_excluded(&mut self) {
        self.excluded = true;
    }
}
