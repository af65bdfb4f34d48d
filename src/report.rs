//! Report rendering for check output
//!
//! Consumes the annotated collection plus the tally and renders the
//! one-line summary and per-item detail lines, in text or JSON. The sink
//! never mutates exclusion markers and never re-filters; excluded items
//! simply do not appear in the detail listing, while the summary still
//! accounts for everything considered.

use crate::check::CheckStatus;
use crate::entity::{Alert, ComputeNode};
use crate::pipeline::Tally;
use serde::Serialize;
use std::fmt::Write;

/// One in-scope alert as emitted in JSON output.
#[derive(Debug, Clone, Serialize)]
struct JsonAlertItem {
    kind: String,
    name: String,
    entity: String,
    severity: String,
    acknowledged: bool,
}

/// One in-scope compute node as emitted in JSON output.
#[derive(Debug, Clone, Serialize)]
struct JsonNodeItem {
    name: String,
    group: String,
    container: String,
    power_state: String,
}

#[derive(Debug, Serialize)]
struct JsonReport<T: Serialize> {
    status: CheckStatus,
    tally: Tally,
    items: Vec<T>,
}

fn summary_line(status: CheckStatus, tally: &Tally) -> String {
    format!(
        "{}: {} considered, {} excluded ({} by name, {} by kind, {} by container), {} remaining",
        status,
        tally.considered,
        tally.excluded,
        tally.excluded_by_name,
        tally.excluded_by_kind,
        tally.excluded_by_container,
        tally.remaining
    )
}

/// Render the alert check result as text: summary line, then one detail
/// line per in-scope alert.
pub fn render_alerts_text(status: CheckStatus, alerts: &[Alert], tally: &Tally) -> String {
    let mut out = summary_line(status, tally);
    for alert in alerts.iter().filter(|a| !a.excluded) {
        write!(
            out,
            "\n[{}] {} - {} ({})",
            alert.severity, alert.name, alert.entity, alert.kind
        )
        .expect("writing to a String cannot fail");
    }
    out
}

/// Render the node check result as text.
pub fn render_nodes_text(status: CheckStatus, nodes: &[ComputeNode], tally: &Tally) -> String {
    let mut out = summary_line(status, tally);
    for node in nodes.iter().filter(|n| !n.excluded) {
        write!(
            out,
            "\n{} [{}] container={}",
            node.name, node.power_state, node.container
        )
        .expect("writing to a String cannot fail");
    }
    out
}

/// Render the alert check result as a JSON document.
pub fn render_alerts_json(
    status: CheckStatus,
    alerts: &[Alert],
    tally: &Tally,
) -> serde_json::Result<String> {
    let report = JsonReport {
        status,
        tally: *tally,
        items: alerts
            .iter()
            .filter(|a| !a.excluded)
            .map(|a| JsonAlertItem {
                kind: a.kind.clone(),
                name: a.name.clone(),
                entity: a.entity.clone(),
                severity: a.severity.to_string(),
                acknowledged: a.acknowledged,
            })
            .collect(),
    };
    serde_json::to_string_pretty(&report)
}

/// Render the node check result as a JSON document.
pub fn render_nodes_json(
    status: CheckStatus,
    nodes: &[ComputeNode],
    tally: &Tally,
) -> serde_json::Result<String> {
    let report = JsonReport {
        status,
        tally: *tally,
        items: nodes
            .iter()
            .filter(|n| !n.excluded)
            .map(|n| JsonNodeItem {
                name: n.name.clone(),
                group: n.group.clone(),
                container: n.container.clone(),
                power_state: n.power_state.to_string(),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&report)
}
