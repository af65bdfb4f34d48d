//! CLI argument parsing for Velador

use crate::check::CheckKind;
use crate::config::RawLists;
use clap::{Parser, ValueEnum};

/// Output format for check reports
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "velador")]
#[command(version)]
#[command(about = "Inventory health-check filter for alerts and compute nodes", long_about = None)]
pub struct Cli {
    /// Which collection to evaluate
    #[arg(long = "check", value_enum, default_value = "alerts")]
    pub check: CheckKind,

    /// Inventory snapshot file (JSON), or - for stdin
    #[arg(long = "snapshot", value_name = "PATH")]
    pub snapshot: String,

    /// Only evaluate alerts whose affected-entity kind matches exactly (repeatable)
    #[arg(long = "include-kind", value_name = "KIND")]
    pub include_kind: Vec<String>,

    /// Skip alerts whose affected-entity kind matches exactly (repeatable)
    #[arg(long = "exclude-kind", value_name = "KIND")]
    pub exclude_kind: Vec<String>,

    /// Only evaluate alerts whose name contains the fragment (repeatable)
    #[arg(long = "include-name", value_name = "FRAGMENT")]
    pub include_name: Vec<String>,

    /// Skip alerts whose name contains the fragment (repeatable)
    #[arg(long = "exclude-name", value_name = "FRAGMENT")]
    pub exclude_name: Vec<String>,

    /// Only evaluate alerts whose description contains the fragment (repeatable)
    #[arg(long = "include-description", value_name = "FRAGMENT")]
    pub include_description: Vec<String>,

    /// Skip alerts whose description contains the fragment (repeatable)
    #[arg(long = "exclude-description", value_name = "FRAGMENT")]
    pub exclude_description: Vec<String>,

    /// Only evaluate objects whose display name matches exactly (repeatable)
    #[arg(long = "include-entity", value_name = "NAME")]
    pub include_entity: Vec<String>,

    /// Skip objects whose display name matches exactly (repeatable)
    #[arg(long = "exclude-entity", value_name = "NAME")]
    pub exclude_entity: Vec<String>,

    /// Only evaluate objects in the given group (repeatable)
    #[arg(long = "include-group", value_name = "GROUP")]
    pub include_group: Vec<String>,

    /// Skip objects in the given group (repeatable)
    #[arg(long = "exclude-group", value_name = "GROUP")]
    pub exclude_group: Vec<String>,

    /// Only evaluate alerts at the given severity: gray, yellow or red (repeatable)
    #[arg(long = "include-severity", value_name = "SEVERITY")]
    pub include_severity: Vec<String>,

    /// Skip alerts at the given severity (repeatable)
    #[arg(long = "exclude-severity", value_name = "SEVERITY")]
    pub exclude_severity: Vec<String>,

    /// Only evaluate nodes in the given storage container (repeatable,
    /// mutually exclusive with --exclude-container)
    #[arg(long = "include-container", value_name = "CONTAINER")]
    pub include_container: Vec<String>,

    /// Skip nodes in the given storage container (repeatable,
    /// mutually exclusive with --include-container)
    #[arg(long = "exclude-container", value_name = "CONTAINER")]
    pub exclude_container: Vec<String>,

    /// Evaluate alerts an operator already acknowledged
    #[arg(long = "evaluate-acknowledged")]
    pub evaluate_acknowledged: bool,

    /// Evaluate nodes that are powered off
    #[arg(long = "evaluate-powered-off")]
    pub evaluate_powered_off: bool,

    /// Warning threshold on the remaining count
    #[arg(short = 'w', long = "warning", value_name = "COUNT")]
    pub warning: Option<usize>,

    /// Critical threshold on the remaining count
    #[arg(short = 'c', long = "critical", value_name = "COUNT")]
    pub critical: Option<usize>,

    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug logging to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

impl Cli {
    /// Collect the per-dimension flags into the raw lists the
    /// configuration validator consumes.
    pub fn raw_lists(&self) -> RawLists {
        RawLists {
            include_kind: self.include_kind.clone(),
            exclude_kind: self.exclude_kind.clone(),
            include_name: self.include_name.clone(),
            exclude_name: self.exclude_name.clone(),
            include_description: self.include_description.clone(),
            exclude_description: self.exclude_description.clone(),
            include_entity: self.include_entity.clone(),
            exclude_entity: self.exclude_entity.clone(),
            include_group: self.include_group.clone(),
            exclude_group: self.exclude_group.clone(),
            include_severity: self.include_severity.clone(),
            exclude_severity: self.exclude_severity.clone(),
            include_container: self.include_container.clone(),
            exclude_container: self.exclude_container.clone(),
            evaluate_acknowledged: self.evaluate_acknowledged,
            evaluate_powered_off: self.evaluate_powered_off,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_minimal_invocation() {
        let cli = Cli::parse_from(["velador", "--snapshot", "inv.json"]);
        assert_eq!(cli.snapshot, "inv.json");
        assert_eq!(cli.check, CheckKind::Alerts);
        assert!(cli.include_name.is_empty());
        assert!(!cli.evaluate_acknowledged);
    }

    #[test]
    fn test_cli_repeatable_dimension_flags() {
        let cli = Cli::parse_from([
            "velador",
            "--snapshot",
            "inv.json",
            "--exclude-name",
            "cpu usage",
            "--exclude-name",
            "memory usage",
        ]);
        assert_eq!(cli.exclude_name, vec!["cpu usage", "memory usage"]);
    }

    #[test]
    fn test_cli_node_check_selection() {
        let cli = Cli::parse_from(["velador", "--snapshot", "-", "--check", "nodes"]);
        assert_eq!(cli.check, CheckKind::Nodes);
        assert_eq!(cli.snapshot, "-");
    }

    #[test]
    fn test_cli_thresholds() {
        let cli = Cli::parse_from(["velador", "--snapshot", "i.json", "-w", "1", "-c", "3"]);
        assert_eq!(cli.warning, Some(1));
        assert_eq!(cli.critical, Some(3));
    }

    #[test]
    fn test_cli_thresholds_default_unset() {
        let cli = Cli::parse_from(["velador", "--snapshot", "i.json"]);
        assert_eq!(cli.warning, None);
        assert_eq!(cli.critical, None);
    }

    #[test]
    fn test_cli_absolute_toggles() {
        let cli = Cli::parse_from([
            "velador",
            "--snapshot",
            "i.json",
            "--evaluate-acknowledged",
            "--evaluate-powered-off",
        ]);
        assert!(cli.evaluate_acknowledged);
        assert!(cli.evaluate_powered_off);
    }

    #[test]
    fn test_raw_lists_carries_all_dimensions() {
        let cli = Cli::parse_from([
            "velador",
            "--snapshot",
            "i.json",
            "--include-kind",
            "ComputeNode",
            "--exclude-severity",
            "gray",
            "--include-container",
            "prod",
        ]);
        let raw = cli.raw_lists();
        assert_eq!(raw.include_kind, vec!["ComputeNode"]);
        assert_eq!(raw.exclude_severity, vec!["gray"]);
        assert_eq!(raw.include_container, vec!["prod"]);
    }
}
