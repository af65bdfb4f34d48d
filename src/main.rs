use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use velador::check::{evaluate_thresholds, CheckKind, CheckStatus};
use velador::cli::{Cli, OutputFormat};
use velador::config::FilterConfiguration;
use velador::pipeline::{self, Tally};
use velador::policy::{AlertPolicy, NodePolicy};
use velador::report;
use velador::source::Snapshot;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Filter the selected collection and render the report.
fn run_check(args: &Cli, config: FilterConfiguration, snapshot: Snapshot) -> Result<CheckStatus> {
    let (status, tally, output) = match args.check {
        CheckKind::Alerts => {
            let mut alerts = snapshot.alerts;
            let tally = pipeline::apply(&mut alerts, &AlertPolicy::new(config));
            let status = threshold_status(args, &tally);
            let output = match args.format {
                OutputFormat::Text => report::render_alerts_text(status, &alerts, &tally),
                OutputFormat::Json => report::render_alerts_json(status, &alerts, &tally)
                    .context("Failed to serialize alert report")?,
            };
            (status, tally, output)
        }
        CheckKind::Nodes => {
            let mut nodes = snapshot.nodes;
            let tally = pipeline::apply(&mut nodes, &NodePolicy::new(config));
            let status = threshold_status(args, &tally);
            let output = match args.format {
                OutputFormat::Text => report::render_nodes_text(status, &nodes, &tally),
                OutputFormat::Json => report::render_nodes_json(status, &nodes, &tally)
                    .context("Failed to serialize node report")?,
            };
            (status, tally, output)
        }
    };

    tracing::debug!(remaining = tally.remaining, %status, "check evaluated");
    println!("{output}");
    Ok(status)
}

fn threshold_status(args: &Cli, tally: &Tally) -> CheckStatus {
    evaluate_thresholds(tally.remaining, args.warning, args.critical)
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    // Configuration validation happens before any inventory is read;
    // invalid flag combinations are a single fatal error.
    let config = FilterConfiguration::from_raw(args.raw_lists())
        .context("Invalid filter configuration")?;

    let snapshot = Snapshot::load(&args.snapshot)?;

    let status = run_check(&args, config, snapshot)?;
    std::process::exit(status.exit_code());
}
