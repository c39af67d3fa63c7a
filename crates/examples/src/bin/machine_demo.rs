use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use mg_core::SystemClock;
use mg_machines::generate_readings;
use mg_runtime::init_tracing;
use mg_runtime::metrics::MetricsRegistry;
use mg_scenarios::{run_scenario, ScenarioConfig};

/// Generates simulated machine readings.
#[derive(Parser, Debug)]
#[command(name = "machine_demo")]
struct Args {
    /// JSON scenario file. Without it the built-in demonstration runs.
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Pretty-print each reading.
    #[arg(long)]
    pretty: bool,

    /// Print each machine's description before the readings.
    #[arg(long)]
    describe: bool,

    /// Append a JSON line with generator counters.
    #[arg(long)]
    metrics: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();
    info!("machine_demo starting");

    let cfg = match &args.scenario {
        Some(path) => ScenarioConfig::from_path(path)?,
        None => ScenarioConfig::default(),
    };

    let metrics = MetricsRegistry::default();
    let mut factory = cfg.build_factory();
    let outcome = run_scenario(&mut factory, &cfg);

    metrics.inc_machines_created(outcome.machines.len() as u64);
    metrics.inc_unknown_kinds(outcome.unknown_kinds() as u64);
    metrics.inc_status_rejections(outcome.status_rejections() as u64);

    if args.describe {
        for machine in &outcome.machines {
            println!("{machine}");
        }
    }

    let readings = generate_readings(&outcome.machines, &SystemClock);
    metrics.inc_readings_generated(readings.len() as u64);
    for reading in &readings {
        debug!(id = %reading.id, "reading generated");
        let line = if args.pretty {
            serde_json::to_string_pretty(reading).context("serializing reading")?
        } else {
            reading.to_json_line().context("serializing reading")?
        };
        println!("{line}");
    }

    let snapshot = metrics.snapshot();
    if args.metrics {
        println!("{}", snapshot.to_json_line("machine_demo"));
    }
    info!(?snapshot, diagnostics = snapshot.diagnostics(), "machine_demo finished");
    Ok(())
}
