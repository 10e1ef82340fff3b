//! Command line entry point running a headless motion scenario.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use smoothmove::{init_logging, Simulation, SimulationConfig};

/// Run a headless sub-pixel motion scenario
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON scenario file; an empty default world is used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the number of ticks to run
    #[arg(short, long)]
    ticks: Option<u32>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match &args.config {
        Some(path) => SimulationConfig::from_path(path)
            .with_context(|| format!("loading scenario {}", path.display()))?,
        None => SimulationConfig::default(),
    };
    let ticks = args.ticks.unwrap_or(config.ticks);

    let mut simulation = Simulation::new(&config).context("building simulation")?;
    simulation.run(ticks);

    let snapshot = serde_json::to_string_pretty(&simulation.snapshot())
        .context("serialising final snapshot")?;
    info!("final state after {} ticks:\n{snapshot}", simulation.ticks());
    Ok(())
}
