//! Command implementations

mod config;
mod distance;
mod plan;
mod routes;

use crate::cli::{Cli, Commands};
use crate::output::OutputWriter;
use anyhow::Result;
use pathfinder_core::models::DistanceUnit;

/// Execute a CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);

    match &cli.command {
        Commands::Plan(args) => plan::execute(&cli, args, &output).await,
        Commands::Distance(args) => distance::execute(&cli, args, &output),
        Commands::Routes(args) => routes::execute(&cli, args, &output).await,
        Commands::Config => config::execute(&cli, &output),
    }
}

/// Human-readable distance in the configured unit
pub(crate) fn format_distance(km: f64, unit: DistanceUnit) -> String {
    format!("{:.3} {}", unit.convert_kilometers(km), unit.symbol())
}
