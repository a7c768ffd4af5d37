//! Distance command implementation

use crate::cli::{Cli, DistanceArgs};
use crate::commands::format_distance;
use crate::config_loader::load_config_with_overrides;
use crate::output::OutputWriter;
use crate::output_types::DistanceOutput;
use anyhow::{Context, Result};
use pathfinder_core::config::{parse_distance_unit, CliConfigOverrides};
use pathfinder_core::models::Point;
use pathfinder_core::{distance, extract, PathfinderError};

pub fn execute(cli: &Cli, args: &DistanceArgs, output: &OutputWriter) -> Result<()> {
    let overrides = CliConfigOverrides {
        distance_unit: args.unit.as_deref().map(parse_distance_unit).transpose()?,
        ..Default::default()
    };
    let config = load_config_with_overrides(cli, overrides)?;
    let unit = config.distance_unit.value;

    let from = single_point(&args.from).context("Invalid start coordinate")?;
    let to = single_point(&args.to).context("Invalid end coordinate")?;
    let km = distance(&from, &to);

    if output.is_json() {
        output.result(DistanceOutput {
            from: [from.latitude, from.longitude],
            to: [to.latitude, to.longitude],
            distance_km: km,
            distance: unit.convert_kilometers(km),
            unit: unit.symbol().to_string(),
        })?;
    } else {
        output.kv("From", format!("{}, {}", from.latitude, from.longitude));
        output.kv("To", format!("{}, {}", to.latitude, to.longitude));
        output.kv("Distance", format_distance(km, unit));
    }

    Ok(())
}

/// First coordinate pair found in `text`
fn single_point(text: &str) -> Result<Point, PathfinderError> {
    extract(text).into_iter().next().ok_or(PathfinderError::NoCoordinates)
}
