//! Plan command implementation

use crate::cli::{Cli, PlanArgs};
use crate::commands::format_distance;
use crate::config_loader::{load_config_with_overrides, open_store};
use crate::output::OutputWriter;
use crate::output_types::{PlanOutput, PointRow};
use anyhow::{Context, Result};
use pathfinder_core::config::{parse_distance_unit, validate_max_points, CliConfigOverrides};
use pathfinder_core::models::{DistanceUnit, Point, Route};
use pathfinder_core::{distance, RoutePlanner};
use pathfinder_store::RouteStore;
use std::fs;
use std::io::Read;

pub async fn execute(cli: &Cli, args: &PlanArgs, output: &OutputWriter) -> Result<()> {
    let overrides = CliConfigOverrides {
        distance_unit: args.unit.as_deref().map(parse_distance_unit).transpose()?,
        optimize: args.no_optimize.then_some(false),
        max_points: args.max_points.map(validate_max_points).transpose()?,
        data_dir: None,
    };
    let config = load_config_with_overrides(cli, overrides)?;
    let unit = config.distance_unit.value;

    let (text, default_name) = read_input(args)?;
    let name = args.name.clone().unwrap_or(default_name);

    let summary = RoutePlanner::from_config(&config).plan(name, &text)?;

    let out_of_range = summary.points.iter().filter(|p| !p.in_valid_range()).count();
    if out_of_range > 0 {
        output.warning(format!(
            "{} point(s) fall outside valid latitude/longitude ranges",
            out_of_range
        ));
    }

    let saved_id = if args.save {
        let store = open_store(&config);
        let route = Route::from_summary(&summary, args.description.as_str());
        store
            .save_route(&route, &summary.points)
            .await
            .with_context(|| format!("Failed to save route to {}", store.root().display()))?;
        Some(route.id)
    } else {
        None
    };

    if args.geojson {
        return output.result(summary.to_geojson());
    }

    let bounds = summary
        .bounds()
        .map(|rect| [rect.min().x, rect.min().y, rect.max().x, rect.max().y]);

    if output.is_json() {
        output.result(PlanOutput {
            name: summary.name.clone(),
            optimized: config.optimize.value,
            point_count: summary.point_count,
            total_distance_km: summary.total_distance_km,
            total_distance: unit.convert_kilometers(summary.total_distance_km),
            unit: unit.symbol().to_string(),
            bounds,
            points: summary.points,
            saved_id: saved_id.map(|id| id.to_string()),
        })?;
        return Ok(());
    }

    output.section(format!("Route: {}", summary.name));
    output.table(point_rows(&summary.points, unit));
    output.kv("Points", summary.point_count);
    output.kv("Total Distance", format_distance(summary.total_distance_km, unit));
    if let Some([min_lon, min_lat, max_lon, max_lat]) = bounds {
        output.kv(
            "Bounds",
            format!("lat {:.4} to {:.4}, lon {:.4} to {:.4}", min_lat, max_lat, min_lon, max_lon),
        );
    }
    output.kv("Order", if config.optimize.value { "nearest neighbour" } else { "as written" });

    if let Some(id) = saved_id {
        output.success(format!("Saved route {}", id));
    }

    Ok(())
}

/// Read coordinate text from the file, the inline text, or stdin
fn read_input(args: &PlanArgs) -> Result<(String, String)> {
    if let Some(path) = &args.file {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("route")
            .to_string();
        return Ok((text, name));
    }

    if let Some(text) = &args.text {
        return Ok((text.clone(), "route".to_string()));
    }

    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text).context("Failed to read stdin")?;
    Ok((text, "route".to_string()))
}

pub(crate) fn point_rows(points: &[Point], unit: DistanceUnit) -> Vec<PointRow> {
    points
        .iter()
        .enumerate()
        .map(|(i, point)| PointRow {
            index: point.sequence_index,
            latitude: point.latitude,
            longitude: point.longitude,
            leg: if i == 0 {
                "-".to_string()
            } else {
                format_distance(distance(&points[i - 1], point), unit)
            },
        })
        .collect()
}
