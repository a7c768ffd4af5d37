//! Routes command implementation

use crate::cli::{Cli, RoutesArgs, RoutesCommand};
use crate::commands::format_distance;
use crate::commands::plan::point_rows;
use crate::config_loader::{load_config_with_overrides, open_store};
use crate::output::OutputWriter;
use crate::output_types::{format_timestamp, RouteDetailOutput, RouteListOutput, RouteRow};
use anyhow::{Context, Result};
use pathfinder_core::config::CliConfigOverrides;
use pathfinder_core::models::{RouteId, RouteSummary};
use pathfinder_core::PathfinderError;
use pathfinder_store::RouteStore;

pub async fn execute(cli: &Cli, args: &RoutesArgs, output: &OutputWriter) -> Result<()> {
    let config = load_config_with_overrides(cli, CliConfigOverrides::default())?;
    let unit = config.distance_unit.value;
    let store = open_store(&config);

    match &args.command {
        RoutesCommand::List => {
            let routes = store.list_routes().await.context("Failed to list routes")?;

            if output.is_json() {
                output.result(RouteListOutput { routes })?;
            } else {
                let rows = routes
                    .iter()
                    .map(|route| RouteRow::new(route, format_distance(route.total_distance_km, unit)))
                    .collect();
                output.table::<RouteRow>(rows);
            }
        }
        RoutesCommand::Show { id, geojson } => {
            let id: RouteId = id.parse()?;
            let route = store
                .get_route(id)
                .await?
                .ok_or_else(|| PathfinderError::RouteNotFound { id: id.to_string() })?;
            let points = store.get_points(id).await?;

            if *geojson {
                let summary = RouteSummary::new(route.name.clone(), points);
                return output.result(summary.to_geojson());
            }

            if output.is_json() {
                output.result(RouteDetailOutput { route, points })?;
            } else {
                output.section(format!("Route: {}", route.name));
                output.kv("ID", route.id);
                if !route.description.is_empty() {
                    output.kv("Description", &route.description);
                }
                output.kv("Created", format_timestamp(route.created_at));
                output.kv("Points", route.total_points);
                output.kv("Total Distance", format_distance(route.total_distance_km, unit));
                output.table(point_rows(&points, unit));
            }
        }
        RoutesCommand::Delete { id } => {
            let id: RouteId = id.parse()?;
            store.delete_route(id).await?;
            output.success(format!("Deleted route {}", id));
        }
    }

    Ok(())
}
