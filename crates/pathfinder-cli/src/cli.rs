use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pathfinder - Turn coordinate text into short visiting routes
#[derive(Parser, Debug)]
#[command(name = "pathfinder")]
#[command(about = "Turn coordinate text into short visiting routes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a config file (defaults to ./pathfinder.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding stored routes
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract coordinates from text and order them into a route
    Plan(PlanArgs),

    /// Measure the great-circle distance between two coordinates
    Distance(DistanceArgs),

    /// Manage stored routes
    Routes(RoutesArgs),

    /// Show the resolved configuration and where each value came from
    Config,
}

#[derive(Parser, Debug)]
pub struct PlanArgs {
    /// File containing coordinate text (reads stdin when neither FILE nor --text is given)
    pub file: Option<PathBuf>,

    /// Coordinate text given inline
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Route name (defaults to the file name, or "route")
    #[arg(long)]
    pub name: Option<String>,

    /// Description stored with the route
    #[arg(long, default_value = "")]
    pub description: String,

    /// Keep the points in the order they appear in the text
    #[arg(long)]
    pub no_optimize: bool,

    /// Maximum number of points accepted
    #[arg(long)]
    pub max_points: Option<usize>,

    /// Distance unit for display (meters, kilometers, miles, feet)
    #[arg(long)]
    pub unit: Option<String>,

    /// Save the route to the data directory
    #[arg(long)]
    pub save: bool,

    /// Print the route as a GeoJSON feature
    #[arg(long)]
    pub geojson: bool,
}

#[derive(Parser, Debug)]
pub struct DistanceArgs {
    /// Start coordinate, e.g. "34.0522, -118.2437"
    pub from: String,

    /// End coordinate, e.g. "40.7128, -74.0060"
    pub to: String,

    /// Distance unit for display (meters, kilometers, miles, feet)
    #[arg(long)]
    pub unit: Option<String>,
}

#[derive(Parser, Debug)]
pub struct RoutesArgs {
    #[command(subcommand)]
    pub command: RoutesCommand,
}

#[derive(Subcommand, Debug)]
pub enum RoutesCommand {
    /// List stored routes
    List,

    /// Show a stored route and its points
    Show {
        /// Route ID
        id: String,

        /// Print the route as a GeoJSON feature
        #[arg(long)]
        geojson: bool,
    },

    /// Delete a stored route
    Delete {
        /// Route ID
        id: String,
    },
}
