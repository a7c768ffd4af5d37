use chrono::{DateTime, Utc};
use pathfinder_core::models::{Point, Route};
use serde::Serialize;
use tabled::Tabled;

/// Output for plan command
#[derive(Debug, Serialize)]
pub struct PlanOutput {
    pub name: String,
    pub optimized: bool,
    pub point_count: usize,
    pub total_distance_km: f64,
    pub total_distance: f64,
    pub unit: String,
    /// `[min_lon, min_lat, max_lon, max_lat]`
    pub bounds: Option<[f64; 4]>,
    pub points: Vec<Point>,
    pub saved_id: Option<String>,
}

/// Output for distance command
#[derive(Debug, Serialize)]
pub struct DistanceOutput {
    pub from: [f64; 2],
    pub to: [f64; 2],
    pub distance_km: f64,
    pub distance: f64,
    pub unit: String,
}

/// Output for routes list command
#[derive(Debug, Serialize)]
pub struct RouteListOutput {
    pub routes: Vec<Route>,
}

/// Output for routes show command
#[derive(Debug, Serialize)]
pub struct RouteDetailOutput {
    pub route: Route,
    pub points: Vec<Point>,
}

/// Output for config command
#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    pub entries: Vec<ConfigEntry>,
}

#[derive(Debug, Serialize, Tabled)]
pub struct ConfigEntry {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Source")]
    pub source: String,
}

/// One table row per ordered point
#[derive(Tabled)]
pub struct PointRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "Latitude")]
    pub latitude: f64,
    #[tabled(rename = "Longitude")]
    pub longitude: f64,
    #[tabled(rename = "Leg")]
    pub leg: String,
}

#[derive(Tabled)]
pub struct RouteRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Points")]
    pub points: usize,
    #[tabled(rename = "Distance")]
    pub distance: String,
    #[tabled(rename = "Created")]
    pub created_at: String,
}

impl RouteRow {
    pub fn new(route: &Route, distance: String) -> Self {
        Self {
            id: route.id.to_string(),
            name: route.name.clone(),
            points: route.total_points,
            distance,
            created_at: format_timestamp(route.created_at),
        }
    }
}

pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
