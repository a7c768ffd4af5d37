//! Text-to-route pipeline

use crate::config::LayeredConfig;
use crate::error::{PathfinderError, Result};
use crate::models::RouteSummary;
use crate::optimize::reorder;
use crate::parse::extract;

/// Default ceiling on the number of points a single route may hold
pub const DEFAULT_MAX_POINTS: usize = 5000;

/// Turns raw text into a named, ordered route summary
#[derive(Debug, Clone)]
pub struct RoutePlanner {
    optimize: bool,
    max_points: usize,
}

impl Default for RoutePlanner {
    fn default() -> Self {
        Self { optimize: true, max_points: DEFAULT_MAX_POINTS }
    }
}

impl RoutePlanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Planner settings taken from resolved configuration
    pub fn from_config(config: &LayeredConfig) -> Self {
        Self { optimize: config.optimize.value, max_points: config.max_points.value }
    }

    /// Enable or disable nearest-neighbour reordering
    pub fn with_optimize(mut self, optimize: bool) -> Self {
        self.optimize = optimize;
        self
    }

    /// Set the maximum number of points accepted
    pub fn with_max_points(mut self, max_points: usize) -> Self {
        self.max_points = max_points;
        self
    }

    /// Extract, optionally reorder, and measure the coordinates found in `text`
    pub fn plan(&self, name: impl Into<String>, text: &str) -> Result<RouteSummary> {
        let points = extract(text);

        if points.is_empty() {
            return Err(PathfinderError::NoCoordinates);
        }

        if points.len() > self.max_points {
            return Err(PathfinderError::TooManyPoints {
                count: points.len(),
                limit: self.max_points,
            });
        }

        let points = if self.optimize { reorder(&points) } else { points };
        let summary = RouteSummary::new(name, points);

        tracing::info!(
            name = %summary.name,
            points = summary.point_count,
            total_km = summary.total_distance_km,
            optimized = self.optimize,
            "Planned route"
        );

        Ok(summary)
    }
}
