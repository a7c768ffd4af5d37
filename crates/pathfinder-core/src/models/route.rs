use chrono::{DateTime, Utc};
use geo::{BoundingRect, MultiPoint, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::point::Point;
use crate::error::PathfinderError;
use crate::optimize::total_length;

/// Unique identifier for a stored route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteId(pub Uuid);

impl RouteId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RouteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RouteId {
    type Err = PathfinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(RouteId)
            .map_err(|_| PathfinderError::InvalidRouteId { id: s.to_string() })
    }
}

/// A named ordered sequence of points with its derived totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub name: String,
    pub points: Vec<Point>,
    pub total_distance_km: f64,
    pub point_count: usize,
}

impl RouteSummary {
    /// Build a summary, computing the path length in the given order
    pub fn new(name: impl Into<String>, points: Vec<Point>) -> Self {
        let total_distance_km = total_length(&points);
        let point_count = points.len();
        Self { name: name.into(), points, total_distance_km, point_count }
    }

    /// Bounding box of all points (x = longitude, y = latitude)
    pub fn bounds(&self) -> Option<Rect<f64>> {
        let multi: MultiPoint<f64> = self.points.iter().map(|p| geo::Point::from(*p)).collect();
        multi.bounding_rect()
    }

    /// Export the route as a GeoJSON LineString feature
    pub fn to_geojson(&self) -> geojson::Feature {
        let coordinates: Vec<Vec<f64>> =
            self.points.iter().map(|p| vec![p.longitude, p.latitude]).collect();

        let mut properties = serde_json::Map::new();
        properties.insert("name".to_string(), self.name.clone().into());
        properties.insert("total_distance_km".to_string(), self.total_distance_km.into());
        properties.insert("point_count".to_string(), self.point_count.into());

        let bbox = self
            .bounds()
            .map(|rect| vec![rect.min().x, rect.min().y, rect.max().x, rect.max().y]);

        geojson::Feature {
            bbox,
            geometry: Some(geojson::Geometry::new(geojson::Value::LineString(coordinates))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

/// Stored route record; the points themselves live next to it in the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Unique identifier
    pub id: RouteId,

    /// Route name
    pub name: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// When the route was created
    pub created_at: DateTime<Utc>,

    /// Number of points in the route
    pub total_points: usize,

    /// Path length in kilometers, in stored order
    pub total_distance_km: f64,
}

impl Route {
    /// Create a route record describing a planned summary
    pub fn from_summary(summary: &RouteSummary, description: impl Into<String>) -> Self {
        Self {
            id: RouteId::new(),
            name: summary.name.clone(),
            description: description.into(),
            created_at: Utc::now(),
            total_points: summary.point_count,
            total_distance_km: summary.total_distance_km,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<Point> {
        vec![Point::new(0.0, 0.0, 0), Point::new(0.0, 1.0, 1), Point::new(2.0, 1.0, 2)]
    }

    #[test]
    fn test_summary_totals() {
        let summary = RouteSummary::new("walk", sample_points());

        assert_eq!(summary.point_count, 3);
        assert!(summary.total_distance_km > 0.0);
        assert_eq!(summary.total_distance_km, total_length(&summary.points));
    }

    #[test]
    fn test_summary_degenerate_sizes() {
        assert_eq!(RouteSummary::new("empty", vec![]).total_distance_km, 0.0);
        assert_eq!(RouteSummary::new("one", vec![Point::new(10.0, 10.0, 0)]).total_distance_km, 0.0);
    }

    #[test]
    fn test_bounds() {
        let summary = RouteSummary::new("walk", sample_points());
        let rect = summary.bounds().expect("non-empty route has bounds");

        assert_eq!(rect.min().x, 0.0);
        assert_eq!(rect.max().x, 1.0);
        assert_eq!(rect.min().y, 0.0);
        assert_eq!(rect.max().y, 2.0);

        assert!(RouteSummary::new("empty", vec![]).bounds().is_none());
    }

    #[test]
    fn test_geojson_uses_lon_lat_order() {
        let summary = RouteSummary::new("walk", sample_points());
        let feature = summary.to_geojson();

        let geometry = feature.geometry.expect("feature has geometry");
        match geometry.value {
            geojson::Value::LineString(coords) => {
                assert_eq!(coords.len(), 3);
                assert_eq!(coords[2], vec![1.0, 2.0]);
            }
            other => panic!("expected LineString, got {:?}", other),
        }

        let properties = feature.properties.expect("feature has properties");
        assert_eq!(properties["name"], "walk");
        assert_eq!(properties["point_count"], 3);
    }

    #[test]
    fn test_geojson_bbox_follows_bounds() {
        let feature = RouteSummary::new("walk", sample_points()).to_geojson();
        assert_eq!(feature.bbox, Some(vec![0.0, 0.0, 1.0, 2.0]));

        assert!(RouteSummary::new("empty", vec![]).to_geojson().bbox.is_none());
    }

    #[test]
    fn test_route_from_summary() {
        let summary = RouteSummary::new("walk", sample_points());
        let route = Route::from_summary(&summary, "morning loop");

        assert_eq!(route.name, "walk");
        assert_eq!(route.description, "morning loop");
        assert_eq!(route.total_points, 3);
        assert_eq!(route.total_distance_km, summary.total_distance_km);
    }

    #[test]
    fn test_route_id_parse() {
        let id = RouteId::new();
        let parsed: RouteId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);

        assert!(matches!(
            "not-a-uuid".parse::<RouteId>(),
            Err(PathfinderError::InvalidRouteId { id }) if id == "not-a-uuid"
        ));
    }
}
