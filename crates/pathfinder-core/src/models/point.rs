use serde::{Deserialize, Serialize};

/// A geographic coordinate with its position in an ordered sequence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Latitude in degrees
    pub latitude: f64,

    /// Longitude in degrees
    pub longitude: f64,

    /// 0-based rank within the containing sequence.
    /// Derived from the sequence order and rewritten on every reorder.
    pub sequence_index: usize,
}

impl Point {
    pub fn new(latitude: f64, longitude: f64, sequence_index: usize) -> Self {
        Self { latitude, longitude, sequence_index }
    }

    /// Copy of this point placed at a different sequence position
    pub fn at_index(self, sequence_index: usize) -> Self {
        Self { sequence_index, ..self }
    }

    /// Whether latitude is within [-90, 90] and longitude within [-180, 180]
    pub fn in_valid_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Coordinate pair as `(latitude, longitude)`
    pub fn coordinates(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

impl From<Point> for geo::Point<f64> {
    fn from(point: Point) -> Self {
        // geo uses x = longitude, y = latitude
        geo::Point::new(point.longitude, point.latitude)
    }
}

/// Rewrite `sequence_index` so it matches each point's current position
pub fn reindex(points: &mut [Point]) {
    for (index, point) in points.iter_mut().enumerate() {
        point.sequence_index = index;
    }
}
