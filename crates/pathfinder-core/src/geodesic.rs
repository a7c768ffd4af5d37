//! Great-circle distance on a spherical earth

use crate::models::Point;

/// Mean earth radius used for every distance in Pathfinder
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points in kilometers.
///
/// Symmetric and zero for identical coordinates. No ellipsoidal correction is
/// applied, so results near antipodal pairs are approximate.
pub fn distance(a: &Point, b: &Point) -> f64 {
    haversine_km(a.latitude, a.longitude, b.latitude, b.longitude)
}

/// Haversine distance between two raw coordinate pairs in kilometers
pub fn haversine_km(latitude_1: f64, longitude_1: f64, latitude_2: f64, longitude_2: f64) -> f64 {
    let lat1_rad = latitude_1.to_radians();
    let lat2_rad = latitude_2.to_radians();

    // Only the absolute differences matter, which keeps the result symmetric
    let dlat = (latitude_2 - latitude_1).abs().to_radians();
    let dlon = (longitude_2 - longitude_1).abs().to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1 for near-antipodal pairs
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
