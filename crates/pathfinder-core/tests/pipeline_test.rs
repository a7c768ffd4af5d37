//! End-to-end tests for text → ordered points → total length

use pathfinder_core::models::{Point, RouteSummary};
use pathfinder_core::{distance, extract, reorder, total_length, PathfinderError, RoutePlanner};

#[test]
fn test_extract_then_reorder_then_measure() {
    let text = "Stops for today:\n\
                1) 0.0, 0.0\n\
                2) 0.0, 1.0\n\
                3) 0.0, 3.0\n\
                4) 0.0, 0.5\n";

    let extracted = extract(text);
    assert_eq!(extracted.len(), 4);

    let ordered = reorder(&extracted);
    let lons: Vec<f64> = ordered.iter().map(|p| p.longitude).collect();
    assert_eq!(lons, vec![0.0, 0.5, 1.0, 3.0]);

    let expected = distance(&Point::new(0.0, 0.0, 0), &Point::new(0.0, 0.5, 1))
        + distance(&Point::new(0.0, 0.5, 1), &Point::new(0.0, 1.0, 2))
        + distance(&Point::new(0.0, 1.0, 2), &Point::new(0.0, 3.0, 3));
    assert!((total_length(&ordered) - expected).abs() < 1e-9);
    assert!(total_length(&ordered) < total_length(&extracted));
}

#[test]
fn test_planner_matches_manual_pipeline() {
    let text = "34.0522, -118.2437 | 40.7128, -74.0060 | 36.1699, -115.1398 | 37.7749, -122.4194";

    let summary = RoutePlanner::new().plan("west coast", text).unwrap();
    let manual = RouteSummary::new("west coast", reorder(&extract(text)));

    assert_eq!(summary, manual);

    // LA -> Las Vegas -> San Francisco -> New York
    let lats: Vec<f64> = summary.points.iter().map(|p| p.latitude).collect();
    assert_eq!(lats, vec![34.0522, 36.1699, 37.7749, 40.7128]);
}

#[test]
fn test_stored_points_can_be_measured_again() {
    let summary = RoutePlanner::new().plan("loop", "10.5, 10.5 11.5, 10.5 10.5, 11.5").unwrap();

    // A caller persists the ordered points and measures them again after loading
    let json = serde_json::to_string(&summary.points).unwrap();
    let loaded: Vec<Point> = serde_json::from_str(&json).unwrap();

    assert_eq!(total_length(&loaded), summary.total_distance_km);
}

#[test]
fn test_labels_and_pipe_formats_plan_together() {
    let text = "Lat: 34.0, Long: -118.0\n35.5|-117.5\n36.0 -117.0";
    let summary = RoutePlanner::new().with_optimize(false).plan("mixed", text).unwrap();

    assert_eq!(summary.point_count, 3);
    assert_eq!(summary.points[0], Point::new(34.0, -118.0, 0));
    assert_eq!(summary.points[2], Point::new(36.0, -117.0, 2));
}

#[test]
fn test_empty_text_is_reported() {
    assert!(extract("").is_empty());
    assert!(matches!(RoutePlanner::new().plan("blank", ""), Err(PathfinderError::NoCoordinates)));
}
