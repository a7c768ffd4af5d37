//! Coordinate extraction from free-form text
//!
//! Recognizes pairs of decimal numbers such as `34.0522, -118.2437`,
//! `34.05 -118.24`, `40.71|-74.00` or `Lat: 34.05, Long: -118.24`. Both numbers
//! must carry a fractional part, so bare integers like `34, -118` are ignored.

use regex::Regex;
use std::sync::LazyLock;

use crate::models::Point;

/// `NUM SEP [LABEL] NUM`, where a label is a word followed by `:` or `=`
static COORDINATE_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(-?[0-9]+\.[0-9]+)\s*[,|\s]\s*(?:[A-Za-z]+\s*[:=]\s*)?(-?[0-9]+\.[0-9]+)",
    )
    .expect("coordinate pattern is valid")
});

/// Extract coordinate pairs from text in the order they appear.
///
/// The first number of each pair is the latitude and the second the longitude.
/// Values are not range checked. Text without any pair yields an empty vector.
pub fn extract(text: &str) -> Vec<Point> {
    let mut points = Vec::new();

    for captures in COORDINATE_PAIR.captures_iter(text) {
        let latitude = parse_number(&captures[1]);
        let longitude = parse_number(&captures[2]);

        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => {
                points.push(Point::new(latitude, longitude, points.len()));
            }
            _ => {
                tracing::debug!(
                    matched = &captures[0],
                    "Skipping coordinate pair that does not fit in a finite f64"
                );
            }
        }
    }

    tracing::debug!(count = points.len(), "Extracted coordinate pairs");
    points
}

fn parse_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}
