//! Pathfinder Core - Coordinate extraction, geodesic distance, and path ordering
//!
//! This crate contains the numeric core of Pathfinder: turning free-form text
//! into an ordered sequence of points, measuring it on a spherical earth, and
//! reordering it into a shorter visiting order.

pub mod config;
pub mod error;
pub mod geodesic;
pub mod models;
pub mod optimize;
pub mod parse;
pub mod planner;

pub use error::{PathfinderError, Result};
pub use geodesic::{distance, EARTH_RADIUS_KM};
pub use optimize::{reorder, total_length};
pub use parse::extract;
pub use planner::RoutePlanner;
