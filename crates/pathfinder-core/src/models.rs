pub mod point;
pub mod route;
pub mod units;

pub use point::Point;
pub use route::{Route, RouteId, RouteSummary};
pub use units::DistanceUnit;
