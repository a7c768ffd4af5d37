use async_trait::async_trait;
use pathfinder_core::error::Result;
use pathfinder_core::models::{Point, Route, RouteId};

/// Port for persisting ordered routes
#[async_trait]
pub trait RouteStore: Send + Sync {
    /// Store a route record together with its ordered points
    async fn save_route(&self, route: &Route, points: &[Point]) -> Result<RouteId>;

    /// List all stored routes, newest first
    async fn list_routes(&self) -> Result<Vec<Route>>;

    /// Retrieve a route record by ID
    async fn get_route(&self, id: RouteId) -> Result<Option<Route>>;

    /// Retrieve the points of a route, ordered by sequence index
    async fn get_points(&self, id: RouteId) -> Result<Vec<Point>>;

    /// Delete a route and its points
    async fn delete_route(&self, id: RouteId) -> Result<()>;
}
