//! In-memory route storage for development and testing.
//!
//! Uses `RwLock::unwrap()` intentionally. Lock poisoning only occurs when
//! another thread panicked while holding the lock, which is unrecoverable.

use async_trait::async_trait;
use pathfinder_core::error::{PathfinderError, Result};
use pathfinder_core::models::{Point, Route, RouteId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::ports::RouteStore;

/// In-memory implementation of RouteStore
#[derive(Debug, Clone, Default)]
pub struct MemoryRouteStore {
    routes: Arc<RwLock<HashMap<RouteId, Route>>>,
    points: Arc<RwLock<HashMap<RouteId, Vec<Point>>>>,
}

impl MemoryRouteStore {
    /// Create a new in-memory route store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RouteStore for MemoryRouteStore {
    async fn save_route(&self, route: &Route, points: &[Point]) -> Result<RouteId> {
        let mut routes = self.routes.write().unwrap();
        let mut stored_points = self.points.write().unwrap();

        routes.insert(route.id, route.clone());
        stored_points.insert(route.id, points.to_vec());
        Ok(route.id)
    }

    async fn list_routes(&self) -> Result<Vec<Route>> {
        let routes = self.routes.read().unwrap();
        let mut list: Vec<Route> = routes.values().cloned().collect();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(list)
    }

    async fn get_route(&self, id: RouteId) -> Result<Option<Route>> {
        let routes = self.routes.read().unwrap();
        Ok(routes.get(&id).cloned())
    }

    async fn get_points(&self, id: RouteId) -> Result<Vec<Point>> {
        let stored_points = self.points.read().unwrap();
        let mut points = stored_points.get(&id).cloned().unwrap_or_default();
        points.sort_by_key(|p| p.sequence_index);
        Ok(points)
    }

    async fn delete_route(&self, id: RouteId) -> Result<()> {
        let mut routes = self.routes.write().unwrap();
        let mut stored_points = self.points.write().unwrap();

        if routes.remove(&id).is_none() {
            return Err(PathfinderError::RouteNotFound { id: id.to_string() });
        }
        stored_points.remove(&id);
        Ok(())
    }
}
