//! JSON file route storage.
//!
//! Layout under the data directory:
//! - `routes.json` holds every route record
//! - `points/<route id>.json` holds the ordered points of one route

use async_trait::async_trait;
use pathfinder_core::error::{PathfinderError, Result};
use pathfinder_core::models::{Point, Route, RouteId};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

use crate::ports::RouteStore;

const ROUTES_FILE: &str = "routes.json";
const POINTS_DIR: &str = "points";

/// File-backed implementation of RouteStore
#[derive(Debug)]
pub struct JsonRouteStore {
    root: PathBuf,
    // Serializes read-modify-write cycles on routes.json
    index_lock: Mutex<()>,
}

impl JsonRouteStore {
    /// Create a store rooted at `root`; directories are created on first write
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), index_lock: Mutex::new(()) }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn routes_file(&self) -> PathBuf {
        self.root.join(ROUTES_FILE)
    }

    fn points_file(&self, id: RouteId) -> PathBuf {
        self.root.join(POINTS_DIR).join(format!("{}.json", id))
    }

    async fn read_routes(&self) -> Result<Vec<Route>> {
        let path = self.routes_file();
        if !fs::try_exists(&path).await? {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path).await?;
        serde_json::from_str(&content).map_err(|e| {
            PathfinderError::Storage(format!("Corrupt route index {}: {}", path.display(), e))
        })
    }

    async fn write_routes(&self, routes: &[Route]) -> Result<()> {
        fs::create_dir_all(&self.root).await?;
        let content = serde_json::to_string_pretty(routes)?;
        write_replacing(&self.routes_file(), content).await
    }
}

/// Write to a sibling temp file, then rename it over `path`.
/// Readers see either the old or the new content, never a partial file.
async fn write_replacing(path: &Path, content: String) -> Result<()> {
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, content).await?;
    fs::rename(&tmp, path).await?;
    Ok(())
}

#[async_trait]
impl RouteStore for JsonRouteStore {
    async fn save_route(&self, route: &Route, points: &[Point]) -> Result<RouteId> {
        let _guard = self.index_lock.lock().await;

        fs::create_dir_all(self.root.join(POINTS_DIR)).await?;
        let content = serde_json::to_string_pretty(points)?;
        write_replacing(&self.points_file(route.id), content).await?;

        let mut routes = self.read_routes().await?;
        routes.retain(|r| r.id != route.id);
        routes.push(route.clone());
        self.write_routes(&routes).await?;

        tracing::debug!(id = %route.id, points = points.len(), "Saved route");
        Ok(route.id)
    }

    async fn list_routes(&self) -> Result<Vec<Route>> {
        let mut routes = self.read_routes().await?;
        routes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(routes)
    }

    async fn get_route(&self, id: RouteId) -> Result<Option<Route>> {
        let routes = self.read_routes().await?;
        Ok(routes.into_iter().find(|r| r.id == id))
    }

    async fn get_points(&self, id: RouteId) -> Result<Vec<Point>> {
        let path = self.points_file(id);
        if !fs::try_exists(&path).await? {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path).await?;
        let mut points: Vec<Point> = serde_json::from_str(&content).map_err(|e| {
            PathfinderError::Storage(format!("Corrupt points file {}: {}", path.display(), e))
        })?;
        points.sort_by_key(|p| p.sequence_index);
        Ok(points)
    }

    async fn delete_route(&self, id: RouteId) -> Result<()> {
        let _guard = self.index_lock.lock().await;

        let mut routes = self.read_routes().await?;
        let before = routes.len();
        routes.retain(|r| r.id != id);
        if routes.len() == before {
            return Err(PathfinderError::RouteNotFound { id: id.to_string() });
        }
        self.write_routes(&routes).await?;

        let points_file = self.points_file(id);
        if fs::try_exists(&points_file).await? {
            fs::remove_file(&points_file).await?;
        }

        tracing::debug!(id = %id, "Deleted route");
        Ok(())
    }
}
