//! Error types for Pathfinder

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathfinderError {
    // Planning errors
    #[error("No coordinates found in input text")]
    NoCoordinates,

    #[error("Too many points: {count} exceeds the limit of {limit}")]
    TooManyPoints { count: usize, limit: usize },

    // Route errors
    #[error("Route not found: {id}")]
    RouteNotFound { id: String },

    #[error("Invalid route ID: {id}")]
    InvalidRouteId { id: String },

    // Configuration errors
    #[error("Config file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for PathfinderError {
    fn from(err: serde_json::Error) -> Self {
        PathfinderError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PathfinderError>;
