//! Pathfinder Store - Route storage ports and adapters
//!
//! This crate defines the route storage port and provides in-memory and
//! JSON file adapters for it.

pub mod json;
pub mod memory;
pub mod ports;

pub use json::JsonRouteStore;
pub use memory::MemoryRouteStore;
pub use ports::RouteStore;
