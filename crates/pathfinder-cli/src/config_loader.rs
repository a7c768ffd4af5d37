//! Configuration loading utilities for CLI commands

use anyhow::{Context, Result};
use pathfinder_core::config::{CliConfigOverrides, LayeredConfig, CONFIG_FILE_NAME};
use pathfinder_store::JsonRouteStore;
use std::path::Path;

use crate::cli::Cli;

/// Load layered configuration: defaults, then file, then environment
pub fn load_config(explicit_path: Option<&Path>) -> Result<LayeredConfig> {
    let config = match explicit_path {
        Some(path) => LayeredConfig::with_defaults()
            .load_from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => LayeredConfig::with_defaults()
            .load_from_optional_file(CONFIG_FILE_NAME)
            .context("Failed to load configuration file")?,
    };

    Ok(config.load_from_env())
}

/// Load layered configuration with CLI overrides
pub fn load_config_with_overrides(cli: &Cli, mut overrides: CliConfigOverrides) -> Result<LayeredConfig> {
    let mut config = load_config(cli.config.as_deref())?;
    if overrides.data_dir.is_none() {
        overrides.data_dir = cli.data_dir.clone();
    }
    config.update_from_cli(overrides);

    tracing::debug!(config = ?config.to_inspection_map(), "Resolved configuration");
    Ok(config)
}

/// Open the route store for the configured data directory
pub fn open_store(config: &LayeredConfig) -> JsonRouteStore {
    JsonRouteStore::new(config.data_dir.value.clone())
}
