use crate::error::{PathfinderError, Result};
use crate::models::DistanceUnit;
use crate::planner::DEFAULT_MAX_POINTS;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "pathfinder.toml";

/// Default directory for stored routes
pub const DEFAULT_DATA_DIR: &str = ".pathfinder";

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for Pathfinder
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub distance_unit: ConfigValue<DistanceUnit>,
    pub optimize: ConfigValue<bool>,
    pub max_points: ConfigValue<usize>,
    pub data_dir: ConfigValue<PathBuf>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            distance_unit: ConfigValue::new(DistanceUnit::Kilometers, ConfigSource::Default),
            optimize: ConfigValue::new(true, ConfigSource::Default),
            max_points: ConfigValue::new(DEFAULT_MAX_POINTS, ConfigSource::Default),
            data_dir: ConfigValue::new(PathBuf::from(DEFAULT_DATA_DIR), ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PathfinderError::ConfigNotFound { path: path.to_path_buf() });
        }

        let content = fs::read_to_string(path).map_err(|e| PathfinderError::ConfigInvalid {
            key: "file".to_string(),
            reason: format!("Failed to read config file: {}", e),
        })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| PathfinderError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(distance_unit) = file_config.distance_unit {
            self.distance_unit.update(distance_unit, ConfigSource::File);
        }

        if let Some(optimize) = file_config.optimize {
            self.optimize.update(optimize, ConfigSource::File);
        }

        if let Some(max_points) = file_config.max_points {
            self.max_points.update(validate_max_points(max_points)?, ConfigSource::File);
        }

        if let Some(data_dir) = file_config.data_dir {
            self.data_dir.update(data_dir, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load the file if it exists, keep current values otherwise
    pub fn load_from_optional_file<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        if path.as_ref().exists() {
            self.load_from_file(path)
        } else {
            Ok(self)
        }
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // PATHFINDER_DISTANCE_UNIT
        if let Ok(unit_str) = env::var("PATHFINDER_DISTANCE_UNIT") {
            match parse_distance_unit(&unit_str) {
                Ok(unit) => self.distance_unit.update(unit, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid PATHFINDER_DISTANCE_UNIT value '{}': expected meters, kilometers, miles, or feet",
                    unit_str
                ),
            }
        }

        // PATHFINDER_OPTIMIZE
        if let Ok(optimize_str) = env::var("PATHFINDER_OPTIMIZE") {
            match parse_bool(&optimize_str) {
                Ok(optimize) => self.optimize.update(optimize, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid PATHFINDER_OPTIMIZE value '{}': expected true or false",
                    optimize_str
                ),
            }
        }

        // PATHFINDER_MAX_POINTS
        if let Ok(max_str) = env::var("PATHFINDER_MAX_POINTS") {
            match parse_max_points(&max_str) {
                Ok(max_points) => self.max_points.update(max_points, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid PATHFINDER_MAX_POINTS value '{}': expected a positive integer",
                    max_str
                ),
            }
        }

        // PATHFINDER_DATA_DIR
        if let Ok(data_dir) = env::var("PATHFINDER_DATA_DIR") {
            self.data_dir.update(PathBuf::from(data_dir), ConfigSource::Environment);
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(distance_unit) = overrides.distance_unit {
            self.distance_unit.update(distance_unit, ConfigSource::Cli);
        }

        if let Some(optimize) = overrides.optimize {
            self.optimize.update(optimize, ConfigSource::Cli);
        }

        if let Some(max_points) = overrides.max_points {
            self.max_points.update(max_points, ConfigSource::Cli);
        }

        if let Some(data_dir) = overrides.data_dir {
            self.data_dir.update(data_dir, ConfigSource::Cli);
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "distance_unit".to_string(),
            (format!("{:?}", self.distance_unit.value), self.distance_unit.source),
        );

        map.insert("optimize".to_string(), (self.optimize.value.to_string(), self.optimize.source));

        map.insert(
            "max_points".to_string(),
            (self.max_points.value.to_string(), self.max_points.source),
        );

        map.insert(
            "data_dir".to_string(),
            (self.data_dir.value.display().to_string(), self.data_dir.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    distance_unit: Option<DistanceUnit>,
    optimize: Option<bool>,
    max_points: Option<usize>,
    data_dir: Option<PathBuf>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub distance_unit: Option<DistanceUnit>,
    pub optimize: Option<bool>,
    pub max_points: Option<usize>,
    pub data_dir: Option<PathBuf>,
}

/// Parse distance unit from string
pub fn parse_distance_unit(s: &str) -> Result<DistanceUnit> {
    match s.to_lowercase().as_str() {
        "meters" | "m" => Ok(DistanceUnit::Meters),
        "kilometers" | "km" => Ok(DistanceUnit::Kilometers),
        "miles" | "mi" => Ok(DistanceUnit::Miles),
        "feet" | "ft" => Ok(DistanceUnit::Feet),
        _ => Err(PathfinderError::ConfigInvalid {
            key: "distance_unit".to_string(),
            reason: format!("Invalid distance unit: {}. Use meters, kilometers, miles, or feet", s),
        }),
    }
}

/// Parse a point ceiling from string
pub fn parse_max_points(s: &str) -> Result<usize> {
    let value = s.trim().parse::<usize>().map_err(|_| PathfinderError::ConfigInvalid {
        key: "max_points".to_string(),
        reason: format!("Invalid point limit: {}", s),
    })?;
    validate_max_points(value)
}

/// Reject a zero point ceiling
pub fn validate_max_points(value: usize) -> Result<usize> {
    if value == 0 {
        return Err(PathfinderError::ConfigInvalid {
            key: "max_points".to_string(),
            reason: "Point limit must be at least 1".to_string(),
        });
    }
    Ok(value)
}

fn parse_bool(s: &str) -> Result<bool> {
    match s.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(PathfinderError::ConfigInvalid {
            key: "optimize".to_string(),
            reason: format!("Invalid boolean: {}", s),
        }),
    }
}
