use serde::{Deserialize, Serialize};

/// Distance units used when reporting route lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DistanceUnit {
    Meters,
    #[default]
    Kilometers,
    Miles,
    Feet,
}

impl DistanceUnit {
    /// Convert a distance in kilometers to this unit
    pub fn convert_kilometers(&self, km: f64) -> f64 {
        match self {
            DistanceUnit::Meters => km * 1000.0,
            DistanceUnit::Kilometers => km,
            DistanceUnit::Miles => km * 1000.0 / 1609.34,
            DistanceUnit::Feet => km * 1000.0 / 0.3048,
        }
    }

    /// Short unit suffix for display
    pub fn symbol(&self) -> &'static str {
        match self {
            DistanceUnit::Meters => "m",
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "mi",
            DistanceUnit::Feet => "ft",
        }
    }
}
