//! Map presentation configuration.

use serde::{Deserialize, Serialize};
use zonal_core::{Coordinate, REGION_CENTER};

const fn default_fallback_lat() -> f64 {
    REGION_CENTER.lat
}

const fn default_fallback_lon() -> f64 {
    REGION_CENTER.lon
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MapConfig {
    /// Latitude used as map centre when there are no zones.
    #[serde(default = "default_fallback_lat")]
    pub fallback_lat: f64,

    /// Longitude used as map centre when there are no zones.
    #[serde(default = "default_fallback_lon")]
    pub fallback_lon: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            fallback_lat: default_fallback_lat(),
            fallback_lon: default_fallback_lon(),
        }
    }
}

impl MapConfig {
    #[must_use]
    pub const fn fallback_center(&self) -> Coordinate {
        Coordinate::new(self.fallback_lat, self.fallback_lon)
    }
}
