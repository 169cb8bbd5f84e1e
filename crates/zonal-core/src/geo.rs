//! Geographic coordinates.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Default map focus for the region the zones endpoint covers (Bengaluru).
pub const REGION_CENTER: Coordinate = Coordinate::new(12.9716, 77.5946);

/// A WGS84 latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Build a coordinate, rejecting non-finite or out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidCoordinate`] if either component is not
    /// finite, `lat` is outside `[-90, 90]`, or `lon` is outside `[-180, 180]`.
    pub fn try_new(lat: f64, lon: f64) -> Result<Self, CoreError> {
        let invalid = |reason: &str| CoreError::InvalidCoordinate {
            lat,
            lon,
            reason: reason.to_string(),
        };

        if !lat.is_finite() || !lon.is_finite() {
            return Err(invalid("components must be finite"));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(invalid("latitude must be within [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(invalid("longitude must be within [-180, 180]"));
        }
        Ok(Self { lat, lon })
    }
}
