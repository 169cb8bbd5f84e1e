//! Cross-cutting error types for Zonal.
//!
//! Transport and decode failures live in `zonal-client`, configuration
//! failures in `zonal-config`. The binary converges everything into
//! `anyhow::Error`.

use thiserror::Error;

/// Errors that can be raised by any Zonal crate.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// A latitude/longitude pair is not a usable point on the globe.
    #[error("Invalid coordinate ({lat}, {lon}): {reason}")]
    InvalidCoordinate { lat: f64, lon: f64, reason: String },
}
