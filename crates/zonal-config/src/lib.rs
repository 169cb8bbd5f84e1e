//! # zonal-config
//!
//! Layered configuration loading for Zonal using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. `ZONAL_API_BASE` (selects the zones endpoint on its own)
//! 2. Environment variables (`ZONAL_*` prefix, `__` as separator)
//! 3. Project-level `.zonal/config.toml`
//! 4. User-level `~/.config/zonal/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ZONAL_API__TIMEOUT_SECS` -> `api.timeout_secs`,
//! `ZONAL_DEMO__ENABLED` -> `demo.enabled`, etc. The `__` (double underscore)
//! separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use zonal_config::ZonalConfig;
//!
//! let config = ZonalConfig::load_with_dotenv().expect("config");
//! println!("zones endpoint: {}/zones/all", config.api.base_url);
//! ```

mod api;
mod demo;
mod error;
mod map;

pub use api::ApiConfig;
pub use demo::DemoConfig;
pub use error::ConfigError;
pub use map::MapConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use zonal_core::Coordinate;

/// Single variable that selects the zones endpoint base address.
pub const API_BASE_ENV: &str = "ZONAL_API_BASE";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ZonalConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

impl ZonalConfig {
    /// Load and validate configuration from all sources.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed and
    /// [`ConfigError::InvalidValue`] if the merged values fail validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// A missing `.env` is fine; variables may already be exported.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Dotenv`] if a `.env` file exists but cannot be
    /// parsed, otherwise the same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Err(error) if !error.not_found() => return Err(error.into()),
            _ => {}
        }
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".zonal/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Nested environment variables
        figment = figment.merge(Env::prefixed("ZONAL_").split("__"));

        // Layer 4: The endpoint selector (highest priority)
        figment.merge(
            Env::raw()
                .only(&[API_BASE_ENV])
                .map(|_| "api.base_url".into()),
        )
    }

    /// Reject values that would make every fetch or render fail.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.api.base_url.trim();
        if base.is_empty() {
            return Err(invalid("api.base_url", "must not be empty"));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(invalid("api.base_url", "must start with http:// or https://"));
        }
        if self.api.timeout_secs == 0 {
            return Err(invalid("api.timeout_secs", "must be greater than zero"));
        }
        Coordinate::try_new(self.map.fallback_lat, self.map.fallback_lon)
            .map_err(|error| invalid("map.fallback", &error.to_string()))?;
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("zonal").join("config.toml"))
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
