//! Zones API endpoint configuration.

use serde::{Deserialize, Serialize};

/// Local development backend.
fn default_base_url() -> String {
    String::from("http://localhost:5000")
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base address; zones are read from `{base_url}/zones/all`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Whether the base URL points somewhere other than the local default.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        self.base_url.trim_end_matches('/') != default_base_url()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.timeout_secs, 10);
        assert!(!config.is_remote());
    }

    #[test]
    fn trailing_slash_is_still_local() {
        let config = ApiConfig {
            base_url: "http://localhost:5000/".into(),
            ..ApiConfig::default()
        };
        assert!(!config.is_remote());
    }

    #[test]
    fn other_hosts_are_remote() {
        let config = ApiConfig {
            base_url: "https://zones.example.org/api".into(),
            ..ApiConfig::default()
        };
        assert!(config.is_remote());
    }
}
