//! Demo data augmentation configuration.

use serde::{Deserialize, Serialize};

/// Number of synthetic zones appended in demo mode.
const fn default_count() -> u32 {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DemoConfig {
    /// Append synthetic opportunity zones to every fetched snapshot.
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_count")]
    pub count: u32,

    /// Fixed RNG seed; unseeded runs draw from the thread RNG.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            count: default_count(),
            seed: None,
        }
    }
}
