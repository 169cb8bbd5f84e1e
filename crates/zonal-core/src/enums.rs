//! Zone categories, overlay colours, and view statuses.
//!
//! All enums serialize in lowercase / `snake_case`. Zone categories also carry
//! the human-readable label the zones endpoint emits in `zone_type`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ZoneCategory
// ---------------------------------------------------------------------------

/// Coarse classification assigned to a zone by the backend.
///
/// The endpoint classifies zones by percentile of their weighted score:
///
/// ```text
/// score >= p85 → Commercial Zone
/// score >= p55 → Balanced Zone
/// otherwise    → Opportunity Zone
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ZoneCategory {
    Commercial,
    Balanced,
    Opportunity,
}

impl ZoneCategory {
    /// Every category, in display order.
    pub const ALL: [Self; 3] = [Self::Commercial, Self::Balanced, Self::Opportunity];

    /// Parse the `zone_type` label. Only exact labels are recognized.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Commercial Zone" => Some(Self::Commercial),
            "Balanced Zone" => Some(Self::Balanced),
            "Opportunity Zone" => Some(Self::Opportunity),
            _ => None,
        }
    }

    /// The `zone_type` label emitted by the zones endpoint.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Commercial => "Commercial Zone",
            Self::Balanced => "Balanced Zone",
            Self::Opportunity => "Opportunity Zone",
        }
    }
}

impl fmt::Display for ZoneCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// OverlayColor
// ---------------------------------------------------------------------------

/// Stroke/fill colour of a zone overlay, as a CSS colour name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OverlayColor {
    Red,
    Green,
    Blue,
}

impl OverlayColor {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }
}

impl fmt::Display for OverlayColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ViewStatus
// ---------------------------------------------------------------------------

/// What the map surface should show alongside the overlays.
///
/// ```text
/// fetch ok, zones present → ready
/// fetch ok, no zones      → no_data
/// fetch failed            → load_failed
/// render step panicked    → faulted
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ViewStatus {
    Ready,
    NoData,
    LoadFailed,
    Faulted,
}

impl ViewStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::NoData => "no_data",
            Self::LoadFailed => "load_failed",
            Self::Faulted => "faulted",
        }
    }

    /// Whether the surface should show an indicator instead of a plain map.
    #[must_use]
    pub const fn is_degraded(self) -> bool {
        !matches!(self, Self::Ready)
    }
}

impl fmt::Display for ViewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
