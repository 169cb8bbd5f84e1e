//! Payload types handed across the rendering boundary.
//!
//! A map surface receives exactly one [`MapView`] per render: the initial
//! centre, the summary panel numbers, and the overlay descriptors. Nothing
//! flows back from the surface.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{OverlayColor, ViewStatus, ZoneCategory};
use crate::geo::Coordinate;

/// Zone counts per recognized category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryCounts {
    pub commercial: u32,
    pub balanced: u32,
    pub opportunity: u32,
}

impl CategoryCounts {
    #[must_use]
    pub const fn get(&self, category: ZoneCategory) -> u32 {
        match category {
            ZoneCategory::Commercial => self.commercial,
            ZoneCategory::Balanced => self.balanced,
            ZoneCategory::Opportunity => self.opportunity,
        }
    }

    /// Add one zone to `category`, saturating at `u32::MAX`.
    pub fn increment(&mut self, category: ZoneCategory) {
        let bucket = match category {
            ZoneCategory::Commercial => &mut self.commercial,
            ZoneCategory::Balanced => &mut self.balanced,
            ZoneCategory::Opportunity => &mut self.opportunity,
        };
        *bucket = bucket.saturating_add(1);
    }

    /// Sum over all three buckets, saturating at `u32::MAX`.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.commercial
            .saturating_add(self.balanced)
            .saturating_add(self.opportunity)
    }
}

/// Summary numbers for one zone snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ZoneSummary {
    /// Every zone in the snapshot, placeable or not.
    pub total_zones: u32,
    /// Zones with a usable position.
    pub placeable_zones: u32,
    pub by_category: CategoryCounts,
    /// Mean `adjusted_zone_score` over zones that carry one.
    pub mean_adjusted_score: Option<f64>,
}

/// A circular map annotation derived from one placeable zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Overlay {
    pub center: Coordinate,
    /// Circle radius in metres.
    pub radius_m: f64,
    pub stroke_color: OverlayColor,
    pub fill_color: OverlayColor,
    pub fill_opacity: f64,
    /// Multi-line popup body.
    pub popup: String,
}

/// Everything a map surface needs to render the opportunity-zone view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MapView {
    pub status: ViewStatus,
    /// User-visible indicator text for degraded statuses.
    pub message: Option<String>,
    /// Initial map focus.
    pub center: Coordinate,
    pub summary: ZoneSummary,
    pub overlays: Vec<Overlay>,
}

/// Indicator text shown when a render step failed.
pub const FAULTED_MESSAGE: &str = "Something went wrong while rendering zones.";

impl MapView {
    /// A view with no zones: zero counts, no overlays, centred on `center`.
    #[must_use]
    pub fn empty(status: ViewStatus, center: Coordinate, message: Option<String>) -> Self {
        Self {
            status,
            message,
            center,
            summary: ZoneSummary::default(),
            overlays: Vec::new(),
        }
    }

    /// The static fallback substituted when rendering fails.
    #[must_use]
    pub fn faulted(center: Coordinate) -> Self {
        Self::empty(ViewStatus::Faulted, center, Some(FAULTED_MESSAGE.to_string()))
    }
}
