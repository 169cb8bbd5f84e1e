//! Assembles the [`MapView`] handed to the map surface from one fetch outcome.

use zonal_client::FetchError;
use zonal_core::{Coordinate, MapView, REGION_CENTER, ViewStatus, Zone};

use crate::aggregate::{compute_centroid, summarize};
use crate::demo::DemoAugmentation;
use crate::overlay::overlays;

/// Message shown when the snapshot holds no zones.
pub const NO_DATA_MESSAGE: &str = "No zone data available";

/// Knobs for turning a fetch outcome into a view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewOptions {
    /// Centre used when there is nothing to average.
    pub fallback_center: Coordinate,
    /// Synthetic zones appended to successful fetches.
    pub demo: Option<DemoAugmentation>,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            fallback_center: REGION_CENTER,
            demo: None,
        }
    }
}

/// Build the view for one snapshot.
///
/// A fetch failure never propagates: it becomes a `LoadFailed` view with
/// zero counts and no overlays. Demo augmentation applies to successful
/// fetches only.
#[must_use]
pub fn build_view(outcome: Result<Vec<Zone>, FetchError>, options: &ViewOptions) -> MapView {
    let zones = match outcome {
        Ok(zones) => zones,
        Err(error) => {
            tracing::warn!(%error, "zone fetch failed");
            return MapView::empty(
                ViewStatus::LoadFailed,
                options.fallback_center,
                Some(format!("Failed to load zones ({error})")),
            );
        }
    };

    let zones = match options.demo {
        Some(demo) => demo.augment(zones),
        None => zones,
    };

    if zones.is_empty() {
        return MapView::empty(
            ViewStatus::NoData,
            options.fallback_center,
            Some(NO_DATA_MESSAGE.to_string()),
        );
    }

    MapView {
        status: ViewStatus::Ready,
        message: None,
        center: compute_centroid(&zones, options.fallback_center),
        summary: summarize(&zones),
        overlays: overlays(&zones).collect(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use zonal_core::{CategoryCounts, ZoneSummary};

    use super::*;

    fn zone(lat: f64, lon: f64, label: &str) -> Zone {
        Zone {
            latitude: Some(lat),
            longitude: Some(lon),
            category_label: Some(label.to_string()),
            ..Zone::default()
        }
    }

    #[test]
    fn ready_view_centres_on_the_mean() {
        let zones = vec![
            zone(10.0, 20.0, "Commercial Zone"),
            zone(20.0, 40.0, "Balanced Zone"),
        ];
        let view = build_view(Ok(zones), &ViewOptions::default());

        assert_eq!(view.status, ViewStatus::Ready);
        assert_eq!(view.message, None);
        assert_eq!(view.center, Coordinate::new(15.0, 30.0));
        assert_eq!(view.overlays.len(), 2);
        assert_eq!(
            view.summary.by_category,
            CategoryCounts {
                commercial: 1,
                balanced: 1,
                opportunity: 0
            }
        );
    }

    #[test]
    fn empty_fetch_is_no_data_at_fallback() {
        let options = ViewOptions {
            fallback_center: Coordinate::new(1.0, 2.0),
            demo: None,
        };
        let view = build_view(Ok(Vec::new()), &options);

        assert_eq!(view.status, ViewStatus::NoData);
        assert_eq!(view.message.as_deref(), Some(NO_DATA_MESSAGE));
        assert_eq!(view.center, Coordinate::new(1.0, 2.0));
        assert_eq!(view.summary, ZoneSummary::default());
        assert!(view.overlays.is_empty());
    }

    #[test]
    fn failed_fetch_is_load_failed() {
        let error = FetchError::Status {
            status: 503,
            message: "maintenance".into(),
        };
        let view = build_view(Err(error), &ViewOptions::default());

        assert_eq!(view.status, ViewStatus::LoadFailed);
        assert!(view.message.unwrap().starts_with("Failed to load zones"));
        assert_eq!(view.center, REGION_CENTER);
        assert_eq!(view.summary, ZoneSummary::default());
        assert!(view.overlays.is_empty());
    }

    #[test]
    fn demo_fills_an_empty_fetch() {
        let options = ViewOptions {
            demo: Some(DemoAugmentation::new(5, Some(3))),
            ..ViewOptions::default()
        };
        let view = build_view(Ok(Vec::new()), &options);

        assert_eq!(view.status, ViewStatus::Ready);
        assert_eq!(view.overlays.len(), 5);
        assert_eq!(view.summary.by_category.opportunity, 5);
    }

    #[test]
    fn demo_does_not_mask_a_failure() {
        let options = ViewOptions {
            demo: Some(DemoAugmentation::new(5, Some(3))),
            ..ViewOptions::default()
        };
        let error = FetchError::Status {
            status: 429,
            message: String::new(),
        };
        let view = build_view(Err(error), &options);

        assert_eq!(view.status, ViewStatus::LoadFailed);
        assert!(view.overlays.is_empty());
    }
}
