use serde::Serialize;
use zonal_core::{MapView, ViewStatus};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `zonal summary`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let view = super::activate(ctx).await?;
    output(&SummaryReport::from(view.as_ref()), flags.format)
}

/// Flat summary so table output stays one key per row.
#[derive(Debug, Serialize)]
struct SummaryReport {
    status: ViewStatus,
    degraded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    center_lat: f64,
    center_lon: f64,
    total_zones: u32,
    placeable_zones: u32,
    commercial: u32,
    balanced: u32,
    opportunity: u32,
    unclassified: u32,
    mean_adjusted_score: Option<f64>,
}

impl From<&MapView> for SummaryReport {
    fn from(view: &MapView) -> Self {
        let summary = &view.summary;
        let counts = summary.by_category;
        Self {
            status: view.status,
            degraded: view.status.is_degraded(),
            message: view.message.clone(),
            center_lat: view.center.lat,
            center_lon: view.center.lon,
            total_zones: summary.total_zones,
            placeable_zones: summary.placeable_zones,
            commercial: counts.commercial,
            balanced: counts.balanced,
            opportunity: counts.opportunity,
            unclassified: summary.total_zones.saturating_sub(counts.total()),
            mean_adjusted_score: summary.mean_adjusted_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use zonal_core::Zone;
    use zonal_map::{ViewOptions, build_view};

    use super::*;

    fn labelled(label: Option<&str>, score: Option<f64>) -> Zone {
        Zone {
            latitude: Some(10.0),
            longitude: Some(20.0),
            category_label: label.map(str::to_string),
            adjusted_score: score,
            ..Zone::default()
        }
    }

    #[test]
    fn report_exposes_unclassified_gap() {
        let zones = vec![
            labelled(Some("Commercial Zone"), Some(4.0)),
            labelled(Some("Opportunity Zone"), Some(8.0)),
            labelled(Some("Mixed Zone"), None),
            labelled(None, None),
        ];
        let view = build_view(Ok(zones), &ViewOptions::default());
        let report = SummaryReport::from(&view);

        assert_eq!(report.status, ViewStatus::Ready);
        assert!(!report.degraded);
        assert_eq!(report.total_zones, 4);
        assert_eq!(report.commercial, 1);
        assert_eq!(report.opportunity, 1);
        assert_eq!(report.balanced, 0);
        assert_eq!(report.unclassified, 2);
        assert_eq!(report.mean_adjusted_score, Some(6.0));
    }

    #[test]
    fn empty_snapshot_is_degraded_with_zero_counts() {
        let view = build_view(Ok(Vec::new()), &ViewOptions::default());
        let report = SummaryReport::from(&view);

        assert_eq!(report.status, ViewStatus::NoData);
        assert!(report.degraded);
        assert_eq!(report.total_zones, 0);
        assert_eq!(report.unclassified, 0);
        assert_eq!(report.mean_adjusted_score, None);
    }
}
