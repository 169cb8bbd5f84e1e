//! Summary statistics over one zone snapshot.
//!
//! All functions are total: an empty slice yields zero counts and the
//! fallback centre.

use zonal_core::{CategoryCounts, Coordinate, REGION_CENTER, Zone, ZoneSummary};

/// Count zones per recognized category.
///
/// Zones whose label is missing or not an exact category label land in no
/// bucket, so `counts.total()` can be less than `zones.len()`.
#[must_use]
pub fn count_by_category(zones: &[Zone]) -> CategoryCounts {
    let mut counts = CategoryCounts::default();
    for category in zones.iter().filter_map(Zone::category) {
        counts.increment(category);
    }
    counts
}

/// Arithmetic mean position of `zones`, or `fallback` when empty.
///
/// A missing (or non-finite) component contributes 0.0 to its sum while the
/// zone still counts toward the divisor.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compute_centroid(zones: &[Zone], fallback: Coordinate) -> Coordinate {
    if zones.is_empty() {
        return fallback;
    }

    let component = |value: Option<f64>| value.filter(|v| v.is_finite()).unwrap_or(0.0);
    let (lat_sum, lon_sum) = zones.iter().fold((0.0, 0.0), |(lat, lon), zone| {
        (lat + component(zone.latitude), lon + component(zone.longitude))
    });

    let n = zones.len() as f64;
    Coordinate::new(lat_sum / n, lon_sum / n)
}

/// [`compute_centroid`] with the region's default centre as fallback.
#[must_use]
pub fn centroid(zones: &[Zone]) -> Coordinate {
    compute_centroid(zones, REGION_CENTER)
}

/// Totals, category counts, and mean score for the summary panel.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn summarize(zones: &[Zone]) -> ZoneSummary {
    let scores: Vec<f64> = zones
        .iter()
        .filter_map(|zone| zone.adjusted_score)
        .filter(|score| score.is_finite())
        .collect();
    let mean_adjusted_score =
        (!scores.is_empty()).then(|| scores.iter().sum::<f64>() / scores.len() as f64);

    ZoneSummary {
        total_zones: saturating_u32(zones.len()),
        placeable_zones: saturating_u32(zones.iter().filter(|z| z.is_placeable()).count()),
        by_category: count_by_category(zones),
        mean_adjusted_score,
    }
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
