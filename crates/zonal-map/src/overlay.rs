//! Zone → circular map overlay mapping.

use zonal_core::{Overlay, OverlayColor, Zone, ZoneCategory};

/// Radius of every zone circle, in metres.
pub const OVERLAY_RADIUS_M: f64 = 6500.0;

pub const OVERLAY_FILL_OPACITY: f64 = 0.5;

/// Popup heading for zones without a `zone_type`.
const UNCLASSIFIED_LABEL: &str = "Unclassified zone";

/// Overlays for every placeable zone, in input order.
///
/// The iterator is lazy and holds no state beyond its position; clone it or
/// call again to make another pass.
pub fn overlays(zones: &[Zone]) -> impl Iterator<Item = Overlay> + Clone + '_ {
    zones.iter().filter_map(to_overlay)
}

/// Overlay for a single zone, or `None` when it has no usable position.
#[must_use]
pub fn to_overlay(zone: &Zone) -> Option<Overlay> {
    let center = zone.position()?;
    let color = overlay_color(zone.category());
    Some(Overlay {
        center,
        radius_m: OVERLAY_RADIUS_M,
        stroke_color: color,
        fill_color: color,
        fill_opacity: OVERLAY_FILL_OPACITY,
        popup: popup_text(zone),
    })
}

/// Commercial is red, balanced is green, anything else is blue.
#[must_use]
pub const fn overlay_color(category: Option<ZoneCategory>) -> OverlayColor {
    match category {
        Some(ZoneCategory::Commercial) => OverlayColor::Red,
        Some(ZoneCategory::Balanced) => OverlayColor::Green,
        Some(ZoneCategory::Opportunity) | None => OverlayColor::Blue,
    }
}

#[must_use]
pub fn popup_text(zone: &Zone) -> String {
    let label = zone.category_label.as_deref().unwrap_or(UNCLASSIFIED_LABEL);
    let population = zone
        .population
        .map_or_else(|| String::from("—"), format_thousands);

    format!(
        "{label}\nScore: {score:.2}\nPopulation: {population}\nBusinesses: {businesses}\nTransport nodes: {transport}",
        score = zone.adjusted_score(),
        businesses = zone.business_count(),
        transport = zone.transport_count(),
    )
}

/// `1234567` → `"1,234,567"`.
#[must_use]
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
