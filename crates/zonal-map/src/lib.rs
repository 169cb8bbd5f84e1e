//! # zonal-map
//!
//! Turns a zone snapshot into what the map surface draws.
//!
//! - [`aggregate`]: category counts, centroid, summary
//! - [`overlay`]: one circular overlay per placeable zone
//! - [`demo`]: opt-in synthetic zones
//! - [`view`]: assembles the [`MapView`](zonal_core::MapView) for one fetch outcome
//! - [`boundary`]: panic isolation around a render step
//! - [`controller`]: per-view activation with a stale-response guard

pub mod aggregate;
pub mod boundary;
pub mod controller;
pub mod demo;
pub mod overlay;
pub mod view;

pub use aggregate::{centroid, compute_centroid, count_by_category, summarize};
pub use boundary::render_guarded;
pub use controller::{ZoneSource, ZoneView};
pub use demo::DemoAugmentation;
pub use overlay::{
    OVERLAY_FILL_OPACITY, OVERLAY_RADIUS_M, format_thousands, overlay_color, overlays,
    popup_text, to_overlay,
};
pub use view::{NO_DATA_MESSAGE, ViewOptions, build_view};
