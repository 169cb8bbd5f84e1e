//! # zonal-core
//!
//! Core types for Zonal.
//!
//! This crate provides the foundational types shared across all Zonal crates:
//! - The [`Zone`](zone::Zone) record as decoded from the zones endpoint
//! - Category, colour, and view-status enums
//! - Geographic coordinates
//! - The rendering-boundary payload handed to a map surface
//!   ([`MapView`](responses::MapView), overlays, summaries)
//! - Cross-cutting error types

pub mod enums;
pub mod errors;
pub mod geo;
pub mod responses;
pub mod zone;

pub use enums::{OverlayColor, ViewStatus, ZoneCategory};
pub use errors::CoreError;
pub use geo::{Coordinate, REGION_CENTER};
pub use responses::{CategoryCounts, FAULTED_MESSAGE, MapView, Overlay, ZoneSummary};
pub use zone::Zone;
