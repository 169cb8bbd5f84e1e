//! The zone record as served by `GET /zones/all`.
//!
//! Every field is optional on the wire. Numeric fields decode leniently: a
//! value of the wrong JSON type becomes `None` instead of failing the whole
//! record, so one bad field never costs the rest of the batch.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::enums::ZoneCategory;
use crate::geo::Coordinate;

/// A geographically located zone with activity counts and a category label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    #[serde(
        rename = "zone_lat",
        default,
        deserialize_with = "lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub latitude: Option<f64>,

    #[serde(
        rename = "zone_lon",
        default,
        deserialize_with = "lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub longitude: Option<f64>,

    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub business_count: Option<u64>,

    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub transport_count: Option<u64>,

    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub population: Option<u64>,

    /// Raw `zone_type` label. Kept verbatim so unrecognized labels can still
    /// be displayed.
    #[serde(
        rename = "zone_type",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub category_label: Option<String>,

    #[serde(
        rename = "adjusted_zone_score",
        default,
        deserialize_with = "lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub adjusted_score: Option<f64>,
}

impl Zone {
    /// Recognized category, if the label matches one exactly.
    #[must_use]
    pub fn category(&self) -> Option<ZoneCategory> {
        self.category_label
            .as_deref()
            .and_then(ZoneCategory::from_label)
    }

    /// Map position, present only when both components are finite numbers.
    #[must_use]
    pub fn position(&self) -> Option<Coordinate> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => {
                Some(Coordinate::new(lat, lon))
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn is_placeable(&self) -> bool {
        self.position().is_some()
    }

    #[must_use]
    pub fn business_count(&self) -> u64 {
        self.business_count.unwrap_or(0)
    }

    #[must_use]
    pub fn transport_count(&self) -> u64 {
        self.transport_count.unwrap_or(0)
    }

    #[must_use]
    pub fn adjusted_score(&self) -> f64 {
        self.adjusted_score.filter(|s| s.is_finite()).unwrap_or(0.0)
    }
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_f64)
        .filter(|v| v.is_finite()))
}

/// Non-negative integral count. Floats are truncated, negatives dropped.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Number(number)) = value else {
        return Ok(None);
    };
    Ok(number.as_u64().or_else(|| {
        number
            .as_f64()
            .filter(|v| v.is_finite() && *v >= 0.0)
            .map(|v| v.trunc() as u64)
    }))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}
