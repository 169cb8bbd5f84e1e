//! Schema-checked decoding of the `/zones/all` payload.
//!
//! The endpoint answers `{"status": "success", "zones": [...], "count": n}`.
//! Only the `zones` array matters. Anything else is a [`DecodeError`], which
//! the fetch path turns into an empty list.

use serde_json::Value;
use zonal_core::Zone;

use crate::error::DecodeError;

/// Field of the response object that carries the zone records.
pub const ZONES_FIELD: &str = "zones";

/// Decode a zones payload, preserving server order.
///
/// Array elements that are not JSON objects are skipped. Object elements
/// always decode, with mistyped fields reading as absent.
///
/// # Errors
///
/// Returns [`DecodeError`] if the body is not JSON, not an object, or has no
/// `zones` array.
pub fn decode_zones(body: &[u8]) -> Result<Vec<Zone>, DecodeError> {
    let Value::Object(mut root) = serde_json::from_slice::<Value>(body)? else {
        return Err(DecodeError::NotAnObject);
    };
    let Some(Value::Array(items)) = root.remove(ZONES_FIELD) else {
        return Err(DecodeError::MissingZones);
    };

    Ok(items
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|item| serde_json::from_value::<Zone>(item).ok())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"{
        "status": "success",
        "count": 3,
        "zones": [
            {
                "zone_lat": 12.97,
                "zone_lon": 77.59,
                "business_count": 41,
                "transport_count": 6,
                "population": 15300,
                "zone_type": "Commercial Zone",
                "adjusted_zone_score": 8.4
            },
            {
                "zone_lat": 12.91,
                "zone_lon": 77.62,
                "business_count": 2,
                "transport_count": 0,
                "population": 600,
                "zone_type": "Opportunity Zone"
            },
            {
                "zone_lat": null,
                "zone_lon": 77.6,
                "zone_type": "Balanced Zone"
            }
        ]
    }"#;

    #[test]
    fn decodes_zones_in_server_order() {
        let zones = decode_zones(FIXTURE.as_bytes()).unwrap();
        assert_eq!(zones.len(), 3);
        assert_eq!(zones[0].category_label.as_deref(), Some("Commercial Zone"));
        assert_eq!(zones[0].population, Some(15300));
        assert_eq!(zones[1].adjusted_score, None);
        assert_eq!(zones[2].latitude, None);
        assert_eq!(zones[2].longitude, Some(77.6));
    }

    #[test]
    fn empty_zones_array_is_ok() {
        let zones = decode_zones(br#"{"status":"success","zones":[],"count":0}"#).unwrap();
        assert!(zones.is_empty());
    }

    #[test]
    fn non_object_elements_are_skipped() {
        let zones = decode_zones(br#"{"zones":[1, "x", null, {"zone_lat": 1.0}, []]}"#).unwrap();
        assert_eq!(
            zones,
            vec![Zone {
                latitude: Some(1.0),
                ..Zone::default()
            }]
        );
    }

    #[test]
    fn missing_zones_field_is_an_error() {
        let err = decode_zones(br#"{"status":"error","message":"boom"}"#).unwrap_err();
        assert!(matches!(err, DecodeError::MissingZones));
    }

    #[test]
    fn zones_field_of_wrong_type_is_an_error() {
        let err = decode_zones(br#"{"zones": {"a": 1}}"#).unwrap_err();
        assert!(matches!(err, DecodeError::MissingZones));
        let err = decode_zones(br#"{"zones": null}"#).unwrap_err();
        assert!(matches!(err, DecodeError::MissingZones));
    }

    #[test]
    fn top_level_array_is_not_an_object() {
        let err = decode_zones(br#"[{"zone_lat": 1.0}]"#).unwrap_err();
        assert!(matches!(err, DecodeError::NotAnObject));
    }

    #[test]
    fn garbage_is_a_json_error() {
        let err = decode_zones(b"<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
    }
}
