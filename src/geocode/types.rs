//! Geocoding data structures.

use serde::{Deserialize, Deserializer, Serialize};

use crate::phone::PhoneRecord;

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Bounding rectangle of a geocoded area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub northeast: LatLng,
    pub southwest: LatLng,
}

/// A resolved location, as stored in the cache.
///
/// `confidence` is the provider's score, passed through uninterpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoResult {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
    #[serde(default, deserialize_with = "lenient_confidence")]
    pub confidence: Option<u32>,
    #[serde(default)]
    pub bounds: Option<Bounds>,
}

impl GeoResult {
    pub fn center(&self) -> LatLng {
        LatLng {
            lat: self.latitude,
            lng: self.longitude,
        }
    }
}

/// Accepts a number, `null`, or any placeholder such as `"N/A"` (read as unknown).
pub(crate) fn lenient_confidence<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| v.as_u64())
        .and_then(|n| u32::try_from(n).ok()))
}

/// Derives the geocoding query for a phone record.
///
/// `"<region>, <country>"` when both are known, otherwise whichever one is,
/// otherwise the empty string.
pub fn query_key(record: &PhoneRecord) -> String {
    build_query(record.region_description(), record.country_name())
}

fn build_query(region: &str, country: &str) -> String {
    match (region.is_empty(), country.is_empty()) {
        (false, false) => format!("{}, {}", region, country),
        (false, true) => region.to_string(),
        (true, false) => country.to_string(),
        (true, true) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_query_both_parts() {
        assert_eq!(
            build_query("San Francisco, CA", "United States"),
            "San Francisco, CA, United States"
        );
    }

    #[test]
    fn test_build_query_single_part() {
        assert_eq!(build_query("", "France"), "France");
        assert_eq!(build_query("Lyon", ""), "Lyon");
        assert_eq!(build_query("", ""), "");
    }

    #[test]
    fn test_build_query_is_deterministic() {
        assert_eq!(build_query("Lyon", "France"), build_query("Lyon", "France"));
    }

    #[test]
    fn test_geo_result_json_shape() {
        let result = GeoResult {
            latitude: 37.77,
            longitude: -122.42,
            confidence: Some(7),
            bounds: None,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["lat"], 37.77);
        assert_eq!(json["lng"], -122.42);
        assert_eq!(json["confidence"], 7);
        assert!(json["bounds"].is_null());
    }

    #[test]
    fn test_placeholder_confidence_reads_as_unknown() {
        let result: GeoResult =
            serde_json::from_str(r#"{"lat": 1.0, "lng": 2.0, "confidence": "N/A"}"#).unwrap();
        assert_eq!(result.confidence, None);
        assert_eq!(result.bounds, None);
    }

    #[test]
    fn test_bounds_deserialize() {
        let result: GeoResult = serde_json::from_str(
            r#"{"lat": 48.85, "lng": 2.35, "confidence": 5,
                "bounds": {"northeast": {"lat": 48.9, "lng": 2.4},
                           "southwest": {"lat": 48.8, "lng": 2.3}}}"#,
        )
        .unwrap();
        let bounds = result.bounds.unwrap();
        assert_eq!(bounds.northeast.lat, 48.9);
        assert_eq!(bounds.southwest.lng, 2.3);
    }
}
