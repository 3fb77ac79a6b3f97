//! History entry data structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{NOT_APPLICABLE, NOT_AVAILABLE, UNKNOWN};
use crate::geocode::GeoResult;
use crate::ip_location::IpLocation;
use crate::phone::{LineType, PhoneRecord};

/// One recorded lookup.
///
/// Every field is populated: unknown sub-values are replaced with
/// placeholders when the entry is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub number: String,
    pub country: String,
    pub detailed_location: String,
    pub service_provider: String,
    pub time_zones: Vec<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub number_type: LineType,
    pub ip_location: IpLocation,
    pub confidence: Option<u32>,
    pub timestamp: DateTime<Utc>,
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

impl HistoryEntry {
    pub fn new(
        record: &PhoneRecord,
        geo: &GeoResult,
        ip_location: IpLocation,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            number: record.raw_number().to_string(),
            country: or_placeholder(record.country_name(), UNKNOWN),
            detailed_location: or_placeholder(record.region_description(), NOT_AVAILABLE),
            service_provider: or_placeholder(record.carrier_name(), UNKNOWN),
            time_zones: record.time_zones().iter().cloned().collect(),
            latitude: geo.latitude,
            longitude: geo.longitude,
            number_type: record.line_type(),
            ip_location,
            confidence: geo.confidence,
            timestamp,
        }
    }

    /// Time zones joined for display, `"Unknown"` when there are none.
    pub fn time_zone_display(&self) -> String {
        if self.time_zones.is_empty() {
            UNKNOWN.to_string()
        } else {
            self.time_zones.join(", ")
        }
    }

    pub fn confidence_display(&self) -> String {
        self.confidence
            .map(|c| c.to_string())
            .unwrap_or_else(|| NOT_APPLICABLE.to_string())
    }

    /// Case-insensitive substring match on the number or country.
    pub fn matches(&self, needle_lowercase: &str) -> bool {
        self.number.to_lowercase().contains(needle_lowercase)
            || self.country.to_lowercase().contains(needle_lowercase)
    }
}
