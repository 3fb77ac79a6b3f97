//! User-facing text for lookup results and history.

use std::path::Path;

use crate::config::{NOT_APPLICABLE, NOT_AVAILABLE, UNKNOWN};
use crate::history::HistoryEntry;
use crate::lookup::LookupResult;

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

/// Shown when the metadata source knows nothing beyond the country, so
/// "Unknown" provider or time zone is not mistaken for a failed lookup.
pub const LIMITED_METADATA_NOTE: &str =
    "Note: carrier, region and time zone data are not available for this number; location is country level.";

/// Multi-line summary of one lookup.
pub fn format_result(result: &LookupResult, map_file: Option<&Path>) -> String {
    let record = &result.record;
    let time_zones = if record.time_zones().is_empty() {
        UNKNOWN.to_string()
    } else {
        record
            .time_zones()
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };
    let confidence = result
        .geo
        .confidence
        .map(|c| c.to_string())
        .unwrap_or_else(|| NOT_APPLICABLE.to_string());

    let mut out = format!(
        "Phone Number: {}\n\
         Type: {}\n\
         Country: {}\n\
         Location: {}\n\
         Provider: {}\n\
         Time Zone: {}\n\
         Coordinates: ({}, {}){}\n\
         Confidence: {}\n\
         IP Location: {}\n\
         Map URL: {}",
        record.raw_number(),
        record.line_type(),
        or_placeholder(record.country_name(), UNKNOWN),
        or_placeholder(record.region_description(), NOT_AVAILABLE),
        or_placeholder(record.carrier_name(), UNKNOWN),
        time_zones,
        result.geo.latitude,
        result.geo.longitude,
        if result.cache_hit { " [cached]" } else { "" },
        confidence,
        result.ip_location,
        result.google_maps_url()
    );
    if has_limited_metadata(result) {
        out.push('\n');
        out.push_str(LIMITED_METADATA_NOTE);
    }
    if let Some(path) = map_file {
        out.push_str(&format!("\nMap saved as: {}", path.display()));
    }
    out
}

fn has_limited_metadata(result: &LookupResult) -> bool {
    let record = &result.record;
    record.carrier_name().is_empty()
        && record.region_description().is_empty()
        && record.time_zones().is_empty()
}

/// Multi-line summary of one history entry.
pub fn format_history_entry(entry: &HistoryEntry) -> String {
    format!(
        "Number: {} ({}), Time: {}\n\
         Country: {}, Location: {}\n\
         Provider: {}, Time Zone: {}\n\
         Coordinates: ({}, {})\n\
         IP Location: {}",
        entry.number,
        entry.number_type,
        entry.timestamp.to_rfc3339(),
        entry.country,
        entry.detailed_location,
        entry.service_provider,
        entry.time_zone_display(),
        entry.latitude,
        entry.longitude,
        entry.ip_location
    )
}
