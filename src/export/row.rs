//! Shared export row building logic.

use crate::history::HistoryEntry;

/// Flattens a history entry into the columns of
/// [`EXPORT_HEADER`](crate::config::EXPORT_HEADER).
pub(crate) fn history_row(entry: &HistoryEntry) -> [String; 11] {
    [
        entry.number.clone(),
        entry.country.clone(),
        entry.detailed_location.clone(),
        entry.service_provider.clone(),
        entry.time_zone_display(),
        entry.latitude.to_string(),
        entry.longitude.to_string(),
        entry.number_type.to_string(),
        entry.ip_location.to_string(),
        entry.confidence_display(),
        entry.timestamp.to_rfc3339(),
    ]
}
