//! Session statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, InfoType, ProcessingStats};

/// Logs a summary of the session: totals, failures by category and
/// cache/IP events.
pub fn print_error_statistics(stats: &ProcessingStats) {
    if stats.total() == 0 {
        return;
    }

    info!(
        "Lookups: {} total, {} succeeded, {} failed",
        stats.total(),
        stats.succeeded(),
        stats.total_errors()
    );

    if stats.total_errors() > 0 {
        info!("Error Counts ({} total):", stats.total_errors());
        for error_type in ErrorType::iter() {
            let count = stats.get_error_count(error_type);
            if count > 0 {
                info!("   {}: {}", error_type.as_str(), count);
            }
        }
    }

    if stats.total_info() > 0 {
        info!("Info Counts ({} total):", stats.total_info());
        for info_type in InfoType::iter() {
            let count = stats.get_info_count(info_type);
            if count > 0 {
                info!("   {}: {}", info_type, count);
            }
        }
    }
}
