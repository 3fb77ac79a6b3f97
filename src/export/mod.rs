//! Export functionality for the lookup history.
//!
//! This module provides functions to export the history into CSV (the
//! tabular layout with a fixed header row) or JSONL.

mod csv;
mod jsonl;
mod row;
mod types;
mod writer;

use anyhow::Result;

pub use self::csv::{append_lookup_row, export_csv};
pub use jsonl::export_jsonl;
pub use types::{ExportFormat, ExportOptions};

use crate::history::HistoryStore;

/// Exports the (optionally filtered) history in the requested format.
///
/// Returns the number of records exported.
pub fn export_history(store: &HistoryStore, opts: &ExportOptions) -> Result<usize> {
    let entries = store.filter(&opts.filter);
    let output = opts.output.as_deref();
    match opts.format {
        ExportFormat::Csv => export_csv(entries, output),
        ExportFormat::Jsonl => export_jsonl(entries, output),
    }
}
