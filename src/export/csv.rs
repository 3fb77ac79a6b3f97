//! CSV export functionality.
//!
//! Two flavours share one layout: a full dump of the history, and a
//! single row appended after each lookup.

use anyhow::{Context, Result};
use csv::Writer;
use std::io::Write;
use std::path::Path;

use super::row::history_row;
use super::writer::open_output;
use crate::config::EXPORT_HEADER;
use crate::history::HistoryEntry;

/// Writes the header row plus one row per entry.
///
/// # Arguments
///
/// * `entries` - History entries, written in order
/// * `output` - Output file path (or stdout if None)
///
/// # Returns
///
/// Returns the number of records exported, or an error if export fails.
pub fn export_csv<'a, I>(entries: I, output: Option<&Path>) -> Result<usize>
where
    I: IntoIterator<Item = &'a HistoryEntry>,
{
    let sink = open_output(output)?;
    write_csv(entries, sink)
}

fn write_csv<'a, I, W>(entries: I, sink: W) -> Result<usize>
where
    I: IntoIterator<Item = &'a HistoryEntry>,
    W: Write,
{
    let mut writer = Writer::from_writer(sink);
    writer.write_record(EXPORT_HEADER)?;

    let mut record_count = 0;
    for entry in entries {
        writer.write_record(history_row(entry))?;
        record_count += 1;
    }
    writer.flush().context("Failed to flush CSV output")?;

    Ok(record_count)
}

/// Appends one entry to `path`, writing the header first if the file is new or empty.
pub fn append_lookup_row(path: &Path, entry: &HistoryEntry) -> Result<()> {
    let needs_header = std::fs::metadata(path)
        .map(|m| m.len() == 0)
        .unwrap_or(true);

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open export file: {}", path.display()))?;

    let mut writer = Writer::from_writer(file);
    if needs_header {
        writer.write_record(EXPORT_HEADER)?;
    }
    writer.write_record(history_row(entry))?;
    writer.flush().context("Failed to flush CSV output")?;

    Ok(())
}
