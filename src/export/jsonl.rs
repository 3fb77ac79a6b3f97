//! JSONL export functionality.
//!
//! Each line is one history entry serialized as a JSON object, suitable for
//! piping to `jq` or loading elsewhere.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use super::writer::open_output;
use crate::history::HistoryEntry;

/// Writes one JSON object per entry.
///
/// Returns the number of records exported.
pub fn export_jsonl<'a, I>(entries: I, output: Option<&Path>) -> Result<usize>
where
    I: IntoIterator<Item = &'a HistoryEntry>,
{
    let mut writer = open_output(output)?;

    let mut record_count = 0;
    for entry in entries {
        serde_json::to_writer(&mut writer, entry).context("Failed to serialize entry")?;
        writer.write_all(b"\n")?;
        record_count += 1;
    }
    writer.flush().context("Failed to flush JSONL output")?;

    Ok(record_count)
}
