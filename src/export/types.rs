//! Export types and options.

use std::path::PathBuf;

use clap::ValueEnum;

/// Export format options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV with the fixed header row, one row per history entry
    Csv,
    /// JSONL (one JSON object per history entry)
    Jsonl,
}

/// Options for exporting history.
#[derive(Clone, Debug)]
pub struct ExportOptions {
    /// Output file path (or stdout if None)
    pub output: Option<PathBuf>,
    /// Export format
    pub format: ExportFormat,
    /// Only export entries whose number or country contains this text (empty = all)
    pub filter: String,
}
