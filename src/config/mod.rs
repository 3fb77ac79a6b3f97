//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (file locations, endpoints, timeouts)
//! - Library configuration and credential loading
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{
    Cli, Command, Config, Credentials, ExportArgs, HistoryArgs, HistoryMapArgs, LogFormat,
    LogLevel, LookupArgs, LookupOptionsArgs,
};
