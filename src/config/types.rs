//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::constants::*;
use crate::error_handling::ConfigError;
use crate::export::{ExportFormat, ExportOptions};
use crate::lookup::{LookupOptions, MapStyle};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// Holds the locations of the persisted stores and the endpoints of the
/// external services. It can be constructed programmatically:
///
/// ```no_run
/// use phone_locator::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     history_path: PathBuf::from("/tmp/history.json"),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Geocode cache file (JSON object keyed by query string)
    pub cache_path: PathBuf,

    /// Lookup history file (JSON array)
    pub history_path: PathBuf,

    /// CSV file receiving one appended row per successful lookup
    pub lookup_export_path: PathBuf,

    /// CSV file written by a full history export
    pub history_export_path: PathBuf,

    /// HTML map written after a lookup
    pub map_path: PathBuf,

    /// HTML map with every history entry
    pub history_map_path: PathBuf,

    /// Forward geocoding endpoint
    pub geocoder_url: String,

    /// IP-location endpoint
    pub ip_api_url: String,

    /// Per-request timeout for the geocoder in seconds
    pub timeout_seconds: u64,

    /// Locale for country and region names
    pub locale: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_path: PathBuf::from(DEFAULT_CACHE_PATH),
            history_path: PathBuf::from(DEFAULT_HISTORY_PATH),
            lookup_export_path: PathBuf::from(DEFAULT_LOOKUP_EXPORT_PATH),
            history_export_path: PathBuf::from(DEFAULT_HISTORY_EXPORT_PATH),
            map_path: PathBuf::from(DEFAULT_MAP_PATH),
            history_map_path: PathBuf::from(DEFAULT_HISTORY_MAP_PATH),
            geocoder_url: OPENCAGE_GEOCODE_URL.to_string(),
            ip_api_url: IP_API_URL.to_string(),
            timeout_seconds: GEOCODER_TIMEOUT_SECS,
            locale: DEFAULT_LOCALE.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Geocoder request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Credentials for the external services.
///
/// Only the geocoder needs one; the IP-location service is keyless.
#[derive(Clone)]
pub struct Credentials {
    /// OpenCage API key
    pub geocoder_key: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("geocoder_key", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Reads the geocoder key from `OPENCAGE_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingCredential` if the variable is unset or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_value(std::env::var(OPENCAGE_API_KEY_ENV).ok())
    }

    /// Builds credentials from an optional raw key value.
    pub fn from_value(value: Option<String>) -> Result<Self, ConfigError> {
        match value.map(|v| v.trim().to_string()) {
            Some(key) if !key.is_empty() => Ok(Self { geocoder_key: key }),
            _ => Err(ConfigError::MissingCredential(OPENCAGE_API_KEY_ENV)),
        }
    }
}

/// Command-line interface.
#[derive(Debug, Parser)]
#[command(
    name = "phone_locator",
    version,
    about = "Look up where a phone number is registered and show it on a map"
)]
pub struct Cli {
    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,

    /// Geocode cache file
    #[arg(long, default_value = DEFAULT_CACHE_PATH, global = true)]
    pub cache_path: PathBuf,

    /// Lookup history file
    #[arg(long, default_value = DEFAULT_HISTORY_PATH, global = true)]
    pub history_path: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up a single phone number
    Lookup(LookupArgs),
    /// Show the lookup history
    History(HistoryArgs),
    /// Delete every history entry
    ClearHistory,
    /// Export the full history to CSV
    Export(ExportArgs),
    /// Write a map with a marker for every history entry
    HistoryMap(HistoryMapArgs),
    /// Read phone numbers from stdin, one per line
    Interactive(LookupOptionsArgs),
}

/// Presentation options shared by `lookup` and `interactive`.
#[derive(Debug, Clone, Args)]
pub struct LookupOptionsArgs {
    /// Map tile style
    #[arg(long, value_enum, default_value_t = MapStyle::Standard)]
    pub map_style: MapStyle,

    /// Also resolve the location of this machine's public IP
    #[arg(long)]
    pub include_ip: bool,

    /// Skip writing the HTML map
    #[arg(long)]
    pub no_map: bool,

    /// Skip appending the result to the per-lookup CSV
    #[arg(long)]
    pub no_export: bool,
}

/// Arguments for `lookup`.
#[derive(Debug, Clone, Args)]
pub struct LookupArgs {
    /// Phone number in international format, e.g. +14155552671
    pub number: String,

    #[command(flatten)]
    pub options: LookupOptionsArgs,
}

/// Arguments for `history`.
#[derive(Debug, Clone, Args)]
pub struct HistoryArgs {
    /// Only show entries whose number or country contains this text
    #[arg(long, default_value = "")]
    pub filter: String,
}

/// Arguments for `export`.
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Output file, or `-` for stdout [default: full_history.csv]
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Export format
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Only export entries whose number or country contains this text
    #[arg(long, default_value = "")]
    pub filter: String,
}

impl ExportArgs {
    /// Export options, writing to `default_output` unless `--output` was
    /// given. An output of `-` means stdout.
    pub fn options(&self, default_output: &Path) -> ExportOptions {
        let output = match &self.output {
            Some(path) if path.as_os_str() == "-" => None,
            Some(path) => Some(path.clone()),
            None => Some(default_output.to_path_buf()),
        };
        ExportOptions {
            output,
            format: self.format,
            filter: self.filter.clone(),
        }
    }
}

impl LookupOptionsArgs {
    /// Pipeline options for these flags.
    pub fn lookup_options(&self) -> LookupOptions {
        LookupOptions {
            map_style: self.map_style,
            include_ip: self.include_ip,
        }
    }
}

/// Arguments for `history-map`.
#[derive(Debug, Clone, Args)]
pub struct HistoryMapArgs {
    /// Output HTML file [default: history_map.html]
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Library configuration derived from the global options.
    pub fn config(&self) -> Config {
        Config {
            cache_path: self.cache_path.clone(),
            history_path: self.history_path.clone(),
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
            ..Default::default()
        }
    }
}
