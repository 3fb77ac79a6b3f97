//! Error type definitions.
//!
//! This module defines all error types used throughout the application, plus
//! the flat `ErrorType` categories used for session statistics.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Startup configuration errors. These halt the process before any lookup.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required credential was not supplied by the environment.
    #[error("{0} not found in environment or .env file")]
    MissingCredential(&'static str),
}

/// Errors raised while validating a raw phone number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The number does not start with `+`.
    #[error("Phone number must include country code (e.g., +1 for USA).")]
    InvalidFormat,

    /// The number could not be parsed. Carries the parser's message.
    #[error("{0}")]
    ParseError(String),

    /// The number parsed but is not a valid assignable number.
    #[error("Invalid phone number.")]
    InvalidNumber,
}

/// Errors from the geocoding provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeocodeError {
    /// The provider answered but returned no candidates.
    #[error("Geocoding failed, no coordinates found.")]
    NoResults,

    /// The request failed or the response could not be decoded.
    #[error("Geocoding error: {0}")]
    Transport(String),
}

/// Errors from the IP-location service. Always absorbed by the pipeline.
#[derive(Error, Debug)]
pub enum IpLookupError {
    /// The service answered with a non-success status.
    #[error("IP-API failed")]
    Failed,

    /// The request failed or the response could not be decoded.
    #[error("error: {0}")]
    Transport(#[from] ReqwestError),
}

/// Errors from reading or writing a persisted JSON store.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Filesystem error.
    #[error("Storage I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The in-memory value could not be serialized.
    #[error("Storage serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors from the geocode cache.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Empty keys are never stored.
    #[error("Cache key must not be empty")]
    InvalidKey,

    /// The entry was inserted in memory but the backing file could not be written.
    #[error("Failed to persist geocode cache: {0}")]
    Persist(#[from] StorageError),
}

/// Errors that abort a single lookup.
///
/// None of these leave a partial write behind: the cache and history are
/// either untouched or fully updated.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Number validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Neither a country nor a region description was available to geocode.
    #[error("No location description available for this number.")]
    MissingLocation,

    /// The geocoding provider failed for this lookup.
    #[error(transparent)]
    GeocodeFailed(#[from] GeocodeError),

    /// The history entry could not be persisted.
    #[error("Failed to save lookup history: {0}")]
    History(#[source] StorageError),
}

impl LookupError {
    /// Category used for session statistics.
    pub fn error_type(&self) -> ErrorType {
        match self {
            LookupError::Validation(ValidationError::InvalidFormat) => ErrorType::InvalidFormat,
            LookupError::Validation(ValidationError::ParseError(_)) => ErrorType::ParseError,
            LookupError::Validation(ValidationError::InvalidNumber) => ErrorType::InvalidNumber,
            LookupError::MissingLocation => ErrorType::MissingLocation,
            LookupError::GeocodeFailed(GeocodeError::NoResults) => ErrorType::GeocodeNoResults,
            LookupError::GeocodeFailed(GeocodeError::Transport(_)) => ErrorType::GeocodeTransport,
            LookupError::History(_) => ErrorType::HistoryWrite,
        }
    }
}

/// Types of lookup failures tracked per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    InvalidFormat,
    ParseError,
    InvalidNumber,
    MissingLocation,
    GeocodeNoResults,
    GeocodeTransport,
    HistoryWrite,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::InvalidFormat => "Missing country code",
            ErrorType::ParseError => "Unparseable number",
            ErrorType::InvalidNumber => "Invalid number",
            ErrorType::MissingLocation => "No location description",
            ErrorType::GeocodeNoResults => "Geocoder returned no results",
            ErrorType::GeocodeTransport => "Geocoder request failed",
            ErrorType::HistoryWrite => "History write failed",
        }
    }
}

/// Types of informational events tracked per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    CacheHit,
    CacheMiss,
    IpLocated,
    IpUnknown,
}

impl std::fmt::Display for InfoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            InfoType::CacheHit => "Geocode cache hit",
            InfoType::CacheMiss => "Geocode cache miss",
            InfoType::IpLocated => "IP location resolved",
            InfoType::IpUnknown => "IP location unknown",
        };
        f.write_str(s)
    }
}
