//! Error handling and lookup statistics.
//!
//! This module provides:
//! - Error type definitions for configuration, validation, geocoding, storage
//!   and the lookup pipeline
//! - Session statistics tracking (failures by category, cache/IP events)

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{
    CacheError, ConfigError, ErrorType, GeocodeError, InfoType, InitializationError, IpLookupError,
    LookupError, StorageError, ValidationError,
};
