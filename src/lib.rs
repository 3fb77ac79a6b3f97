//! phone_locator library: phone number lookup with geocoding and history
//!
//! This library validates international phone numbers, geocodes the
//! registered country or region through a persistent cache, optionally
//! resolves the caller's public IP location, and records every successful
//! lookup in a persistent history.
//!
//! # Example
//!
//! ```no_run
//! use phone_locator::initialization::init_pipeline;
//! use phone_locator::{Config, Credentials, LookupOptions};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let credentials = Credentials::from_env()?;
//! let mut pipeline = init_pipeline(&config, &credentials)?;
//!
//! let result = pipeline
//!     .lookup("+14155552671", &LookupOptions::default())
//!     .await?;
//! println!("{} is near ({}, {})", result.record.raw_number(),
//!          result.geo.latitude, result.geo.longitude);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Lookups are async and need a Tokio runtime. Use `#[tokio::main]` in your
//! application or call the library from an async context.

pub mod app;
pub mod config;
pub mod error_handling;
pub mod export;
pub mod geocode;
pub mod history;
pub mod initialization;
pub mod ip_location;
pub mod lookup;
pub mod map;
pub mod phone;
mod storage;

// Re-export public API
pub use config::{Config, Credentials, LogFormat, LogLevel};
pub use error_handling::{LookupError, ValidationError};
pub use lookup::{LookupOptions, LookupPipeline, LookupResult, MapStyle};
