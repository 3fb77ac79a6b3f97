//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the logger, the HTTP client
//! and a fully wired [`LookupPipeline`] with its persisted stores.

mod client;
mod logger;

pub use client::init_client;
pub use logger::init_logger_with;

use crate::config::{Config, Credentials};
use crate::error_handling::InitializationError;
use crate::geocode::{GeoCache, OpenCageGeocoder};
use crate::history::HistoryStore;
use crate::ip_location::IpApiLocator;
use crate::lookup::LookupPipeline;
use crate::phone::{NumberValidator, PhonenumberProvider};

/// The pipeline wired to the production collaborators.
pub type DefaultPipeline = LookupPipeline<PhonenumberProvider, OpenCageGeocoder, IpApiLocator>;

/// Loads the cache and history and builds the production pipeline.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the HTTP client cannot be built.
pub fn init_pipeline(
    config: &Config,
    credentials: &Credentials,
) -> Result<DefaultPipeline, InitializationError> {
    let client = init_client(config)?;
    let validator = NumberValidator::new(PhonenumberProvider, config.locale.clone());
    let resolver = OpenCageGeocoder::new(
        client.clone(),
        config.geocoder_url.clone(),
        credentials.geocoder_key.clone(),
    );
    let ip_locator = IpApiLocator::new(client, config.ip_api_url.clone());

    Ok(LookupPipeline::new(
        validator,
        resolver,
        ip_locator,
        GeoCache::load(&config.cache_path),
        HistoryStore::load(&config.history_path),
    ))
}
