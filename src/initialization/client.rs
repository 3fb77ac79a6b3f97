//! HTTP client initialization.

use reqwest::ClientBuilder;

use crate::config::{Config, DEFAULT_USER_AGENT};

/// Initializes the HTTP client shared by the geocoder and IP locator.
///
/// Uses the configured geocoder timeout; the IP locator sets its own shorter
/// per-request timeout.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(config.timeout())
        .user_agent(DEFAULT_USER_AGENT)
        .build()
}
