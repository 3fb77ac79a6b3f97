//! Geocoding resolver seam and the OpenCage implementation.

use async_trait::async_trait;
use log::debug;
use serde::Deserialize;

use super::types::{lenient_confidence, Bounds, GeoResult, LatLng};
use crate::error_handling::GeocodeError;

/// External forward-geocoding capability.
///
/// Only called on a cache miss. The first candidate the provider returns is
/// authoritative.
#[async_trait]
pub trait GeoResolver: Send + Sync {
    async fn resolve(&self, query: &str) -> Result<GeoResult, GeocodeError>;
}

/// OpenCage forward geocoder (`/geocode/v1/json`).
#[derive(Debug, Clone)]
pub struct OpenCageGeocoder {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct OpenCageResponse {
    #[serde(default)]
    results: Vec<OpenCageCandidate>,
}

#[derive(Debug, Deserialize)]
struct OpenCageCandidate {
    geometry: LatLng,
    #[serde(default, deserialize_with = "lenient_confidence")]
    confidence: Option<u32>,
    #[serde(default)]
    bounds: Option<Bounds>,
}

impl OpenCageGeocoder {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

/// Strips the request URL (it carries the API key) before stringifying.
fn transport_error(e: reqwest::Error) -> GeocodeError {
    GeocodeError::Transport(e.without_url().to_string())
}

#[async_trait]
impl GeoResolver for OpenCageGeocoder {
    async fn resolve(&self, query: &str) -> Result<GeoResult, GeocodeError> {
        debug!("Geocoding {:?}", query);
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", query),
                ("key", self.api_key.as_str()),
                ("limit", "1"),
                ("no_annotations", "1"),
            ])
            .send()
            .await
            .map_err(transport_error)?
            .error_for_status()
            .map_err(transport_error)?;

        let body: OpenCageResponse = response.json().await.map_err(transport_error)?;
        let first = body
            .results
            .into_iter()
            .next()
            .ok_or(GeocodeError::NoResults)?;

        Ok(GeoResult {
            latitude: first.geometry.lat,
            longitude: first.geometry.lng,
            confidence: first.confidence,
            bounds: first.bounds,
        })
    }
}
