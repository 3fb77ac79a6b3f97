//! Lookup orchestration.

use chrono::Utc;
use log::{debug, info, warn};

use super::types::{LookupOptions, LookupResult};
use crate::error_handling::LookupError;
use crate::geocode::{query_key, GeoCache, GeoResolver};
use crate::history::{HistoryEntry, HistoryStore};
use crate::ip_location::{IpLocation, IpLocator};
use crate::phone::{NumberValidator, PhoneMetadataProvider};

/// Owns the cache and history and runs lookups against the external
/// collaborators.
///
/// A successful lookup performs at most one cache insertion and exactly one
/// history append. A failed lookup leaves both untouched.
pub struct LookupPipeline<P, G, I> {
    validator: NumberValidator<P>,
    resolver: G,
    ip_locator: I,
    cache: GeoCache,
    history: HistoryStore,
}

impl<P, G, I> LookupPipeline<P, G, I>
where
    P: PhoneMetadataProvider,
    G: GeoResolver,
    I: IpLocator,
{
    pub fn new(
        validator: NumberValidator<P>,
        resolver: G,
        ip_locator: I,
        cache: GeoCache,
        history: HistoryStore,
    ) -> Self {
        Self {
            validator,
            resolver,
            ip_locator,
            cache,
            history,
        }
    }

    /// Looks up `raw` and records the result in history.
    ///
    /// # Errors
    ///
    /// - `Validation` for numbers that fail validation
    /// - `MissingLocation` if the number has no country or region to geocode
    /// - `GeocodeFailed` if the cache misses and the resolver fails
    /// - `History` if the history entry could not be persisted
    ///
    /// IP-location failures are never errors; they show up as
    /// [`IpLocation::Unknown`] in the result.
    pub async fn lookup(
        &mut self,
        raw: &str,
        options: &LookupOptions,
    ) -> Result<LookupResult, LookupError> {
        let record = self.validator.validate(raw)?;

        let query = query_key(&record);
        if query.is_empty() {
            return Err(LookupError::MissingLocation);
        }

        let (geo, cache_hit) = match self.cache.get(&query) {
            Some(cached) => {
                debug!("Geocode cache hit for {:?}", query);
                (cached.clone(), true)
            }
            None => {
                debug!("Geocode cache miss for {:?}", query);
                let resolved = self.resolver.resolve(&query).await?;
                if let Err(e) = self.cache.put(&query, resolved.clone()) {
                    warn!("{}. Continuing with the in-memory entry.", e);
                }
                (resolved, false)
            }
        };

        let ip_location = if options.include_ip {
            self.locate_ip().await
        } else {
            IpLocation::NotRetrieved
        };

        let timestamp = Utc::now();
        let entry = HistoryEntry::new(&record, &geo, ip_location.clone(), timestamp);
        self.history
            .append(entry)
            .map_err(LookupError::History)?;

        info!(
            "Located {} at ({}, {}) via {:?}{}",
            record.raw_number(),
            geo.latitude,
            geo.longitude,
            query,
            if cache_hit { " (cached)" } else { "" }
        );

        Ok(LookupResult {
            zoom: LookupResult::zoom_for(&record),
            tile_source: options.map_style.tile_source(),
            record,
            query,
            geo,
            cache_hit,
            ip_location,
            timestamp,
        })
    }

    async fn locate_ip(&self) -> IpLocation {
        match self.ip_locator.locate().await {
            Ok(geo) => IpLocation::Located(geo.to_string()),
            Err(e) => {
                warn!("IP location unavailable: {}", e);
                IpLocation::Unknown(e.to_string())
            }
        }
    }

    pub fn cache(&self) -> &GeoCache {
        &self.cache
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut HistoryStore {
        &mut self.history
    }

    pub fn resolver(&self) -> &G {
        &self.resolver
    }
}
