//! Lookup options and results.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::config::{TILES_SATELLITE, TILES_STANDARD, TILES_TERRAIN, ZOOM_COUNTRY, ZOOM_DETAILED};
use crate::geocode::GeoResult;
use crate::ip_location::IpLocation;
use crate::phone::PhoneRecord;

/// Map tile style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, EnumIter, Serialize, Deserialize)]
pub enum MapStyle {
    #[default]
    Standard,
    Satellite,
    Terrain,
}

impl MapStyle {
    /// Tile source identifier for this style.
    pub fn tile_source(&self) -> &'static str {
        match self {
            MapStyle::Standard => TILES_STANDARD,
            MapStyle::Satellite => TILES_SATELLITE,
            MapStyle::Terrain => TILES_TERRAIN,
        }
    }
}

/// Per-call options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookupOptions {
    pub map_style: MapStyle,
    pub include_ip: bool,
}

/// Everything produced by one successful lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupResult {
    pub record: PhoneRecord,
    /// The geocoding query (and cache key) derived from the record
    pub query: String,
    pub geo: GeoResult,
    /// Whether `geo` came from the cache rather than the resolver
    pub cache_hit: bool,
    pub ip_location: IpLocation,
    pub timestamp: DateTime<Utc>,
    pub zoom: u8,
    pub tile_source: &'static str,
}

impl LookupResult {
    /// Closer zoom when a detailed region is known, country-level otherwise.
    pub(crate) fn zoom_for(record: &PhoneRecord) -> u8 {
        if record.region_description().is_empty() {
            ZOOM_COUNTRY
        } else {
            ZOOM_DETAILED
        }
    }

    pub fn google_maps_url(&self) -> String {
        format!(
            "https://www.google.com/maps/place/{},{}",
            self.geo.latitude, self.geo.longitude
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_tile_sources_are_distinct() {
        let sources: Vec<&str> = MapStyle::iter().map(|s| s.tile_source()).collect();
        assert_eq!(sources[0], "OpenStreetMap");
        assert!(sources[1].contains("World_Imagery"));
        assert!(sources[2].contains("World_Topo_Map"));
    }

    #[test]
    fn test_default_options() {
        let options = LookupOptions::default();
        assert_eq!(options.map_style, MapStyle::Standard);
        assert!(!options.include_ip);
    }
}
