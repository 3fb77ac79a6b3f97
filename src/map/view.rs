//! Map view model.

use anyhow::{Context, Result};
use log::debug;
use std::path::Path;

use crate::config::{TILES_STANDARD, ZOOM_HISTORY};
use crate::geocode::{Bounds, GeoResolver, LatLng};
use crate::history::HistoryEntry;
use crate::ip_location::IpLocation;
use crate::lookup::LookupResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerColor {
    Blue,
    Green,
}

impl MarkerColor {
    pub(crate) fn as_css(&self) -> &'static str {
        match self {
            MarkerColor::Blue => "#2a81cb",
            MarkerColor::Green => "#2aad27",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub position: LatLng,
    pub popup: String,
    pub color: MarkerColor,
}

/// Everything needed to draw one map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub center: LatLng,
    pub zoom: u8,
    /// Tile source identifier (`OpenStreetMap` or a tile URL template)
    pub tiles: &'static str,
    pub markers: Vec<Marker>,
    /// Confidence area of the geocoded location
    pub area: Option<Bounds>,
}

impl MapView {
    /// Map for a single lookup: location marker, optional confidence area and
    /// optional IP marker.
    pub fn for_lookup(result: &LookupResult, ip_position: Option<LatLng>) -> Self {
        let mut markers = vec![Marker {
            position: result.geo.center(),
            popup: result.query.clone(),
            color: MarkerColor::Blue,
        }];

        if let (Some(position), Some(description)) = (ip_position, result.ip_location.located())
        {
            markers.push(Marker {
                position,
                popup: format!("IP Location: {}", description),
                color: MarkerColor::Green,
            });
        }

        Self {
            center: result.geo.center(),
            zoom: result.zoom,
            tiles: result.tile_source,
            markers,
            area: result.geo.bounds,
        }
    }

    /// Overview map with one marker per history entry, centred on the first.
    ///
    /// Returns `None` for an empty history.
    pub fn for_history<'a, I>(entries: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a HistoryEntry>,
    {
        let markers: Vec<Marker> = entries
            .into_iter()
            .map(|entry| Marker {
                position: LatLng {
                    lat: entry.latitude,
                    lng: entry.longitude,
                },
                popup: format!(
                    "{} ({}, {}), IP: {}",
                    entry.number, entry.detailed_location, entry.country, entry.ip_location
                ),
                color: MarkerColor::Blue,
            })
            .collect();

        let center = markers.first()?.position;
        Some(Self {
            center,
            zoom: ZOOM_HISTORY,
            tiles: TILES_STANDARD,
            markers,
            area: None,
        })
    }

    /// Renders the view as a standalone HTML document.
    pub fn to_html(&self) -> String {
        super::html::render(self)
    }

    /// Writes the rendered HTML to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_html())
            .with_context(|| format!("Failed to write map: {}", path.display()))
    }
}

/// Geocodes a resolved IP location for the map. Best effort: any failure
/// just means no IP marker.
pub async fn locate_ip_marker<G: GeoResolver + ?Sized>(
    resolver: &G,
    ip_location: &IpLocation,
) -> Option<LatLng> {
    let description = ip_location.located()?;
    match resolver.resolve(description).await {
        Ok(result) => Some(result.center()),
        Err(e) => {
            debug!("No IP marker for {:?}: {}", description, e);
            None
        }
    }
}
