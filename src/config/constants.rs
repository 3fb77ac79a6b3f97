//! Configuration constants.
//!
//! This module defines the default file locations, service endpoints and
//! timeouts used throughout the application.

use std::time::Duration;

// Persisted state (used as defaults)
pub const DEFAULT_CACHE_PATH: &str = "geocode_cache.json";
pub const DEFAULT_HISTORY_PATH: &str = "history.json";
pub const DEFAULT_LOOKUP_EXPORT_PATH: &str = "phone_lookup_export.csv";
pub const DEFAULT_HISTORY_EXPORT_PATH: &str = "full_history.csv";
pub const DEFAULT_MAP_PATH: &str = "mylocation.html";
pub const DEFAULT_HISTORY_MAP_PATH: &str = "history_map.html";

/// Environment variable holding the OpenCage API key.
pub const OPENCAGE_API_KEY_ENV: &str = "OPENCAGE_API_KEY";

/// OpenCage forward geocoding endpoint (JSON output).
pub const OPENCAGE_GEOCODE_URL: &str = "https://api.opencagedata.com/geocode/v1/json";

/// ip-api.com endpoint; with no path argument it locates the caller's own IP.
pub const IP_API_URL: &str = "http://ip-api.com/json/";

/// Per-request timeout for the geocoding service in seconds
pub const GEOCODER_TIMEOUT_SECS: u64 = 10;

/// Timeout for the IP-location request.
/// Kept short since the result is optional enrichment.
pub const IP_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Locale used for country/region names returned by the metadata provider.
pub const DEFAULT_LOCALE: &str = "en";

/// User-Agent sent to the external services.
pub const DEFAULT_USER_AGENT: &str = concat!("phone_locator/", env!("CARGO_PKG_VERSION"));

// Map presentation
/// Zoom level when the provider returned a detailed region description
pub const ZOOM_DETAILED: u8 = 9;
/// Zoom level when only the country is known
pub const ZOOM_COUNTRY: u8 = 5;
/// Zoom level for the history overview map
pub const ZOOM_HISTORY: u8 = 3;

pub const TILES_STANDARD: &str = "OpenStreetMap";
pub const TILES_SATELLITE: &str =
    "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}";
pub const TILES_TERRAIN: &str =
    "https://server.arcgisonline.com/ArcGIS/rest/services/World_Topo_Map/MapServer/tile/{z}/{y}/{x}";
pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const MAP_ATTRIBUTION: &str = "Map data © OpenStreetMap contributors, Esri";

// Placeholder values substituted into history entries
pub const NOT_AVAILABLE: &str = "Not available";
pub const UNKNOWN: &str = "Unknown";
pub const NOT_RETRIEVED: &str = "Not retrieved";
pub const NOT_APPLICABLE: &str = "N/A";

/// Column headers shared by the per-lookup and full-history CSV exports.
pub const EXPORT_HEADER: [&str; 11] = [
    "Phone Number",
    "Country",
    "Detailed Location",
    "Service Provider",
    "Time Zone",
    "Latitude",
    "Longitude",
    "Number Type",
    "IP Location",
    "Confidence",
    "Timestamp",
];
