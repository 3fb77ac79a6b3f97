//! Geocoding: query-key derivation, the persistent result cache and the
//! external resolver seam.

mod cache;
mod resolver;
mod types;

pub use cache::GeoCache;
pub use resolver::{GeoResolver, OpenCageGeocoder};
pub use types::{query_key, Bounds, GeoResult, LatLng};
