//! Map artifacts built from lookup results.
//!
//! The pipeline only supplies data; this module turns it into a
//! self-contained Leaflet HTML page.

mod html;
mod view;

pub use view::{locate_ip_marker, MapView, Marker, MarkerColor};
