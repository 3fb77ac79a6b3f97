//! The lookup pipeline: validate, geocode through the cache, optionally
//! locate the caller's IP, record history, and hand back everything a
//! presentation layer needs.

mod pipeline;
mod types;

pub use pipeline::LookupPipeline;
pub use types::{LookupOptions, LookupResult, MapStyle};
