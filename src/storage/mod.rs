//! Persistence for the flat JSON stores (geocode cache and lookup history).
//!
//! Both stores are loaded fully into memory at startup and rewritten in full
//! after every mutation.

mod json;

pub use json::{load_json_or_default, persist_json};
