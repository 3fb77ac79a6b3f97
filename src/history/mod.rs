//! Append-only lookup history persisted as a JSON array.

mod store;
mod types;

pub use store::HistoryStore;
pub use types::HistoryEntry;
