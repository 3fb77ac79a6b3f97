//! History persistence.

use std::path::{Path, PathBuf};

use log::debug;

use super::types::HistoryEntry;
use crate::error_handling::StorageError;
use crate::storage::{load_json_or_default, persist_json};

/// Ordered, persisted sequence of [`HistoryEntry`] values.
///
/// Loaded fully at startup and rewritten after every mutation. If a write
/// fails the in-memory change is undone, so memory and file never disagree
/// once a call returns.
#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// Loads history from `path`; a missing or corrupt file yields an empty history.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries: Vec<HistoryEntry> = load_json_or_default(&path);
        debug!(
            "Loaded {} history entries from {}",
            entries.len(),
            path.display()
        );
        Self { path, entries }
    }

    /// Appends `entry` and persists the full history.
    pub fn append(&mut self, entry: HistoryEntry) -> Result<(), StorageError> {
        self.entries.push(entry);
        if let Err(e) = persist_json(&self.path, &self.entries) {
            self.entries.pop();
            return Err(e);
        }
        Ok(())
    }

    /// All entries in insertion (chronological) order.
    pub fn all(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Entries whose number or country contains `text`, ignoring case.
    ///
    /// An empty `text` returns everything. Order is preserved.
    pub fn filter(&self, text: &str) -> Vec<&HistoryEntry> {
        if text.is_empty() {
            return self.entries.iter().collect();
        }
        let needle = text.to_lowercase();
        self.entries.iter().filter(|e| e.matches(&needle)).collect()
    }

    /// Removes every entry and persists the empty history.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        let previous = std::mem::take(&mut self.entries);
        if let Err(e) = persist_json(&self.path, &self.entries) {
            self.entries = previous;
            return Err(e);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ip_location::IpLocation;
    use crate::phone::LineType;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn entry(number: &str, country: &str) -> HistoryEntry {
        HistoryEntry {
            number: number.to_string(),
            country: country.to_string(),
            detailed_location: "Not available".to_string(),
            service_provider: "Unknown".to_string(),
            time_zones: vec![],
            latitude: 1.0,
            longitude: 2.0,
            number_type: LineType::Mobile,
            ip_location: IpLocation::NotRetrieved,
            confidence: None,
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_append_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        let mut store = HistoryStore::load(&path);
        store.append(entry("+33612345678", "France")).unwrap();

        let reloaded = HistoryStore::load(&path);
        assert_eq!(reloaded.all(), store.all());
        assert_eq!(reloaded.len(), 1);
    }

    #[test]
    fn test_clear_then_append() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        let mut store = HistoryStore::load(&path);
        store.append(entry("+1", "United States")).unwrap();
        store.append(entry("+2", "Canada")).unwrap();

        store.clear().unwrap();
        assert!(store.all().is_empty());
        assert!(HistoryStore::load(&path).is_empty());

        let only = entry("+3", "Mexico");
        store.append(only.clone()).unwrap();
        assert_eq!(store.all(), &[only]);
    }

    #[test]
    fn test_filter_empty_returns_all_in_order() {
        let dir = TempDir::new().unwrap();
        let mut store = HistoryStore::load(dir.path().join("h.json"));
        store.append(entry("+14155552671", "United States")).unwrap();
        store.append(entry("+33612345678", "France")).unwrap();
        store.append(entry("+4915112345678", "Germany")).unwrap();

        let all: Vec<&HistoryEntry> = store.all().iter().collect();
        assert_eq!(store.filter(""), all);
    }

    #[test]
    fn test_filter_matches_number_or_country_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let mut store = HistoryStore::load(dir.path().join("h.json"));
        store.append(entry("+14155552671", "United States")).unwrap();
        store.append(entry("+33612345678", "France")).unwrap();
        store.append(entry("+16135550123", "Canada")).unwrap();
        store.append(entry("+33142685300", "France")).unwrap();

        let french: Vec<&str> = store
            .filter("FRANCE")
            .iter()
            .map(|e| e.number.as_str())
            .collect();
        assert_eq!(french, ["+33612345678", "+33142685300"]);

        let plus_one: Vec<&str> = store
            .filter("+1")
            .iter()
            .map(|e| e.number.as_str())
            .collect();
        assert_eq!(plus_one, ["+14155552671", "+16135550123"]);

        assert!(store.filter("atlantis").is_empty());
    }

    #[test]
    fn test_corrupt_history_starts_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("h.json");
        std::fs::write(&path, "[{\"number\": ").unwrap();
        let store = HistoryStore::load(&path);
        assert!(store.is_empty());
    }

    #[test]
    fn test_failed_append_rolls_back() {
        let dir = TempDir::new().unwrap();
        // A directory where the file should be makes the rename fail
        let path = dir.path().join("history.json");
        std::fs::create_dir(&path).unwrap();
        let mut store = HistoryStore::load(&path);

        assert!(store.append(entry("+1", "United States")).is_err());
        assert!(store.is_empty());
    }
}
