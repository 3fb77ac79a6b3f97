//! Persistent geocode cache.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::debug;

use super::types::GeoResult;
use crate::error_handling::CacheError;
use crate::storage::{load_json_or_default, persist_json};

/// Maps geocoding query strings to previously resolved results.
///
/// Entries are permanent: the cache only grows, and the backing file is
/// rewritten after every insertion. The in-memory map is authoritative.
#[derive(Debug)]
pub struct GeoCache {
    path: PathBuf,
    entries: BTreeMap<String, GeoResult>,
}

impl GeoCache {
    /// Loads the cache from `path`.
    ///
    /// A missing or corrupt file yields an empty cache.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut entries: BTreeMap<String, GeoResult> = load_json_or_default(&path);
        entries.retain(|key, _| !key.is_empty());
        debug!(
            "Loaded {} geocode cache entries from {}",
            entries.len(),
            path.display()
        );
        Self { path, entries }
    }

    pub fn get(&self, key: &str) -> Option<&GeoResult> {
        self.entries.get(key)
    }

    /// Inserts `result` under `key` and persists the whole cache.
    ///
    /// Re-inserting an existing key overwrites it; lookups always check
    /// [`get`](Self::get) first so this only happens if a caller skips that.
    ///
    /// # Errors
    ///
    /// - `InvalidKey` if `key` is empty (nothing is stored)
    /// - `Persist` if the file could not be written; the entry stays in memory
    pub fn put(&mut self, key: &str, result: GeoResult) -> Result<(), CacheError> {
        if key.is_empty() {
            return Err(CacheError::InvalidKey);
        }
        if self.entries.insert(key.to_string(), result).is_some() {
            debug!("Overwrote geocode cache entry for {:?}", key);
        }
        self.persist()
    }

    /// Writes the full cache to its backing file.
    pub fn persist(&self) -> Result<(), CacheError> {
        persist_json(&self.path, &self.entries)?;
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
    use tempfile::TempDir;

    fn paris() -> GeoResult {
        GeoResult {
            latitude: 48.8566,
            longitude: 2.3522,
            confidence: Some(5),
            bounds: None,
        }
    }

    #[test]
    fn test_missing_file_is_empty_cache() {
        let dir = TempDir::new().unwrap();
        let cache = GeoCache::load(dir.path().join("geocode_cache.json"));
        assert!(cache.is_empty());
        assert!(cache.get("Paris, France").is_none());
    }

    #[test]
    fn test_put_persists_immediately() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("geocode_cache.json");
        let mut cache = GeoCache::load(&path);
        cache.put("Paris, France", paris()).unwrap();

        let reloaded = GeoCache::load(&path);
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.get("Paris, France"), Some(&paris()));
    }

    #[test]
    fn test_empty_key_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("geocode_cache.json");
        let mut cache = GeoCache::load(&path);
        assert!(matches!(cache.put("", paris()), Err(CacheError::InvalidKey)));
        assert!(cache.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn test_overwrite_is_benign() {
        let dir = TempDir::new().unwrap();
        let mut cache = GeoCache::load(dir.path().join("c.json"));
        cache.put("France", paris()).unwrap();
        let moved = GeoResult {
            confidence: Some(1),
            ..paris()
        };
        cache.put("France", moved.clone()).unwrap();
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("France"), Some(&moved));
    }

    #[test]
    fn test_corrupt_file_is_empty_cache() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("c.json");
        std::fs::write(&path, "not json at all").unwrap();
        let mut cache = GeoCache::load(&path);
        assert!(cache.is_empty());

        // Still usable: the next insert replaces the corrupt file
        cache.put("France", paris()).unwrap();
        assert_eq!(GeoCache::load(&path).len(), 1);
    }

    #[test]
    fn test_empty_keys_on_disk_are_dropped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("c.json");
        std::fs::write(
            &path,
            r#"{"": {"lat": 0.0, "lng": 0.0}, "France": {"lat": 46.6, "lng": 1.9, "confidence": "N/A", "bounds": null}}"#,
        )
        .unwrap();
        let cache = GeoCache::load(&path);
        assert_eq!(cache.len(), 1);
        assert!(cache.get("").is_none());
        assert_eq!(cache.get("France").unwrap().confidence, None);
    }
}
