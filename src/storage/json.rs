//! JSON file load/persist helpers.

use std::io::Write;
use std::path::Path;

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;

use crate::error_handling::StorageError;

/// Loads a JSON value from `path`, falling back to `T::default()`.
///
/// A missing, empty or unreadable file is treated as empty state, and so is a
/// file that does not parse. Persisted state never blocks startup.
pub fn load_json_or_default<T>(path: &Path) -> T
where
    T: DeserializeOwned + Default,
{
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("{} does not exist yet, starting empty", path.display());
            return T::default();
        }
        Err(e) => {
            warn!("Failed to read {}: {}. Starting empty.", path.display(), e);
            return T::default();
        }
    };

    if content.trim().is_empty() {
        return T::default();
    }

    match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            warn!(
                "Ignoring corrupt file {}: {}. Starting empty.",
                path.display(),
                e
            );
            T::default()
        }
    }
}

/// Writes `value` to `path` as pretty-printed JSON.
///
/// The content goes to a temporary file in the same directory which is then
/// renamed over the target, so a reader sees either the old or the new file.
pub fn persist_json<T>(path: &Path, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
{
    let content = serde_json::to_string_pretty(value)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let io_err = |source: std::io::Error| StorageError::Io {
        path: path.display().to_string(),
        source,
    };

    std::fs::create_dir_all(dir).map_err(io_err)?;
    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(content.as_bytes()).map_err(io_err)?;
    tmp.flush().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;

    Ok(())
}
