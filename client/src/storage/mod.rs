//! # Device Key-Value Storage
//!
//! Synchronous key-value persistence backing the interaction cache.
//!
//! The client treats device storage as a plain string-to-string map: reads
//! and writes never suspend and a single record write is atomic. Two
//! implementations are provided:
//!
//! - [`MemoryKvStore`] - process-lifetime map, used in tests and as the
//!   default when no storage path is configured
//! - [`JsonFileStore`] - a JSON file on disk, mirroring the map on every
//!   write so records survive process restarts
//!
//! Consumers depend on the [`KvStore`] trait, never a concrete store, so the
//! platform layer can swap in whatever the device offers.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Synchronous key-value store abstraction over device storage.
///
/// All operations are infallible at this boundary: a backend that fails to
/// persist logs the failure and keeps serving the in-memory view, which
/// matches how the client degrades everywhere else (best available prior
/// value, never an interrupting error).
pub trait KvStore: Send + Sync {
    /// Read the raw string stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str);

    /// Remove `key` if present. Used only by maintenance sweeps.
    fn remove(&self, key: &str);

    /// Snapshot of all stored keys.
    fn keys(&self) -> Vec<String>;
}

/// In-memory store with process lifetime.
#[derive(Default)]
pub struct MemoryKvStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.write().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.write().remove(key);
    }

    fn keys(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }
}

/// JSON-file-backed store.
///
/// The whole map lives in memory; every mutation rewrites the file. Entry
/// counts here are small (one record per toggled post/comment flag), so a
/// full rewrite per toggle is cheaper than managing partial updates.
pub struct JsonFileStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl JsonFileStore {
    /// Open the store at `path`, loading any existing content.
    ///
    /// A missing or unreadable file starts the store empty; a corrupt file is
    /// logged and discarded rather than surfaced, since cached flags are
    /// recoverable from the server at any time.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<HashMap<String, String>>(&raw) {
                Ok(map) => map,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Discarding corrupt kv store file");
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        Self {
            path,
            entries: RwLock::new(entries),
        }
    }

    fn persist(&self, entries: &HashMap<String, String>) {
        let serialized = match serde_json::to_string(entries) {
            Ok(s) => s,
            Err(e) => {
                warn!(error = %e, "Failed to serialize kv store");
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, serialized) {
            warn!(path = %self.path.display(), error = %e, "Failed to persist kv store");
        }
    }
}

impl KvStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.write();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.write();
        if entries.remove(key).is_some() {
            self.persist(&entries);
        }
    }

    fn keys(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("econboard-kv-{}-{}.json", std::process::id(), name))
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryKvStore::new();
        assert_eq!(store.get("post_like_1"), None);

        store.set("post_like_1", "{\"isLiked\":true}");
        assert_eq!(store.get("post_like_1").as_deref(), Some("{\"isLiked\":true}"));

        store.set("post_like_1", "{\"isLiked\":false}");
        assert_eq!(store.get("post_like_1").as_deref(), Some("{\"isLiked\":false}"));

        store.remove("post_like_1");
        assert_eq!(store.get("post_like_1"), None);
    }

    #[test]
    fn json_store_survives_reopen() {
        let path = temp_path("reopen");
        let _ = std::fs::remove_file(&path);

        {
            let store = JsonFileStore::open(&path);
            store.set("post_bookmark_7", "{\"isBookmarked\":true,\"timestamp\":1}");
        }

        let reopened = JsonFileStore::open(&path);
        assert_eq!(
            reopened.get("post_bookmark_7").as_deref(),
            Some("{\"isBookmarked\":true,\"timestamp\":1}")
        );

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn json_store_discards_corrupt_file() {
        let path = temp_path("corrupt");
        std::fs::write(&path, "not json at all").unwrap();

        let store = JsonFileStore::open(&path);
        assert!(store.keys().is_empty());

        let _ = std::fs::remove_file(&path);
    }
}
