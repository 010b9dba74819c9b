//! # Interaction Cache Store
//!
//! Key-value persistence of `{flag, timestamp}` records per
//! `(entity kind, entity id, flag kind)`, with read-time expiry.
//!
//! Records are written only after a successful server toggle, so a cached
//! value is always a mirror of some server response, never a local guess.
//! An expired record is treated as absent - never as `false` - because
//! "we knew this 25 hours ago" carries no information about the current flag.

use crate::storage::KvStore;
use chrono::Utc;
use std::sync::Arc;
use tracing::debug;

/// Validity window for a cached flag record.
pub const FLAG_TTL_MS: i64 = 24 * 60 * 60 * 1000;

/// Which kind of entity a flag belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Post,
    Comment,
}

impl EntityKind {
    fn key_prefix(&self) -> &'static str {
        match self {
            EntityKind::Post => "post",
            EntityKind::Comment => "comment",
        }
    }
}

/// Which interaction flag a record tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagKind {
    Like,
    Bookmark,
}

impl FlagKind {
    fn key_part(&self) -> &'static str {
        match self {
            FlagKind::Like => "like",
            FlagKind::Bookmark => "bookmark",
        }
    }

    /// Field name used in the stored JSON record, matching the wire names
    /// of the toggle responses.
    fn record_field(&self) -> &'static str {
        match self {
            FlagKind::Like => "isLiked",
            FlagKind::Bookmark => "isBookmarked",
        }
    }
}

/// Typed cache key for one flag of one entity.
///
/// The key is independent of which screen performed the toggle, so the list
/// view and the detail view always observe the same override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlagKey {
    pub entity: EntityKind,
    pub entity_id: i64,
    pub flag: FlagKind,
}

impl FlagKey {
    pub fn new(entity: EntityKind, entity_id: i64, flag: FlagKind) -> Self {
        Self {
            entity,
            entity_id,
            flag,
        }
    }

    /// Render the device-storage key, e.g. `post_like_42`.
    pub fn storage_key(&self) -> String {
        format!(
            "{}_{}_{}",
            self.entity.key_prefix(),
            self.flag.key_part(),
            self.entity_id
        )
    }

    /// Parse a device-storage key back into a typed key.
    ///
    /// Returns `None` for keys that don't belong to the interaction cache,
    /// which lets maintenance sweeps skip unrelated records in shared storage.
    pub fn parse(key: &str) -> Option<Self> {
        let mut parts = key.splitn(3, '_');
        let entity = match parts.next()? {
            "post" => EntityKind::Post,
            "comment" => EntityKind::Comment,
            _ => return None,
        };
        let flag = match parts.next()? {
            "like" => FlagKind::Like,
            "bookmark" => FlagKind::Bookmark,
            _ => return None,
        };
        let entity_id = parts.next()?.parse().ok()?;
        Some(Self {
            entity,
            entity_id,
            flag,
        })
    }
}

/// One cached flag: the server's boolean and when the client captured it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionFlagRecord {
    pub value: bool,
    /// Epoch milliseconds at write time.
    pub captured_at_ms: i64,
}

impl InteractionFlagRecord {
    fn is_valid_at(&self, now_ms: i64) -> bool {
        now_ms - self.captured_at_ms < FLAG_TTL_MS
    }
}

/// Typed interaction cache over a [`KvStore`].
///
/// Cloning is cheap (the store is shared), which lets async toggle tasks
/// take a handle out of the state lock and write after the network call
/// resolves, without holding the lock across a suspension point.
#[derive(Clone)]
pub struct InteractionCache {
    store: Arc<dyn KvStore>,
}

impl InteractionCache {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Read the record for `key`, returning `None` if absent, malformed, or
    /// expired. Expiry is checked on read; there is no background sweep.
    pub fn get(&self, key: FlagKey) -> Option<InteractionFlagRecord> {
        self.get_at(key, Utc::now().timestamp_millis())
    }

    /// Overwrite the record for `key` with a fresh capture timestamp.
    ///
    /// This is the only mutation in the toggle path: the caller invokes it
    /// with the flag taken from a successful server response.
    pub fn set(&self, key: FlagKey, value: bool) {
        self.set_at(key, value, Utc::now().timestamp_millis());
    }

    /// Remove expired and unreadable interaction records.
    ///
    /// Expired records are otherwise only ignored, never purged; this lazy
    /// sweep runs once at client startup to bound storage growth. Returns the
    /// number of records removed.
    pub fn evict_expired(&self) -> usize {
        self.evict_expired_at(Utc::now().timestamp_millis())
    }

    pub(crate) fn get_at(&self, key: FlagKey, now_ms: i64) -> Option<InteractionFlagRecord> {
        let raw = self.store.get(&key.storage_key())?;
        let record = decode_record(&raw)?;
        if record.is_valid_at(now_ms) {
            Some(record)
        } else {
            None
        }
    }

    pub(crate) fn set_at(&self, key: FlagKey, value: bool, now_ms: i64) {
        let record = serde_json::json!({
            key.flag.record_field(): value,
            "timestamp": now_ms,
        });
        self.store.set(&key.storage_key(), &record.to_string());
    }

    pub(crate) fn evict_expired_at(&self, now_ms: i64) -> usize {
        let mut removed = 0;
        for storage_key in self.store.keys() {
            if FlagKey::parse(&storage_key).is_none() {
                // Not ours; shared device storage may hold unrelated records
                continue;
            }
            let stale = match self.store.get(&storage_key).as_deref().and_then(decode_record) {
                Some(record) => !record.is_valid_at(now_ms),
                None => true,
            };
            if stale {
                self.store.remove(&storage_key);
                removed += 1;
            }
        }
        if removed > 0 {
            debug!(removed, "Evicted expired interaction records");
        }
        removed
    }
}

/// Decode a stored record, accepting either toggle-response field name.
///
/// Malformed records decode to `None` and are treated exactly like absent
/// ones; a corrupt cache entry must never break rendering.
fn decode_record(raw: &str) -> Option<InteractionFlagRecord> {
    let parsed: serde_json::Value = serde_json::from_str(raw).ok()?;
    let value = parsed
        .get("isLiked")
        .or_else(|| parsed.get("isBookmarked"))?
        .as_bool()?;
    let captured_at_ms = parsed.get("timestamp")?.as_i64()?;
    Some(InteractionFlagRecord {
        value,
        captured_at_ms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryKvStore;

    fn cache() -> InteractionCache {
        InteractionCache::new(Arc::new(MemoryKvStore::new()))
    }

    fn like_key(id: i64) -> FlagKey {
        FlagKey::new(EntityKind::Post, id, FlagKind::Like)
    }

    #[test]
    fn storage_key_format() {
        assert_eq!(like_key(42).storage_key(), "post_like_42");
        assert_eq!(
            FlagKey::new(EntityKind::Post, 7, FlagKind::Bookmark).storage_key(),
            "post_bookmark_7"
        );
        assert_eq!(
            FlagKey::new(EntityKind::Comment, 3, FlagKind::Like).storage_key(),
            "comment_like_3"
        );
    }

    #[test]
    fn parse_inverts_storage_key() {
        for key in [
            like_key(42),
            FlagKey::new(EntityKind::Comment, 9, FlagKind::Bookmark),
        ] {
            assert_eq!(FlagKey::parse(&key.storage_key()), Some(key));
        }
        assert_eq!(FlagKey::parse("theme_config"), None);
        assert_eq!(FlagKey::parse("post_like_abc"), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let cache = cache();
        cache.set_at(like_key(42), true, 1_000);
        let record = cache.get_at(like_key(42), 2_000).unwrap();
        assert!(record.value);
        assert_eq!(record.captured_at_ms, 1_000);
    }

    #[test]
    fn overwrite_refreshes_timestamp() {
        let cache = cache();
        cache.set_at(like_key(42), true, 1_000);
        cache.set_at(like_key(42), false, 5_000);
        let record = cache.get_at(like_key(42), 6_000).unwrap();
        assert!(!record.value);
        assert_eq!(record.captured_at_ms, 5_000);
    }

    #[test]
    fn expiry_is_monotonic_over_the_window() {
        let cache = cache();
        let t0 = 1_700_000_000_000;
        cache.set_at(like_key(1), true, t0);

        // Honored strictly inside the window, regardless of value
        assert!(cache.get_at(like_key(1), t0).is_some());
        assert!(cache.get_at(like_key(1), t0 + FLAG_TTL_MS - 1).is_some());

        // Ignored from the boundary on - expired means absent, not false
        assert!(cache.get_at(like_key(1), t0 + FLAG_TTL_MS).is_none());
        assert!(cache.get_at(like_key(1), t0 + 10 * FLAG_TTL_MS).is_none());
    }

    #[test]
    fn accepts_both_wire_field_names() {
        let store = Arc::new(MemoryKvStore::new());
        let cache = InteractionCache::new(store.clone());

        store.set("post_like_1", r#"{"isLiked":true,"timestamp":1000}"#);
        store.set("post_bookmark_1", r#"{"isBookmarked":true,"timestamp":1000}"#);

        assert!(cache.get_at(like_key(1), 2_000).unwrap().value);
        assert!(cache
            .get_at(FlagKey::new(EntityKind::Post, 1, FlagKind::Bookmark), 2_000)
            .unwrap()
            .value);
    }

    #[test]
    fn malformed_record_reads_as_absent() {
        let store = Arc::new(MemoryKvStore::new());
        let cache = InteractionCache::new(store.clone());

        store.set("post_like_1", "not json");
        store.set("post_like_2", r#"{"isLiked":"yes","timestamp":1000}"#);
        store.set("post_like_3", r#"{"isLiked":true}"#);

        assert!(cache.get_at(like_key(1), 2_000).is_none());
        assert!(cache.get_at(like_key(2), 2_000).is_none());
        assert!(cache.get_at(like_key(3), 2_000).is_none());
    }

    #[test]
    fn eviction_removes_only_stale_interaction_records() {
        let store = Arc::new(MemoryKvStore::new());
        let cache = InteractionCache::new(store.clone());
        let t0 = 1_700_000_000_000;

        cache.set_at(like_key(1), true, t0); // fresh
        cache.set_at(like_key(2), false, t0 - FLAG_TTL_MS - 1); // expired
        store.set("post_like_3", "corrupt"); // unreadable
        store.set("theme_config", "{}"); // unrelated record in shared storage

        let removed = cache.evict_expired_at(t0 + 1);
        assert_eq!(removed, 2);
        assert!(store.get("post_like_1").is_some());
        assert!(store.get("post_like_2").is_none());
        assert!(store.get("post_like_3").is_none());
        assert!(store.get("theme_config").is_some());
    }
}
