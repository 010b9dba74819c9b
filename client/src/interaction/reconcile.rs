//! # Interaction Overlay Reconciler
//!
//! Pure merge of a server-fetched snapshot with valid cache records, and the
//! write path applied after a successful toggle.
//!
//! Every render path - board list, "all boards" aggregate, detail view - goes
//! through [`reconcile`], so a like toggled in one place is visible from all
//! of them before their next fetch.

use crate::interaction::cache::{EntityKind, FlagKey, FlagKind, InteractionCache};
use shared::dto::board::{BookmarkToggleResponse, Comment, LikeToggleResponse, Post};

/// Interaction state actually rendered for an entity.
///
/// Flags may come from the cache overlay; the count always comes from the
/// snapshot (or, on the toggle path, the toggle response). The cache never
/// stores counts, which keeps a stale boolean from dragging the counter
/// along with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconciledFlags {
    pub is_liked: bool,
    pub is_bookmarked: bool,
    pub like_count: i64,
}

/// Server snapshot fields the reconciler needs from an entity.
pub trait FlagSnapshot {
    fn entity_id(&self) -> i64;
    fn is_liked(&self) -> bool;
    fn is_bookmarked(&self) -> bool;
    fn like_count(&self) -> i64;
}

impl FlagSnapshot for Post {
    fn entity_id(&self) -> i64 {
        self.id
    }
    fn is_liked(&self) -> bool {
        self.is_liked
    }
    fn is_bookmarked(&self) -> bool {
        self.is_bookmarked
    }
    fn like_count(&self) -> i64 {
        self.like_count
    }
}

impl FlagSnapshot for Comment {
    fn entity_id(&self) -> i64 {
        self.id
    }
    fn is_liked(&self) -> bool {
        self.is_liked
    }
    fn is_bookmarked(&self) -> bool {
        self.is_bookmarked
    }
    fn like_count(&self) -> i64 {
        self.like_count
    }
}

/// Merge a fetched snapshot with the cache overlay.
///
/// For each flag, a valid (unexpired) cache record overrides the snapshot
/// boolean; an absent, expired, or unreadable record leaves the snapshot
/// untouched. The like count is copied from the snapshot unconditionally.
pub fn reconcile<S: FlagSnapshot>(
    kind: EntityKind,
    snapshot: &S,
    cache: &InteractionCache,
) -> ReconciledFlags {
    reconcile_at(kind, snapshot, cache, chrono::Utc::now().timestamp_millis())
}

pub(crate) fn reconcile_at<S: FlagSnapshot>(
    kind: EntityKind,
    snapshot: &S,
    cache: &InteractionCache,
    now_ms: i64,
) -> ReconciledFlags {
    let id = snapshot.entity_id();

    let is_liked = cache
        .get_at(FlagKey::new(kind, id, FlagKind::Like), now_ms)
        .map(|record| record.value)
        .unwrap_or_else(|| snapshot.is_liked());

    let is_bookmarked = cache
        .get_at(FlagKey::new(kind, id, FlagKind::Bookmark), now_ms)
        .map(|record| record.value)
        .unwrap_or_else(|| snapshot.is_bookmarked());

    ReconciledFlags {
        is_liked,
        is_bookmarked,
        like_count: snapshot.like_count(),
    }
}

/// Write path after a successful like toggle: mirror the server's flag into
/// the cache. The count is deliberately not cached.
pub fn apply_like_response(
    cache: &InteractionCache,
    kind: EntityKind,
    entity_id: i64,
    response: &LikeToggleResponse,
) {
    cache.set(FlagKey::new(kind, entity_id, FlagKind::Like), response.is_liked);
}

/// Write path after a successful bookmark toggle.
pub fn apply_bookmark_response(
    cache: &InteractionCache,
    kind: EntityKind,
    entity_id: i64,
    response: &BookmarkToggleResponse,
) {
    cache.set(
        FlagKey::new(kind, entity_id, FlagKind::Bookmark),
        response.is_bookmarked,
    );
}
