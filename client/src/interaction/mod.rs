//! # Interaction State Overlay
//!
//! Client-side cache and reconciliation for per-post/per-comment
//! liked/bookmarked flags.
//!
//! The backend is the source of truth for interaction state, but list and
//! detail screens fetch at different times. Without a local overlay, a like
//! toggled on the detail screen would visually revert when the user navigates
//! back to a list that was fetched earlier. The overlay closes that gap:
//!
//! ```text
//! toggle succeeds ──> cache.set(flag, server truth)      (write path)
//!
//! render entity  ──> reconcile(snapshot, cache)          (read path)
//!                      flag:  cache record if unexpired, else snapshot
//!                      count: always snapshot / toggle response
//! ```
//!
//! ## Module Overview
//!
//! - **[`cache`]**: typed `(entity, id, flag)` key-value records with a 24 h
//!   validity window, persisted through [`crate::storage::KvStore`]
//! - **[`reconcile`]**: pure merge of a fetched snapshot with valid cache
//!   records, plus the post-toggle write path
//!
//! Counts are deliberately never cached: a stale boolean renders one wrong
//! heart icon, a stale counter drifts arbitrarily far from server truth.

pub mod cache;
pub mod reconcile;

pub use cache::{EntityKind, FlagKey, FlagKind, InteractionCache, InteractionFlagRecord};
pub use reconcile::{
    apply_bookmark_response, apply_like_response, reconcile, FlagSnapshot, ReconciledFlags,
};
