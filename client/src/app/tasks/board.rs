//! # Board Tasks
//!
//! Async tasks for fetching board data and submitting like/bookmark toggles.
//!
//! Toggle ordering guarantee: the interaction cache is written only after the
//! network call resolves successfully, and the write happens regardless of
//! whether any view is still mounted - the cache mirrors server truth, it is
//! not view-scoped state. A failed toggle writes nothing anywhere.

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::interaction::cache::{EntityKind, FlagKey, FlagKind};
use crate::interaction::reconcile;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::spawn;
use tracing::debug;

/// Fetch one board's post list.
///
/// Internal task function - spawns an async fetch and sends the result via
/// the event channel.
pub(crate) fn fetch_posts(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    board: String,
) {
    // Check the pileup guard and grab the API handle with minimal lock duration
    let api = {
        let mut state = state.write();
        if state.board.loading_posts {
            return;
        }
        state.board.loading_posts = true;
        state.api.clone()
    }; // Lock released here

    let Some(api) = api else {
        state.write().board.loading_posts = false;
        return;
    };

    spawn(async move {
        let result = api.get_posts(&board).await;
        let _ = event_tx.send(AppEvent::PostsFetched { board, result }).await;
    });
}

/// Fetch the "all boards" aggregate list.
pub(crate) fn fetch_all_posts(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api = {
        let state = state.read();
        state.api.clone()
    };

    if let Some(api) = api {
        spawn(async move {
            let result = api.get_all_posts().await;
            let _ = event_tx.send(AppEvent::AllPostsFetched(result)).await;
        });
    }
}

/// Fetch a post's detail view.
pub(crate) fn fetch_post_detail(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    post_id: i64,
) {
    let api = {
        let state = state.read();
        state.api.clone()
    };

    if let Some(api) = api {
        spawn(async move {
            let result = api.get_post(post_id).await;
            let _ = event_tx.send(AppEvent::PostDetailFetched(result)).await;
        });
    }
}

/// Toggle a like on a post.
pub(crate) fn toggle_post_like(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    post_id: i64,
) {
    let key = FlagKey::new(EntityKind::Post, post_id, FlagKind::Like);
    let Some((api, token, cache)) = begin_toggle(&state, key) else {
        return;
    };

    let state = Arc::clone(&state);
    spawn(async move {
        let result = api.toggle_post_like(post_id, &token).await;

        {
            let mut state = state.write();
            state.board.pending_toggles.remove(&key);
            // Confirm-then-write: only a server success reaches the cache
            if let Ok(ref response) = result {
                reconcile::apply_like_response(&cache, EntityKind::Post, post_id, response);
            }
        } // Lock released here

        let _ = event_tx
            .send(AppEvent::PostLikeToggled { post_id, result })
            .await;
    });
}

/// Toggle a bookmark on a post.
pub(crate) fn toggle_post_bookmark(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    post_id: i64,
) {
    let key = FlagKey::new(EntityKind::Post, post_id, FlagKind::Bookmark);
    let Some((api, token, cache)) = begin_toggle(&state, key) else {
        return;
    };

    let state = Arc::clone(&state);
    spawn(async move {
        let result = api.toggle_post_bookmark(post_id, &token).await;

        {
            let mut state = state.write();
            state.board.pending_toggles.remove(&key);
            if let Ok(ref response) = result {
                reconcile::apply_bookmark_response(&cache, EntityKind::Post, post_id, response);
            }
        }

        let _ = event_tx
            .send(AppEvent::PostBookmarkToggled { post_id, result })
            .await;
    });
}

/// Toggle a like on a comment.
pub(crate) fn toggle_comment_like(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    post_id: i64,
    comment_id: i64,
) {
    let key = FlagKey::new(EntityKind::Comment, comment_id, FlagKind::Like);
    let Some((api, token, cache)) = begin_toggle(&state, key) else {
        return;
    };

    let state = Arc::clone(&state);
    spawn(async move {
        let result = api.toggle_comment_like(post_id, comment_id, &token).await;

        {
            let mut state = state.write();
            state.board.pending_toggles.remove(&key);
            if let Ok(ref response) = result {
                reconcile::apply_like_response(&cache, EntityKind::Comment, comment_id, response);
            }
        }

        let _ = event_tx
            .send(AppEvent::CommentLikeToggled { comment_id, result })
            .await;
    });
}

/// Toggle a bookmark on a comment.
pub(crate) fn toggle_comment_bookmark(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    post_id: i64,
    comment_id: i64,
) {
    let key = FlagKey::new(EntityKind::Comment, comment_id, FlagKind::Bookmark);
    let Some((api, token, cache)) = begin_toggle(&state, key) else {
        return;
    };

    let state = Arc::clone(&state);
    spawn(async move {
        let result = api
            .toggle_comment_bookmark(post_id, comment_id, &token)
            .await;

        {
            let mut state = state.write();
            state.board.pending_toggles.remove(&key);
            if let Ok(ref response) = result {
                reconcile::apply_bookmark_response(
                    &cache,
                    EntityKind::Comment,
                    comment_id,
                    response,
                );
            }
        }

        let _ = event_tx
            .send(AppEvent::CommentBookmarkToggled { comment_id, result })
            .await;
    });
}

type ToggleContext = (
    Arc<dyn crate::core::service::ApiService>,
    String,
    crate::interaction::InteractionCache,
);

/// Common toggle preamble under one brief write lock: per-entity double-tap
/// guard, auth check, and handle extraction.
///
/// Returns `None` when the toggle must not start (already in flight, no API,
/// or not logged in).
fn begin_toggle(state: &Arc<RwLock<AppState>>, key: FlagKey) -> Option<ToggleContext> {
    let mut state = state.write();

    if state.board.pending_toggles.contains(&key) {
        debug!(?key, "Ignoring toggle while one is already in flight");
        return None;
    }

    let Some(api) = state.api.clone() else {
        return None;
    };
    let Some(token) = state.auth_token.clone() else {
        state.notify("warn", "Sign in to like or bookmark posts");
        return None;
    };

    state.board.pending_toggles.insert(key);
    Some((api, token, state.cache.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::service::mock::MockApi;
    use crate::interaction::InteractionCache;
    use crate::storage::MemoryKvStore;
    use shared::dto::board::LikeToggleResponse;

    fn test_state(api: Arc<MockApi>) -> Arc<RwLock<AppState>> {
        let cache = InteractionCache::new(Arc::new(MemoryKvStore::new()));
        let mut state = AppState::new(cache);
        state.api = Some(api);
        state.auth_token = Some("token".to_string());
        Arc::new(RwLock::new(state))
    }

    #[tokio::test]
    async fn successful_toggle_writes_cache_and_reports() {
        let api = Arc::new(MockApi::default());
        *api.like_response.lock() = Some(Ok(LikeToggleResponse {
            is_liked: true,
            like_count: 11,
        }));

        let state = test_state(api);
        let (tx, rx) = async_channel::unbounded();

        toggle_post_like(Arc::clone(&state), tx, 42);

        let event = rx.recv().await.unwrap();
        match event {
            AppEvent::PostLikeToggled { post_id, result } => {
                assert_eq!(post_id, 42);
                assert!(result.unwrap().is_liked);
            }
            other => panic!("unexpected event: {:?}", other),
        }

        let state = state.read();
        let record = state
            .cache
            .get(FlagKey::new(EntityKind::Post, 42, FlagKind::Like))
            .unwrap();
        assert!(record.value);
        assert!(state.board.pending_toggles.is_empty());
    }

    #[tokio::test]
    async fn failed_toggle_leaves_cache_untouched() {
        let api = Arc::new(MockApi::default());
        *api.like_response.lock() = Some(Err("Server unavailable".to_string()));

        let state = test_state(api);
        let (tx, rx) = async_channel::unbounded();

        toggle_post_like(Arc::clone(&state), tx, 42);

        let event = rx.recv().await.unwrap();
        match event {
            AppEvent::PostLikeToggled { result, .. } => assert!(result.is_err()),
            other => panic!("unexpected event: {:?}", other),
        }

        let state = state.read();
        assert!(state
            .cache
            .get(FlagKey::new(EntityKind::Post, 42, FlagKind::Like))
            .is_none());
        assert!(state.board.pending_toggles.is_empty());
    }

    #[tokio::test]
    async fn second_tap_is_ignored_while_first_is_in_flight() {
        let api = Arc::new(MockApi::default());
        *api.like_response.lock() = Some(Ok(LikeToggleResponse {
            is_liked: true,
            like_count: 11,
        }));

        let state = test_state(Arc::clone(&api));
        let key = FlagKey::new(EntityKind::Post, 42, FlagKind::Like);

        // Simulate an outstanding request for the same flag
        state.write().board.pending_toggles.insert(key);

        let (tx, rx) = async_channel::unbounded();
        toggle_post_like(Arc::clone(&state), tx, 42);

        assert!(rx.try_recv().is_err(), "guarded toggle must not spawn");
        assert_eq!(api.toggle_calls.load(std::sync::atomic::Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unauthenticated_toggle_does_not_start() {
        let api = Arc::new(MockApi::default());
        let state = test_state(Arc::clone(&api));
        state.write().auth_token = None;

        let (tx, rx) = async_channel::unbounded();
        toggle_post_like(Arc::clone(&state), tx, 42);

        assert!(rx.try_recv().is_err());
        let state = state.read();
        assert!(state.board.pending_toggles.is_empty());
        assert!(!state.pending_notifications.is_empty());
    }
}
