//! # Event Handler
//!
//! Applies async task results to application state.
//!
//! Fetched snapshots pass through the interaction reconciler on their way
//! into view state, so every list and the detail view observe the same cache
//! overlay. Toggle results update the in-memory views directly from the
//! server's response - no refetch round-trip - while failures leave views
//! exactly as they were.

use crate::app::events::AppEvent;
use crate::app::handlers::calculator;
use crate::app::state::{AppState, CommentView, PostDetailView, PostView};
use crate::interaction::{reconcile, EntityKind};
use parking_lot::RwLock;
use shared::dto::board::{
    BookmarkToggleResponse, LikeToggleResponse, Post, PostDetailResponse,
};
use std::sync::Arc;

/// Handle one async event result.
///
/// Acquires the write lock per event for minimal duration.
pub fn handle_event(state: &Arc<RwLock<AppState>>, event: AppEvent) {
    match event {
        AppEvent::PostsFetched { result, .. } => {
            let mut state = state.write();
            state.board.loading_posts = false;
            match result {
                Ok(posts) => {
                    let views = to_views(&posts, &state.cache);
                    state.board.posts = views;
                }
                Err(e) => {
                    // Keep the last known list; surface a passive notice
                    state.notify("error", format!("Couldn't refresh posts: {}", e));
                }
            }
        }
        AppEvent::AllPostsFetched(result) => {
            let mut state = state.write();
            match result {
                Ok(posts) => {
                    let views = to_views(&posts, &state.cache);
                    state.board.all_posts = views;
                }
                Err(e) => {
                    state.notify("error", format!("Couldn't refresh posts: {}", e));
                }
            }
        }
        AppEvent::PostDetailFetched(result) => {
            let mut state = state.write();
            match result {
                Ok(detail) => {
                    let view = to_detail_view(&detail, &state.cache);
                    state.board.detail = Some(view);
                }
                Err(e) => {
                    state.notify("error", format!("Couldn't load post: {}", e));
                }
            }
        }
        AppEvent::PostLikeToggled { post_id, result } => {
            let mut state = state.write();
            match result {
                Ok(response) => apply_post_like(&mut state, post_id, &response),
                Err(e) => state.notify("error", format!("Like failed: {}", e)),
            }
        }
        AppEvent::PostBookmarkToggled { post_id, result } => {
            let mut state = state.write();
            match result {
                Ok(response) => apply_post_bookmark(&mut state, post_id, &response),
                Err(e) => state.notify("error", format!("Bookmark failed: {}", e)),
            }
        }
        AppEvent::CommentLikeToggled { comment_id, result } => {
            let mut state = state.write();
            match result {
                Ok(response) => apply_comment_like(&mut state, comment_id, &response),
                Err(e) => state.notify("error", format!("Like failed: {}", e)),
            }
        }
        AppEvent::CommentBookmarkToggled { comment_id, result } => {
            let mut state = state.write();
            match result {
                Ok(response) => apply_comment_bookmark(&mut state, comment_id, &response),
                Err(e) => state.notify("error", format!("Bookmark failed: {}", e)),
            }
        }
        AppEvent::RatesUpdated(table) => {
            let mut state = state.write();
            calculator::refresh_rates(&mut state.calculator, table);
        }
    }
}

fn to_views(posts: &[Post], cache: &crate::interaction::InteractionCache) -> Vec<PostView> {
    posts
        .iter()
        .map(|post| PostView {
            flags: reconcile(EntityKind::Post, post, cache),
            post: post.clone(),
        })
        .collect()
}

fn to_detail_view(
    detail: &PostDetailResponse,
    cache: &crate::interaction::InteractionCache,
) -> PostDetailView {
    PostDetailView {
        post: PostView {
            flags: reconcile(EntityKind::Post, &detail.post, cache),
            post: detail.post.clone(),
        },
        comments: detail
            .comments
            .iter()
            .map(|comment| CommentView {
                flags: reconcile(EntityKind::Comment, comment, cache),
                comment: comment.clone(),
            })
            .collect(),
    }
}

/// Update every resident view of `post_id` from the server's like response.
///
/// Both the flag and the count come from the response itself; the snapshot
/// underneath stays as fetched.
fn apply_post_like(state: &mut AppState, post_id: i64, response: &LikeToggleResponse) {
    for view in post_views_mut(state, post_id) {
        view.flags.is_liked = response.is_liked;
        view.flags.like_count = response.like_count;
    }
}

fn apply_post_bookmark(state: &mut AppState, post_id: i64, response: &BookmarkToggleResponse) {
    for view in post_views_mut(state, post_id) {
        view.flags.is_bookmarked = response.is_bookmarked;
    }
}

fn apply_comment_like(state: &mut AppState, comment_id: i64, response: &LikeToggleResponse) {
    if let Some(detail) = state.board.detail.as_mut() {
        for view in detail
            .comments
            .iter_mut()
            .filter(|view| view.comment.id == comment_id)
        {
            view.flags.is_liked = response.is_liked;
            view.flags.like_count = response.like_count;
        }
    }
}

fn apply_comment_bookmark(
    state: &mut AppState,
    comment_id: i64,
    response: &BookmarkToggleResponse,
) {
    if let Some(detail) = state.board.detail.as_mut() {
        for view in detail
            .comments
            .iter_mut()
            .filter(|view| view.comment.id == comment_id)
        {
            view.flags.is_bookmarked = response.is_bookmarked;
        }
    }
}

/// All resident views of one post: board list, aggregate list, open detail.
fn post_views_mut<'a>(
    state: &'a mut AppState,
    post_id: i64,
) -> impl Iterator<Item = &'a mut PostView> {
    let board = &mut state.board;
    board
        .posts
        .iter_mut()
        .chain(board.all_posts.iter_mut())
        .filter(move |view| view.post.id == post_id)
        .chain(
            board
                .detail
                .iter_mut()
                .map(|detail| &mut detail.post)
                .filter(move |view| view.post.id == post_id),
        )
}
