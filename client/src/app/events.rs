//! # Application Events
//!
//! Event types for async task communication between background tasks and the
//! main thread.

use crate::convert::RateTable;
use shared::dto::board::{BookmarkToggleResponse, LikeToggleResponse, Post, PostDetailResponse};

/// Async task results sent to the main thread.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// One board's post list fetched
    PostsFetched {
        board: String,
        result: Result<Vec<Post>, String>,
    },
    /// "All boards" aggregate list fetched
    AllPostsFetched(Result<Vec<Post>, String>),
    /// Post detail (with comments) fetched
    PostDetailFetched(Result<PostDetailResponse, String>),
    /// Post like toggle completed
    PostLikeToggled {
        post_id: i64,
        result: Result<LikeToggleResponse, String>,
    },
    /// Post bookmark toggle completed
    PostBookmarkToggled {
        post_id: i64,
        result: Result<BookmarkToggleResponse, String>,
    },
    /// Comment like toggle completed
    CommentLikeToggled {
        comment_id: i64,
        result: Result<LikeToggleResponse, String>,
    },
    /// Comment bookmark toggle completed
    CommentBookmarkToggled {
        comment_id: i64,
        result: Result<BookmarkToggleResponse, String>,
    },
    /// Exchange-rate table refreshed (live or fallback)
    RatesUpdated(RateTable),
}
