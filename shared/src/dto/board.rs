//! # Community Board DTOs
//!
//! Post and comment snapshots as the backend returns them, plus the
//! like/bookmark toggle responses.
//!
//! A fetched [`Post`] or [`Comment`] is a point-in-time snapshot: the client
//! treats it as immutable until the next fetch, overlaying locally cached
//! interaction flags on top of it at render time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A post as last fetched from the backend.
///
/// `is_liked` / `is_bookmarked` reflect the server's view at fetch time for
/// the authenticated user; `like_count` is the authoritative counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    /// Board category slug (e.g. "free", "indicators")
    pub board: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub like_count: i64,
    pub comment_count: i64,
    pub is_liked: bool,
    pub is_bookmarked: bool,
    pub created_at: DateTime<Utc>,
}

/// A comment as last fetched from the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub content: String,
    pub author: String,
    pub like_count: i64,
    pub is_liked: bool,
    pub is_bookmarked: bool,
    pub created_at: DateTime<Utc>,
}

/// Response body for `GET /api/posts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostListResponse {
    pub posts: Vec<Post>,
}

/// Response body for `GET /api/post/{id}` (detail view with comments).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetailResponse {
    pub post: Post,
    pub comments: Vec<Comment>,
}

/// Response body for a successful like toggle.
///
/// The server returns its authoritative flag and counter; the client writes
/// the flag into its interaction cache and takes the count as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeToggleResponse {
    pub is_liked: bool,
    pub like_count: i64,
}

/// Response body for a successful bookmark toggle.
///
/// Bookmarks carry no public counter, only the flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkToggleResponse {
    pub is_bookmarked: bool,
}

/// Error body returned by the backend on non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
