//! # Board Endpoints
//!
//! Handles board queries (post lists, detail) and interaction toggles.

use super::client::ApiClient;
use shared::dto::board::{
    BookmarkToggleResponse, ErrorResponse, LikeToggleResponse, Post, PostDetailResponse,
    PostListResponse,
};

/// Get the posts of one board.
#[tracing::instrument(skip(client), fields(board = %board))]
pub async fn get_posts(client: &ApiClient, board: &str) -> Result<Vec<Post>, String> {
    let start = std::time::Instant::now();
    let url = format!("{}/api/posts?board={}", client.base_url(), board);

    tracing::debug!("Fetching board posts");

    let response = client.client.get(&url).send().await.map_err(|e| {
        tracing::error!(error = %e, "Post list network error");
        format!("Network error: {}", e)
    })?;

    let status = response.status();
    let duration = start.elapsed();

    if status.is_success() {
        let result = response.json::<PostListResponse>().await.map_err(|e| {
            tracing::error!(error = %e, "Post list parse error");
            format!("Failed to parse response: {}", e)
        });

        if let Ok(ref list) = result {
            tracing::debug!(
                duration_ms = duration.as_millis(),
                post_count = list.posts.len(),
                "Posts fetched successfully"
            );
        }
        result.map(|list| list.posts)
    } else {
        tracing::warn!(
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "Post list fetch failed"
        );
        Err(format!("Failed to fetch posts: {}", status))
    }
}

/// Get the "all boards" aggregate list.
pub async fn get_all_posts(client: &ApiClient) -> Result<Vec<Post>, String> {
    let url = format!("{}/api/posts", client.base_url());

    let response = client
        .client
        .get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        response
            .json::<PostListResponse>()
            .await
            .map(|list| list.posts)
            .map_err(|e| format!("Failed to parse response: {}", e))
    } else {
        Err(format!("Failed to fetch posts: {}", response.status()))
    }
}

/// Get a post's detail view, including its comments.
#[tracing::instrument(skip(client), fields(post_id = post_id))]
pub async fn get_post(client: &ApiClient, post_id: i64) -> Result<PostDetailResponse, String> {
    let url = format!("{}/api/post/{}", client.base_url(), post_id);

    let response = client.client.get(&url).send().await.map_err(|e| {
        tracing::error!(error = %e, "Post detail network error");
        format!("Network error: {}", e)
    })?;

    let status = response.status();
    if status.is_success() {
        response
            .json::<PostDetailResponse>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    } else {
        tracing::warn!(status = status.as_u16(), "Post detail fetch failed");
        Err(format!("Failed to fetch post: {}", status))
    }
}

/// Toggle the authenticated user's like on a post.
///
/// On success the backend returns its authoritative `{isLiked, likeCount}`;
/// on failure nothing is written anywhere.
#[tracing::instrument(skip(client, token), fields(post_id = post_id))]
pub async fn toggle_post_like(
    client: &ApiClient,
    post_id: i64,
    token: &str,
) -> Result<LikeToggleResponse, String> {
    let url = format!("{}/api/post/{}/like", client.base_url(), post_id);
    post_toggle(client, &url, token).await
}

/// Toggle the authenticated user's bookmark on a post.
#[tracing::instrument(skip(client, token), fields(post_id = post_id))]
pub async fn toggle_post_bookmark(
    client: &ApiClient,
    post_id: i64,
    token: &str,
) -> Result<BookmarkToggleResponse, String> {
    let url = format!("{}/api/post/{}/bookmark", client.base_url(), post_id);
    post_toggle(client, &url, token).await
}

/// Toggle the authenticated user's like on a comment.
#[tracing::instrument(skip(client, token), fields(post_id = post_id, comment_id = comment_id))]
pub async fn toggle_comment_like(
    client: &ApiClient,
    post_id: i64,
    comment_id: i64,
    token: &str,
) -> Result<LikeToggleResponse, String> {
    let url = format!(
        "{}/api/post/{}/comment/{}/like",
        client.base_url(),
        post_id,
        comment_id
    );
    post_toggle(client, &url, token).await
}

/// Toggle the authenticated user's bookmark on a comment.
#[tracing::instrument(skip(client, token), fields(post_id = post_id, comment_id = comment_id))]
pub async fn toggle_comment_bookmark(
    client: &ApiClient,
    post_id: i64,
    comment_id: i64,
    token: &str,
) -> Result<BookmarkToggleResponse, String> {
    let url = format!(
        "{}/api/post/{}/comment/{}/bookmark",
        client.base_url(),
        post_id,
        comment_id
    );
    post_toggle(client, &url, token).await
}

/// Shared POST-toggle plumbing: bearer auth, success body decode, error body
/// decode on non-2xx.
async fn post_toggle<T: serde::de::DeserializeOwned>(
    client: &ApiClient,
    url: &str,
    token: &str,
) -> Result<T, String> {
    let start = std::time::Instant::now();

    let response = client
        .client
        .post(url)
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Toggle network error");
            format!("Network error: {}", e)
        })?;

    let status = response.status();
    let duration = start.elapsed();

    if status.is_success() {
        let result = response.json::<T>().await.map_err(|e| {
            tracing::error!(error = %e, "Toggle response parse error");
            format!("Failed to parse response: {}", e)
        });

        if result.is_ok() {
            tracing::debug!(duration_ms = duration.as_millis(), "Toggle succeeded");
        }
        result
    } else {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|e| format!("Failed to parse error: {}", e))?;

        tracing::warn!(
            status = status.as_u16(),
            error = %error.error,
            duration_ms = duration.as_millis(),
            "Toggle failed"
        );
        Err(error.error)
    }
}
