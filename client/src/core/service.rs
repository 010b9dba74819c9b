//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use async_trait::async_trait;
use shared::dto::board::{
    BookmarkToggleResponse, LikeToggleResponse, Post, PostDetailResponse,
};
use shared::dto::exchange::ExchangeRateResponse;

/// Trait for backend API operations.
///
/// Async tasks depend on this trait rather than the concrete
/// [`crate::services::api::ApiClient`], so tests can script responses
/// without a network.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Fetch the posts of one board
    async fn get_posts(&self, board: &str) -> Result<Vec<Post>, String>;

    /// Fetch the "all boards" aggregate list
    async fn get_all_posts(&self) -> Result<Vec<Post>, String>;

    /// Fetch a post's detail view, including its comments
    async fn get_post(&self, post_id: i64) -> Result<PostDetailResponse, String>;

    /// Toggle the authenticated user's like on a post
    async fn toggle_post_like(&self, post_id: i64, token: &str)
        -> Result<LikeToggleResponse, String>;

    /// Toggle the authenticated user's bookmark on a post
    async fn toggle_post_bookmark(
        &self,
        post_id: i64,
        token: &str,
    ) -> Result<BookmarkToggleResponse, String>;

    /// Toggle the authenticated user's like on a comment
    async fn toggle_comment_like(
        &self,
        post_id: i64,
        comment_id: i64,
        token: &str,
    ) -> Result<LikeToggleResponse, String>;

    /// Toggle the authenticated user's bookmark on a comment
    async fn toggle_comment_bookmark(
        &self,
        post_id: i64,
        comment_id: i64,
        token: &str,
    ) -> Result<BookmarkToggleResponse, String>;

    /// Fetch the per-currency exchange-rate table
    async fn get_exchange_rates(&self) -> Result<ExchangeRateResponse, String>;
}

#[cfg(test)]
pub(crate) mod mock {
    //! Scripted [`ApiService`] implementation for task and handler tests.

    use super::*;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock API with canned responses and call counting.
    ///
    /// Every endpoint defaults to an error so tests only script what they
    /// exercise.
    #[derive(Default)]
    pub struct MockApi {
        pub posts: Mutex<Option<Result<Vec<Post>, String>>>,
        pub post_detail: Mutex<Option<Result<PostDetailResponse, String>>>,
        pub like_response: Mutex<Option<Result<LikeToggleResponse, String>>>,
        pub bookmark_response: Mutex<Option<Result<BookmarkToggleResponse, String>>>,
        pub rates: Mutex<Option<Result<ExchangeRateResponse, String>>>,
        pub toggle_calls: AtomicUsize,
    }

    fn take<T: Clone>(slot: &Mutex<Option<Result<T, String>>>) -> Result<T, String> {
        slot.lock()
            .clone()
            .unwrap_or_else(|| Err("mock: no response scripted".to_string()))
    }

    #[async_trait]
    impl ApiService for MockApi {
        async fn get_posts(&self, _board: &str) -> Result<Vec<Post>, String> {
            take(&self.posts)
        }

        async fn get_all_posts(&self) -> Result<Vec<Post>, String> {
            take(&self.posts)
        }

        async fn get_post(&self, _post_id: i64) -> Result<PostDetailResponse, String> {
            take(&self.post_detail)
        }

        async fn toggle_post_like(
            &self,
            _post_id: i64,
            _token: &str,
        ) -> Result<LikeToggleResponse, String> {
            self.toggle_calls.fetch_add(1, Ordering::SeqCst);
            take(&self.like_response)
        }

        async fn toggle_post_bookmark(
            &self,
            _post_id: i64,
            _token: &str,
        ) -> Result<BookmarkToggleResponse, String> {
            self.toggle_calls.fetch_add(1, Ordering::SeqCst);
            take(&self.bookmark_response)
        }

        async fn toggle_comment_like(
            &self,
            _post_id: i64,
            _comment_id: i64,
            _token: &str,
        ) -> Result<LikeToggleResponse, String> {
            self.toggle_calls.fetch_add(1, Ordering::SeqCst);
            take(&self.like_response)
        }

        async fn toggle_comment_bookmark(
            &self,
            _post_id: i64,
            _comment_id: i64,
            _token: &str,
        ) -> Result<BookmarkToggleResponse, String> {
            self.toggle_calls.fetch_add(1, Ordering::SeqCst);
            take(&self.bookmark_response)
        }

        async fn get_exchange_rates(&self) -> Result<ExchangeRateResponse, String> {
            take(&self.rates)
        }
    }
}
