//! # API Client
//!
//! Main HTTP client for backend API communication.

use crate::core::config::ClientConfig;
use crate::core::service::ApiService;
use reqwest::Client;
use shared::dto::board::{
    BookmarkToggleResponse, LikeToggleResponse, Post, PostDetailResponse,
};
use shared::dto::exchange::ExchangeRateResponse;

/// HTTP client for communicating with the backend API server.
///
/// This client handles all REST API calls and maintains a connection pool.
/// The fixed request timeout guarantees that a dead backend degrades into a
/// passive "couldn't refresh" notice instead of a frozen screen.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client configured from the environment.
    pub fn new() -> Self {
        Self::with_config(&ClientConfig::from_env())
    }

    /// Create a new API client with an explicit configuration.
    pub fn with_config(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.api_base_url.clone(),
        }
    }

    /// Base URL for API requests.
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

// Implement ApiService trait for ApiClient
#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn get_posts(&self, board: &str) -> Result<Vec<Post>, String> {
        crate::services::api::board::get_posts(self, board).await
    }

    async fn get_all_posts(&self) -> Result<Vec<Post>, String> {
        crate::services::api::board::get_all_posts(self).await
    }

    async fn get_post(&self, post_id: i64) -> Result<PostDetailResponse, String> {
        crate::services::api::board::get_post(self, post_id).await
    }

    async fn toggle_post_like(
        &self,
        post_id: i64,
        token: &str,
    ) -> Result<LikeToggleResponse, String> {
        crate::services::api::board::toggle_post_like(self, post_id, token).await
    }

    async fn toggle_post_bookmark(
        &self,
        post_id: i64,
        token: &str,
    ) -> Result<BookmarkToggleResponse, String> {
        crate::services::api::board::toggle_post_bookmark(self, post_id, token).await
    }

    async fn toggle_comment_like(
        &self,
        post_id: i64,
        comment_id: i64,
        token: &str,
    ) -> Result<LikeToggleResponse, String> {
        crate::services::api::board::toggle_comment_like(self, post_id, comment_id, token).await
    }

    async fn toggle_comment_bookmark(
        &self,
        post_id: i64,
        comment_id: i64,
        token: &str,
    ) -> Result<BookmarkToggleResponse, String> {
        crate::services::api::board::toggle_comment_bookmark(self, post_id, comment_id, token).await
    }

    async fn get_exchange_rates(&self) -> Result<ExchangeRateResponse, String> {
        crate::services::api::exchange::get_exchange_rates(self).await
    }
}
