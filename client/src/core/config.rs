//! Client configuration from environment variables

use std::path::PathBuf;
use std::time::Duration;

/// Default backend base URL (local development server)
const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:4000";

/// Default request timeout; long enough for a slow mobile link, short enough
/// that a dead backend never freezes a screen.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Client core configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend API base URL
    pub api_base_url: String,
    /// Client-side timeout applied to every request
    pub request_timeout: Duration,
    /// Path of the JSON file backing the interaction cache; `None` keeps the
    /// cache in memory only (tests, ephemeral sessions)
    pub cache_file: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            cache_file: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// - `ECONBOARD_API_URL` - backend base URL
    /// - `ECONBOARD_HTTP_TIMEOUT_SECS` - request timeout in seconds
    /// - `ECONBOARD_CACHE_FILE` - interaction cache file path
    pub fn from_env() -> Self {
        let api_base_url = std::env::var("ECONBOARD_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        let request_timeout = std::env::var("ECONBOARD_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        let cache_file = std::env::var("ECONBOARD_CACHE_FILE").ok().map(PathBuf::from);

        Self {
            api_base_url,
            request_timeout,
            cache_file,
        }
    }
}
