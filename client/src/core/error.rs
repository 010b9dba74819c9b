//! # Common Error Types
//!
//! Consolidated error handling for the client core.
//!
//! Endpoint functions return `Result<T, String>` with user-facing messages
//! (the UI shows them as transient notifications); [`AppError`] wraps those
//! and the remaining failure classes for callers that need a typed error.
//!
//! Note the two places errors deliberately do NOT appear:
//! - The reconciler never fails: absent, expired, and corrupt cache records
//!   all degrade to the fetched snapshot.
//! - The conversion engine never fails: unparsable input is `None`, which
//!   clears the dependent field rather than raising anything.

use thiserror::Error;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend API communication error.
    ///
    /// Network failures, non-2xx statuses, and malformed response bodies.
    #[error("API error: {0}")]
    Api(String),

    /// Device storage error surfaced by a platform backend.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Application state error (e.g. an operation requiring auth without a
    /// token).
    #[error("State error: {0}")]
    State(String),

    /// Input validation error.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Api(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Api(msg.to_string())
    }
}
