//! # Core Abstractions
//!
//! Foundational types used throughout the client core:
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`config`]**: Environment-derived client configuration
//! - **[`service`]**: Service traits for dependency injection (`ApiService`)
//!
//! ## Dependency Injection
//!
//! Async tasks call the backend through the [`service::ApiService`] trait,
//! never the concrete client, so tests substitute a canned implementation:
//!
//! ```rust,ignore
//! // In production: the real HTTP client
//! let api: Arc<dyn ApiService> = Arc::new(ApiClient::new());
//!
//! // In tests: a mock with scripted responses
//! let api: Arc<dyn ApiService> = Arc::new(MockApi::default());
//! ```

pub mod config;
pub mod error;
pub mod service;

pub use config::ClientConfig;
pub use error::{AppError, Result};
pub use service::ApiService;
