//! # Services Module
//!
//! External service integrations for the client core.
//!
//! ```text
//! services/
//! └── api/    - Backend HTTP API client
//!               (board lists, post detail, like/bookmark toggles,
//!                exchange rates)
//! ```
//!
//! All network access in the client flows through [`api::ApiClient`], which
//! implements [`crate::core::service::ApiService`] so tasks stay mockable.

pub mod api;
