//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contract between the EconBoard client and the
//! REST backend. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::board`]**: Community board DTOs (posts, comments, toggle responses)
//!   - **[`dto::exchange`]**: Exchange-rate DTOs for the currency calculator
//!
//! ## Wire Format
//!
//! The backend speaks **camelCase** JSON (`isLiked`, `likeCount`,
//! `rateKrwPerUnit`), so every DTO carries `#[serde(rename_all = "camelCase")]`.
//! Optional fields are omitted from JSON when `None`.
//!
//! ## Usage in the client
//!
//! ```rust
//! use shared::dto::board::LikeToggleResponse;
//!
//! let body = r#"{"isLiked": true, "likeCount": 11}"#;
//! let response: LikeToggleResponse = serde_json::from_str(body).unwrap();
//! assert!(response.is_liked);
//! assert_eq!(response.like_count, 11);
//! ```

pub mod dto;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
