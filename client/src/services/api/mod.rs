//! # Backend API Client Module
//!
//! HTTP client for communicating with the EconBoard REST backend.
//! Handles board data, interaction toggles, and exchange-rate queries.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs       - Module exports and documentation
//! ├── client.rs    - ApiClient struct and common functionality
//! ├── board.rs     - Board endpoints (posts, detail, like/bookmark toggles)
//! └── exchange.rs  - Exchange-rate endpoint
//! ```
//!
//! ## Error Handling
//!
//! Endpoint functions return `Result<T, String>` with user-friendly
//! messages: network failures map to `"Network error: ..."`, non-2xx
//! responses decode the backend's [`shared::dto::board::ErrorResponse`]
//! body. A failed toggle leaves both the interaction cache and the rendered
//! view untouched - the cache write happens only on a success response.

pub mod board;
pub mod client;
pub mod exchange;

pub use client::ApiClient;
