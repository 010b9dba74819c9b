//! # EconBoard Client Core - Library Root
//!
//! The state-consistency core of the EconBoard mobile client: community
//! board interaction state and the bidirectional currency calculator,
//! factored out of the screens into UI-independent, unit-testable modules.
//!
//! ## What lives here
//!
//! Two subsystems share one theme - presenting responsive state without
//! waiting on, or fully trusting, a single source of truth:
//!
//! - **Interaction overlay**: per-post/per-comment liked/bookmarked flags
//!   are mirrored into a local cache after each successful toggle and merged
//!   over fetched snapshots at render time, so a toggle survives navigating
//!   between list and detail before the next authoritative fetch.
//! - **Currency conversion**: a two-field calculator where the last-edited
//!   field is authoritative and the other is derived through the effective
//!   rate (live quote or user override), with per-currency unit scaling and
//!   anchor-preserving swap semantics.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              client (this crate)                       │
//! ├────────────────────────────────────────────────────────┤
//! │  app          - orchestrator, state, events, tasks     │
//! │  interaction  - flag cache + overlay reconciler        │
//! │  convert      - rate resolver + conversion engine      │
//! │  services     - backend HTTP client (reqwest)          │
//! │  storage      - device key-value store abstraction     │
//! │  utils        - numeric parsing/formatting             │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP/JSON (shared DTO crate)
//!          ▼
//! ┌─────────────────┐
//! │  REST backend   │   posts, comments, toggles,
//! │  (external)     │   exchange rates
//! └─────────────────┘
//! ```
//!
//! ## Concurrency model
//!
//! Single-threaded cooperative UI loop over `Arc<RwLock<AppState>>`. All
//! network calls run as Tokio tasks and report back over an async channel;
//! locks are held briefly and never across an `await`. The reconciler and
//! the conversion engine are pure synchronous functions over resident state.
//!
//! ## Failure philosophy
//!
//! Nothing in this core throws across the reconciliation or conversion
//! boundary. Fetch failures fall back to the last known state (or the static
//! rate table), toggle failures leave cache and views untouched, malformed
//! numeric input clears the dependent field, and corrupt cache records read
//! as absent.

pub mod app;
pub mod convert;
pub mod core;
pub mod interaction;
pub mod logging;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{App, AppEvent, AppState};
pub use crate::core::{AppError, Result};
