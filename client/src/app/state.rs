//! # Application State Types
//!
//! All state-related types for the client core: board views, calculator
//! state, and the global [`AppState`] the screens read from.
//!
//! Views (`PostView`, `CommentView`) pair the immutable server snapshot with
//! the reconciled interaction flags. Screens render the flags, never the raw
//! snapshot booleans, so every render path observes the cache overlay.

use crate::convert::{ConversionState, Currency, RateTable};
use crate::core::service::ApiService;
use crate::interaction::cache::FlagKey;
use crate::interaction::{InteractionCache, ReconciledFlags};
use chrono::{DateTime, Utc};
use shared::dto::board::{Comment, Post};
use std::collections::HashSet;
use std::sync::Arc;

/// Maximum saved conversions kept in the history list
pub const MAX_CONVERSION_HISTORY: usize = 20;

/// A post as rendered: server snapshot plus reconciled interaction flags.
#[derive(Debug, Clone)]
pub struct PostView {
    pub post: Post,
    pub flags: ReconciledFlags,
}

/// A comment as rendered.
#[derive(Debug, Clone)]
pub struct CommentView {
    pub comment: Comment,
    pub flags: ReconciledFlags,
}

/// Detail screen state: the post and its comments.
#[derive(Debug, Clone)]
pub struct PostDetailView {
    pub post: PostView,
    pub comments: Vec<CommentView>,
}

/// Community board state.
#[derive(Debug, Clone, Default)]
pub struct BoardState {
    /// Current board's posts
    pub posts: Vec<PostView>,
    /// "All boards" aggregate list
    pub all_posts: Vec<PostView>,
    /// Currently open post detail, if any
    pub detail: Option<PostDetailView>,
    /// Flag to prevent concurrent list fetches (prevents task pileup)
    pub loading_posts: bool,
    /// Toggles with an in-flight request; a second tap on the same flag is
    /// ignored until the first response lands
    pub pending_toggles: HashSet<FlagKey>,
}

/// One saved conversion in the utility-tools history list.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRecord {
    pub currency: Currency,
    pub krw_amount: f64,
    pub foreign_amount: f64,
    /// Effective rate at save time (live or override)
    pub rate: f64,
    pub saved_at: DateTime<Utc>,
}

/// Currency calculator state.
#[derive(Debug, Clone)]
pub struct CalculatorState {
    /// Two-field conversion input state
    pub conversion: ConversionState,
    /// Shared quote table, replaced wholesale per fetch
    pub rates: RateTable,
    /// Flag to prevent concurrent rate fetches
    pub fetching_rates: bool,
    /// Saved conversions, newest first
    pub history: Vec<ConversionRecord>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            conversion: ConversionState::default(),
            rates: RateTable::empty(),
            fetching_rates: false,
            history: Vec::new(),
        }
    }
}

/// Global application state.
pub struct AppState {
    /// Community board state
    pub board: BoardState,
    /// Currency calculator state
    pub calculator: CalculatorState,
    /// Bearer token (once logged in)
    pub auth_token: Option<String>,
    /// Backend API service (trait object for test injection)
    pub api: Option<Arc<dyn ApiService>>,
    /// Process-wide interaction flag cache
    pub cache: InteractionCache,
    /// Pending notifications to display (level, message)
    pub pending_notifications: Vec<(String, String)>,
}

impl AppState {
    pub fn new(cache: InteractionCache) -> Self {
        Self {
            board: BoardState::default(),
            calculator: CalculatorState::default(),
            auth_token: None,
            api: None,
            cache,
            pending_notifications: Vec::new(),
        }
    }

    /// Check if the user is authenticated (has a bearer token)
    pub fn is_authenticated(&self) -> bool {
        self.auth_token.is_some()
    }

    /// Queue a transient notification for the UI layer.
    pub fn notify(&mut self, level: &str, message: impl Into<String>) {
        self.pending_notifications
            .push((level.to_string(), message.into()));
    }
}
