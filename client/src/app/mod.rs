//! # Application Orchestrator
//!
//! The main [`App`] struct wires the pieces together: shared state behind a
//! lock, the event channel from async tasks, and the entry points screens
//! call on user actions.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (UI loop)                    │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - process_events() - drains async results           │   │
//! │  │  - refresh_*/toggle_* - user action entry points     │   │
//! │  │  - calculator edits - synchronous, no channel        │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  │  - held briefly, never across an await               │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Async Tasks (Tokio)                            │
//! │  - fetch_posts / fetch_post_detail                          │
//! │  - toggle_*_like / toggle_*_bookmark                        │
//! │  - fetch_rates                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Components
//!
//! - **[`AppState`]**: Thread-safe shared application state (see [`state`])
//! - **[`AppEvent`]**: Event enum for async task results (see [`events`])
//! - **[`handlers`]**: Synchronous action handlers (calculator)
//! - **[`tasks`]**: Async background tasks (board, exchange)
//! - **[`event_handler`]**: Applies task results back into state

pub mod event_handler;
pub mod events;
pub mod handlers;
pub mod state;
pub mod tasks;

pub use events::AppEvent;
pub use state::AppState;

use crate::convert::{AmountField, Currency};
use crate::core::config::ClientConfig;
use crate::interaction::InteractionCache;
use crate::services::api::ApiClient;
use crate::storage::{JsonFileStore, KvStore, MemoryKvStore};
use async_channel::{Receiver, Sender};
use parking_lot::RwLock;
use std::sync::Arc;

/// Main application orchestrator.
pub struct App {
    /// Shared application state
    pub state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    event_rx: Receiver<AppEvent>,
}

impl App {
    /// Create the app with configuration taken from the environment.
    pub fn new() -> Self {
        Self::with_config(&ClientConfig::from_env())
    }

    /// Create the app with an explicit configuration.
    ///
    /// Startup is also where the one-off maintenance pass runs: expired
    /// interaction records are evicted here, never from the render path.
    pub fn with_config(config: &ClientConfig) -> Self {
        let store: Arc<dyn KvStore> = match &config.cache_file {
            Some(path) => Arc::new(JsonFileStore::open(path)),
            None => Arc::new(MemoryKvStore::new()),
        };
        let cache = InteractionCache::new(store);
        cache.evict_expired();

        let mut state = AppState::new(cache);
        state.api = Some(Arc::new(ApiClient::with_config(config)));

        let (event_tx, event_rx) = async_channel::unbounded();

        Self {
            state: Arc::new(RwLock::new(state)),
            event_tx,
            event_rx,
        }
    }

    /// Store the bearer token after a successful login.
    pub fn set_auth_token(&self, token: Option<String>) {
        self.state.write().auth_token = token;
    }

    /// Drain pending async results into state. Call once per UI tick.
    pub fn process_events(&self) {
        while let Ok(event) = self.event_rx.try_recv() {
            event_handler::handle_event(&self.state, event);
        }
    }

    // ---- Board actions ----

    /// Refresh one board's post list.
    pub fn refresh_board(&self, board: &str) {
        tasks::board::fetch_posts(
            Arc::clone(&self.state),
            self.event_tx.clone(),
            board.to_string(),
        );
    }

    /// Refresh the "all boards" aggregate list.
    pub fn refresh_all_boards(&self) {
        tasks::board::fetch_all_posts(Arc::clone(&self.state), self.event_tx.clone());
    }

    /// Open (or refresh) a post's detail view.
    pub fn open_post(&self, post_id: i64) {
        tasks::board::fetch_post_detail(Arc::clone(&self.state), self.event_tx.clone(), post_id);
    }

    /// Toggle the like flag on a post.
    pub fn toggle_post_like(&self, post_id: i64) {
        tasks::board::toggle_post_like(Arc::clone(&self.state), self.event_tx.clone(), post_id);
    }

    /// Toggle the bookmark flag on a post.
    pub fn toggle_post_bookmark(&self, post_id: i64) {
        tasks::board::toggle_post_bookmark(Arc::clone(&self.state), self.event_tx.clone(), post_id);
    }

    /// Toggle the like flag on a comment.
    pub fn toggle_comment_like(&self, post_id: i64, comment_id: i64) {
        tasks::board::toggle_comment_like(
            Arc::clone(&self.state),
            self.event_tx.clone(),
            post_id,
            comment_id,
        );
    }

    /// Toggle the bookmark flag on a comment.
    pub fn toggle_comment_bookmark(&self, post_id: i64, comment_id: i64) {
        tasks::board::toggle_comment_bookmark(
            Arc::clone(&self.state),
            self.event_tx.clone(),
            post_id,
            comment_id,
        );
    }

    // ---- Calculator actions ----

    /// Refresh the exchange-rate table.
    pub fn refresh_rates(&self) {
        tasks::exchange::fetch_rates(Arc::clone(&self.state), self.event_tx.clone());
    }

    /// Keystroke in an amount field.
    pub fn on_amount_edited(&self, field: AmountField, text: &str) {
        handlers::calculator::on_amount_edited(&mut self.state.write().calculator, field, text);
    }

    /// Keystroke in the custom-rate field.
    pub fn on_custom_rate_edited(&self, text: &str) {
        handlers::calculator::on_custom_rate_edited(&mut self.state.write().calculator, text);
    }

    /// Enable or disable the custom-rate override.
    pub fn set_custom_rate_enabled(&self, enabled: bool) {
        handlers::calculator::set_custom_rate_enabled(&mut self.state.write().calculator, enabled);
    }

    /// Select a different foreign currency.
    pub fn set_currency(&self, currency: Currency) {
        handlers::calculator::set_currency(&mut self.state.write().calculator, currency);
    }

    /// Swap which currency occupies the first input slot.
    pub fn swap_slots(&self) {
        handlers::calculator::swap_slots(&mut self.state.write().calculator);
    }

    /// Clear both amount fields.
    pub fn clear_amounts(&self) {
        handlers::calculator::clear_amounts(&mut self.state.write().calculator);
    }

    /// Save the displayed conversion into the history list.
    pub fn save_conversion(&self) {
        handlers::calculator::save_conversion(&mut self.state.write().calculator);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
