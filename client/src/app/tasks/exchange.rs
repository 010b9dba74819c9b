//! # Exchange Rate Tasks
//!
//! Async task for refreshing the calculator's quote table.
//!
//! The table is replaced wholesale per fetch. Any failure - network, HTTP,
//! parse, or no API configured at all - substitutes the static fallback
//! table, so the calculator always has a rate to work with.

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::convert::RateTable;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::spawn;
use tracing::warn;

/// Fetch the exchange-rate table from the backend.
///
/// Internal task function - spawns an async fetch and sends the resulting
/// table (live or fallback) via the event channel.
pub(crate) fn fetch_rates(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    // Check the pileup guard and grab the API handle with minimal lock duration
    let api = {
        let mut state = state.write();
        if state.calculator.fetching_rates {
            return;
        }
        state.calculator.fetching_rates = true;
        state.api.clone()
    }; // Lock released here

    let Some(api) = api else {
        // No backend configured; the fallback table keeps the calculator alive
        spawn({
            let event_tx = event_tx.clone();
            async move {
                let _ = event_tx.send(AppEvent::RatesUpdated(RateTable::fallback())).await;
            }
        });
        return;
    };

    spawn(async move {
        let table = match api.get_exchange_rates().await {
            Ok(response) => {
                let table = RateTable::from_response(&response);
                if table.is_empty() {
                    warn!("Rate response contained no usable quotes, using fallback table");
                    RateTable::fallback()
                } else {
                    table
                }
            }
            Err(e) => {
                warn!(error = %e, "Rate fetch failed, using fallback table");
                RateTable::fallback()
            }
        };

        let _ = event_tx.send(AppEvent::RatesUpdated(table)).await;
    });
}
