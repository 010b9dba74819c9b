//! # Async Tasks
//!
//! Async task spawning for board data, interaction toggles, and exchange
//! rates.
//!
//! Every task follows the same shape, taken to heart from the fetch paths:
//! grab what it needs under a brief write lock (API handle, token, pileup
//! guard), release the lock before any `await`, and report the outcome back
//! to the main thread over the event channel.

pub mod board;
pub mod exchange;
