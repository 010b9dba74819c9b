//! # Action Handlers
//!
//! Synchronous state-mutation entry points, organized by domain.
//!
//! Handlers never touch the network; anything that needs a request goes
//! through [`crate::app::tasks`] instead.

pub mod calculator;
