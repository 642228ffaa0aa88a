//! # Event subscribers.
//!
//! This module provides the [`Subscribe`] trait, the [`SubscriberSet`] fan-out
//! and the optional [`LogWriter`] for handling lifecycle events broadcast
//! through the [`Bus`](crate::events::Bus).
//!
//! ## Architecture
//! ```text
//! Controller ── publish(Event) ──► Bus ──► listener ──► SubscriberSet::emit
//!                                                          │
//!                                        ┌─────────────────┼──────────────┐
//!                                        ▼                 ▼              ▼
//!                                    LogWriter       StatusLine       Custom ...
//! ```

#[cfg(feature = "logging")]
mod log;
mod set;
mod subscribe;

#[cfg(feature = "logging")]
pub use log::LogWriter;
pub(crate) use set::panic_message;
pub use set::SubscriberSet;
pub use subscribe::Subscribe;
