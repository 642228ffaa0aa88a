//! Lifecycle events: types and broadcast bus.
//!
//! This module groups the event **data model** and the **bus** used to
//! publish/subscribe to controller lifecycle events.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] event classification and payload metadata
//! - [`Bus`] thin wrapper over `tokio::sync::broadcast`
//!
//! ## Quick reference
//! - **Publishers**: `Controller` (start, reject, reset), the run task (outcome),
//!   `SubscriberSet` workers (overflow/panic).
//! - **Consumers**: the subscriber listener (fans out to `SubscriberSet`) and any
//!   receiver obtained through `Controller::subscribe`.

mod bus;
mod event;

pub use bus::Bus;
pub use event::{Event, EventKind};
