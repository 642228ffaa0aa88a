//! # Event subscriber trait.
//!
//! Provides [`Subscribe`], the extension point for plugging custom lifecycle
//! handlers (status lines, history panels, metrics) into the controller.
//!
//! Each subscriber gets:
//! - **Dedicated worker task** (runs independently)
//! - **Per-subscriber bounded queue** (capacity via [`Subscribe::queue_capacity`])
//! - **Panic isolation** (panics are reported as `EventKind::SubscriberPanicked`)
//!
//! ## Example
//! ```rust
//! use async_trait::async_trait;
//! use sortvisor::{Event, EventKind, Subscribe};
//!
//! struct StatusLine;
//!
//! #[async_trait]
//! impl Subscribe for StatusLine {
//!     async fn on_event(&self, ev: &Event) {
//!         if matches!(ev.kind, EventKind::RunCompleted) {
//!             // update the status label
//!         }
//!     }
//!
//!     fn name(&self) -> &'static str { "status-line" }
//! }
//! ```

use async_trait::async_trait;

use crate::events::Event;

/// Lifecycle event subscriber.
///
/// ### Implementation requirements
/// - Avoid blocking the executor; handle errors internally.
/// - Slow processing affects only this subscriber's queue.
#[async_trait]
pub trait Subscribe: Send + Sync + 'static {
    /// Processes a single event, in FIFO order per subscriber.
    async fn on_event(&self, event: &Event);

    /// Name used in overflow/panic events.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Preferred queue capacity (clamped to at least 1). Default: 256.
    fn queue_capacity(&self) -> usize {
        256
    }
}
