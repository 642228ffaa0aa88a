//! # Logging subscriber for debugging and demos.
//!
//! [`LogWriter`] renders lifecycle events through `tracing`, one line per event.
//!
//! ## Output format
//! ```text
//! INFO  [starting] algorithm=merge size=50
//! INFO  [completed] algorithm=merge elapsed_ms=1250
//! INFO  [cancelled] algorithm=bogo elapsed_ms=310
//! WARN  [interrupted] algorithm=quick reason="index out of range"
//! DEBUG [rejected] algorithm=heap
//! DEBUG [reset] size=50
//! ```
//!
//! ## Example
//! ```no_run
//! # use std::sync::Arc;
//! # use sortvisor::{Config, ControllerBuilder, LogWriter};
//! # async fn demo() {
//! let controller = ControllerBuilder::new(Config::default())
//!     .with_subscribers(vec![Arc::new(LogWriter)])
//!     .build();
//! # }
//! ```

use async_trait::async_trait;

use crate::events::{Event, EventKind};

use super::Subscribe;

/// Logging subscriber backed by `tracing`.
///
/// Enabled via the `logging` feature. Install a `tracing` subscriber
/// (e.g. `tracing-subscriber`) in the binary to see the output.
pub struct LogWriter;

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, e: &Event) {
        let algorithm = e.algorithm.map(|a| a.key()).unwrap_or("-");
        match e.kind {
            EventKind::RunStarting => {
                tracing::info!(algorithm, size = ?e.size, "[starting]");
            }
            EventKind::RunCompleted => {
                tracing::info!(algorithm, elapsed_ms = ?e.elapsed_ms, "[completed]");
            }
            EventKind::RunCancelled => {
                tracing::info!(algorithm, elapsed_ms = ?e.elapsed_ms, "[cancelled]");
            }
            EventKind::RunInterrupted => {
                tracing::warn!(algorithm, reason = ?e.reason, "[interrupted]");
            }
            EventKind::StartRejected => {
                tracing::debug!(algorithm, "[rejected]");
            }
            EventKind::ArrayReset => {
                tracing::debug!(size = ?e.size, "[reset]");
            }
            EventKind::SubscriberPanicked => {
                tracing::warn!(subscriber = ?e.subscriber, reason = ?e.reason, "[subscriber-panicked]");
            }
            EventKind::SubscriberOverflow => {
                tracing::warn!(subscriber = ?e.subscriber, reason = ?e.reason, "[subscriber-overflow]");
            }
        }
    }

    fn name(&self) -> &'static str {
        "log-writer"
    }
}
