//! # Lifecycle events emitted by the controller.
//!
//! The [`EventKind`] enum classifies event types across three categories:
//! - **Run events**: a run starting and its terminal outcome
//! - **Control events**: rejected starts, array resets
//! - **Subscriber events**: overflow and panics inside subscribers
//!
//! The [`Event`] struct carries additional metadata such as timestamps, the
//! algorithm, elapsed time and reasons. Per-step instrumentation never goes
//! through here; it flows through [`Sink`](crate::Sink).
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases monotonically.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use sortvisor::{AlgorithmId, Event, EventKind};
//!
//! let ev = Event::new(EventKind::RunCompleted)
//!     .with_algorithm(AlgorithmId::Merge)
//!     .with_elapsed(Duration::from_millis(1250))
//!     .with_size(50);
//!
//! assert_eq!(ev.kind, EventKind::RunCompleted);
//! assert_eq!(ev.elapsed_ms, Some(1250));
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::{Duration, SystemTime};

use crate::algorithms::AlgorithmId;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of lifecycle events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    // === Run events ===
    /// A run was accepted and its background task spawned.
    ///
    /// Sets: `algorithm`, `size`
    RunStarting,

    /// The algorithm finished naturally.
    ///
    /// Sets: `algorithm`, `size`, `elapsed_ms`
    RunCompleted,

    /// The run observed cancellation and stopped.
    ///
    /// Sets: `algorithm`, `elapsed_ms`
    RunCancelled,

    /// The run stopped on an unexpected fault (error or panic).
    ///
    /// Sets: `algorithm`, `elapsed_ms`, `reason`
    RunInterrupted,

    // === Control events ===
    /// `start` was refused because a run is active.
    ///
    /// Sets: `algorithm` (the refused one)
    StartRejected,

    /// A fresh array was generated.
    ///
    /// Sets: `size`
    ArrayReset,

    // === Subscriber events ===
    /// Subscriber panicked during event processing.
    ///
    /// Sets: `subscriber`, `reason`
    SubscriberPanicked,

    /// Subscriber dropped an event (queue full or worker closed).
    ///
    /// Sets: `subscriber`, `reason`
    SubscriberOverflow,
}

/// Lifecycle event with optional metadata.
#[derive(Debug, Clone)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,
    /// Algorithm concerned, if any.
    pub algorithm: Option<AlgorithmId>,
    /// Buffer length, if relevant.
    pub size: Option<usize>,
    /// Wall-clock run duration in milliseconds.
    pub elapsed_ms: Option<u64>,
    /// Human-readable reason (faults, overflow details).
    pub reason: Option<Arc<str>>,
    /// Subscriber name for subscriber events.
    pub subscriber: Option<&'static str>,
}

impl Event {
    /// Creates a new event of the given kind with current timestamp and next sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            algorithm: None,
            size: None,
            elapsed_ms: None,
            reason: None,
            subscriber: None,
        }
    }

    /// Attaches the algorithm.
    #[inline]
    pub fn with_algorithm(mut self, id: AlgorithmId) -> Self {
        self.algorithm = Some(id);
        self
    }

    /// Attaches the buffer length.
    #[inline]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    /// Attaches an elapsed duration (stored as milliseconds).
    #[inline]
    pub fn with_elapsed(mut self, d: Duration) -> Self {
        self.elapsed_ms = Some(d.as_millis().min(u128::from(u64::MAX)) as u64);
        self
    }

    /// Attaches a human-readable reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Creates a subscriber overflow event.
    #[inline]
    pub fn subscriber_overflow(subscriber: &'static str, reason: &'static str) -> Self {
        let mut ev = Event::new(EventKind::SubscriberOverflow).with_reason(reason);
        ev.subscriber = Some(subscriber);
        ev
    }

    /// Creates a subscriber panic event.
    #[inline]
    pub fn subscriber_panicked(subscriber: &'static str, info: String) -> Self {
        let mut ev = Event::new(EventKind::SubscriberPanicked).with_reason(info);
        ev.subscriber = Some(subscriber);
        ev
    }

    /// True for the three terminal run kinds.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.kind,
            EventKind::RunCompleted | EventKind::RunCancelled | EventKind::RunInterrupted
        )
    }

    #[inline]
    pub fn is_subscriber_event(&self) -> bool {
        matches!(
            self.kind,
            EventKind::SubscriberOverflow | EventKind::SubscriberPanicked
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_is_monotonic() {
        let a = Event::new(EventKind::ArrayReset);
        let b = Event::new(EventKind::ArrayReset);
        assert!(b.seq > a.seq);
    }

    #[test]
    fn test_terminal_kinds() {
        assert!(Event::new(EventKind::RunCancelled).is_terminal());
        assert!(!Event::new(EventKind::RunStarting).is_terminal());
        let ev = Event::subscriber_overflow("log", "full");
        assert!(ev.is_subscriber_event());
        assert_eq!(ev.subscriber, Some("log"));
        assert_eq!(ev.reason.as_deref(), Some("full"));
    }
}
