//! Error types used by the sorting engine and the run controller.
//!
//! This module defines two enums:
//!
//! - [`SortError`]: raised from inside an algorithm (cancellation observed at a
//!   pacing point, or an unexpected fault).
//! - [`ControllerError`]: raised by the [`Controller`](crate::Controller) entry points.
//!
//! Both provide `as_label` / `as_message` helpers for logs and status lines.

use thiserror::Error;

/// # Errors produced while an algorithm is running.
///
/// Algorithms only ever see these through [`Sink::pace`](crate::Sink::pace):
/// the `?` operator unwinds the recursion as soon as a run is cancelled.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// Cancellation was observed at a pacing point.
    #[error("run interrupted")]
    Interrupted,

    /// Unexpected fault inside an algorithm (bounds violation, broken invariant).
    #[error("algorithm fault: {reason}")]
    Fault {
        /// Human-readable description of the fault.
        reason: String,
    },
}

impl SortError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use sortvisor::SortError;
    ///
    /// assert_eq!(SortError::Interrupted.as_label(), "sort_interrupted");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            SortError::Interrupted => "sort_interrupted",
            SortError::Fault { .. } => "sort_fault",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            SortError::Interrupted => "interrupted".to_string(),
            SortError::Fault { reason } => format!("fault: {reason}"),
        }
    }

    /// True if the error stems from cancellation rather than a fault.
    pub fn is_interrupted(&self) -> bool {
        matches!(self, SortError::Interrupted)
    }
}

/// # Errors returned by the run controller.
///
/// None of these are fatal: they describe requests the controller declined.
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerError {
    /// `start` was called while a run is active; the active run is unaffected.
    #[error("a run is already active")]
    AlreadyRunning,

    /// `cancel` was called while no run is active.
    #[error("no active run")]
    NotRunning,

    /// The controller was shut down and accepts no new runs.
    #[error("controller is shut down")]
    Closed,
}

impl ControllerError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use sortvisor::ControllerError;
    ///
    /// assert_eq!(ControllerError::AlreadyRunning.as_label(), "start_rejected");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ControllerError::AlreadyRunning => "start_rejected",
            ControllerError::NotRunning => "not_running",
            ControllerError::Closed => "controller_closed",
        }
    }

    /// Returns a human-readable message.
    pub fn as_message(&self) -> String {
        self.to_string()
    }
}
