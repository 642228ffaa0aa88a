//! Run status as seen by the presentation layer.

use std::time::{Duration, Instant};

use crate::algorithms::AlgorithmId;

/// State of the single run slot.
///
/// ```text
/// Idle ──start──► Running ──► Completed ──start──► Running ...
///                    │
///                    └──cancel / fault──► Cancelled ──reset──► Idle
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RunStatus {
    /// Nothing has run since the last reset.
    #[default]
    Idle,

    /// A run is in flight.
    Running {
        algorithm: AlgorithmId,
        started_at: Instant,
    },

    /// The algorithm ran to the end.
    Completed {
        algorithm: AlgorithmId,
        elapsed: Duration,
    },

    /// The run stopped early.
    ///
    /// `reason` is `None` for a requested cancellation and carries the fault
    /// text when the run was interrupted by an error or a panic.
    Cancelled {
        algorithm: AlgorithmId,
        elapsed: Duration,
        reason: Option<String>,
    },
}

impl RunStatus {
    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self, RunStatus::Running { .. })
    }

    /// True for `Completed` and `Cancelled`.
    #[inline]
    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            RunStatus::Completed { .. } | RunStatus::Cancelled { .. }
        )
    }

    /// Algorithm of the current or last run.
    pub fn algorithm(&self) -> Option<AlgorithmId> {
        match self {
            RunStatus::Idle => None,
            RunStatus::Running { algorithm, .. }
            | RunStatus::Completed { algorithm, .. }
            | RunStatus::Cancelled { algorithm, .. } => Some(*algorithm),
        }
    }

    /// Wall-clock milliseconds: final for finished runs, live while running.
    pub fn elapsed_ms(&self) -> Option<u64> {
        let d = match self {
            RunStatus::Idle => return None,
            RunStatus::Running { started_at, .. } => started_at.elapsed(),
            RunStatus::Completed { elapsed, .. } | RunStatus::Cancelled { elapsed, .. } => {
                *elapsed
            }
        };
        Some(d.as_millis().min(u128::from(u64::MAX)) as u64)
    }

    /// Short label for status lines.
    pub fn as_label(&self) -> &'static str {
        match self {
            RunStatus::Idle => "idle",
            RunStatus::Running { .. } => "running",
            RunStatus::Completed { .. } => "completed",
            RunStatus::Cancelled { reason: None, .. } => "cancelled",
            RunStatus::Cancelled { reason: Some(_), .. } => "interrupted",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_ms_by_state() {
        assert_eq!(RunStatus::Idle.elapsed_ms(), None);
        let done = RunStatus::Completed {
            algorithm: AlgorithmId::Heap,
            elapsed: Duration::from_millis(1250),
        };
        assert_eq!(done.elapsed_ms(), Some(1250));
        assert!(done.is_finished());
        assert_eq!(done.algorithm(), Some(AlgorithmId::Heap));
    }

    #[test]
    fn test_labels_distinguish_faults() {
        let cancelled = RunStatus::Cancelled {
            algorithm: AlgorithmId::Bogo,
            elapsed: Duration::ZERO,
            reason: None,
        };
        let faulted = RunStatus::Cancelled {
            algorithm: AlgorithmId::Bogo,
            elapsed: Duration::ZERO,
            reason: Some("boom".into()),
        };
        assert_eq!(cancelled.as_label(), "cancelled");
        assert_eq!(faulted.as_label(), "interrupted");
        assert!(!faulted.is_running());
    }
}
