//! # Recorder: in-memory sink for tests and tooling.
//!
//! Records every call as a [`Step`] and never sleeps. Optionally reports
//! [`SortError::Interrupted`] once a number of paces has been reached, which
//! lets tests exercise cancellation without a runtime.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use parking_lot::Mutex;

use crate::error::SortError;

use super::{Sink, Step};

/// Sink that records steps in issue order.
#[derive(Debug, Default)]
pub struct Recorder {
    steps: Mutex<Vec<Step>>,
    paces: AtomicUsize,
    interrupt_after: Option<usize>,
}

impl Recorder {
    /// Creates an empty recorder that never interrupts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recorder whose `pace` fails from the `n + 1`-th call on.
    #[must_use]
    pub fn interrupt_after(n: usize) -> Self {
        Self {
            interrupt_after: Some(n),
            ..Self::default()
        }
    }

    /// Returns a copy of all recorded steps.
    pub fn steps(&self) -> Vec<Step> {
        self.steps.lock().clone()
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.steps.lock().len()
    }

    /// True if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.steps.lock().is_empty()
    }

    /// Number of recorded steps matching `pred`.
    pub fn count(&self, pred: impl Fn(&Step) -> bool) -> usize {
        self.steps.lock().iter().filter(|s| pred(s)).count()
    }

    /// Drops all recorded steps and resets the pace counter.
    pub fn clear(&self) {
        self.steps.lock().clear();
        self.paces.store(0, Ordering::Relaxed);
    }

    fn push(&self, step: Step) {
        self.steps.lock().push(step);
    }

    fn tick(&self, step: Step) -> Result<(), SortError> {
        self.push(step);
        let seen = self.paces.fetch_add(1, Ordering::Relaxed);
        match self.interrupt_after {
            Some(limit) if seen >= limit => Err(SortError::Interrupted),
            _ => Ok(()),
        }
    }
}

impl Sink for Recorder {
    fn highlight(&self, i: usize, j: Option<usize>) {
        self.push(Step::Compare(i, j));
    }

    fn write(&self, index: usize, value: i32) {
        self.push(Step::Write { index, value });
    }

    fn swap(&self, i: usize, j: usize) {
        self.push(Step::Swap(i, j));
    }

    fn mark_sorted(&self, k: usize) {
        self.push(Step::SortedBoundary(k));
    }

    fn mark_all_sorted(&self) {
        self.push(Step::AllSorted);
    }

    fn clear_highlight(&self) {
        self.push(Step::ClearHighlight);
    }

    fn pace(&self) -> Result<(), SortError> {
        self.tick(Step::Pace(None))
    }

    fn pace_for(&self, delay: Duration) -> Result<(), SortError> {
        self.tick(Step::Pace(Some(delay)))
    }
}
