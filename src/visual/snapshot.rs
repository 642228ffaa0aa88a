use std::time::Duration;

use crate::algorithms::AlgorithmInfo;

/// Statistics counters of the current run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    /// Every recorded step: comparisons, writes and swaps.
    pub operations: u64,
    /// `highlight` calls.
    pub comparisons: u64,
    /// `swap` calls.
    pub swaps: u64,
}

/// How a renderer should present one bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarRole {
    /// Inside the sorted boundary (or the whole buffer is sorted).
    Sorted,
    /// First highlighted index.
    Primary,
    /// Second highlighted index.
    Secondary,
    Plain,
}

/// Read-only, internally consistent copy of the visualization state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub values: Vec<i32>,
    pub highlight: (Option<usize>, Option<usize>),
    /// `None` until something is marked; `Some(len)` once fully sorted.
    pub sorted_up_to: Option<usize>,
    pub counters: Counters,
    pub algorithm: Option<AlgorithmInfo>,
    pub delay: Duration,
}

impl Snapshot {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True once the boundary covers every element.
    pub fn is_fully_sorted(&self) -> bool {
        self.sorted_up_to.is_some_and(|k| k >= self.values.len())
    }

    /// Classifies bar `i`.
    ///
    /// Order of precedence: inside the boundary, primary highlight, secondary
    /// highlight, fully sorted buffer, plain.
    pub fn role(&self, i: usize) -> BarRole {
        let boundary = self.sorted_up_to.unwrap_or(0);
        if i < boundary {
            BarRole::Sorted
        } else if self.highlight.0 == Some(i) {
            BarRole::Primary
        } else if self.highlight.1 == Some(i) {
            BarRole::Secondary
        } else if self.is_fully_sorted() {
            BarRole::Sorted
        } else {
            BarRole::Plain
        }
    }
}
