use std::time::Duration;

/// One instrumentation event, as issued through a [`Sink`](super::Sink).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// `highlight(i, j)`.
    Compare(usize, Option<usize>),
    /// `write(index, value)`.
    Write { index: usize, value: i32 },
    /// `swap(i, j)`.
    Swap(usize, usize),
    /// `mark_sorted(k)`.
    SortedBoundary(usize),
    /// `mark_all_sorted()`.
    AllSorted,
    /// `clear_highlight()`.
    ClearHighlight,
    /// `pace()` (`None`) or `pace_for(d)` (`Some(d)`).
    Pace(Option<Duration>),
}

impl Step {
    /// True for steps that change buffer contents.
    #[inline]
    pub fn is_mutation(&self) -> bool {
        matches!(self, Step::Write { .. } | Step::Swap(..))
    }

    /// Largest buffer index referenced by this step, if any.
    pub fn max_index(&self) -> Option<usize> {
        match *self {
            Step::Compare(i, j) => Some(j.map_or(i, |j| i.max(j))),
            Step::Write { index, .. } => Some(index),
            Step::Swap(i, j) => Some(i.max(j)),
            _ => None,
        }
    }
}
