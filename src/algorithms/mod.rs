//! # Instrumented sorting algorithms.
//!
//! Every algorithm implements [`Sorter`]: it sorts an `i32` buffer ascending, in
//! place, and reports each visible step through a [`Sink`]. The
//! [`AlgorithmId`] catalog maps stable identifiers to implementations.
//!
//! | Family              | Algorithms                    |
//! |---------------------|-------------------------------|
//! | exchange            | [`Bubble`], [`Selection`], [`Insertion`] |
//! | divide and conquer  | [`Merge`], [`Quick`]          |
//! | heap                | [`Heap`]                      |
//! | hybrid              | [`Tim`] (runs of 32 + merges) |
//! | distribution        | [`Bucket`]                    |
//! | randomized          | [`Bogo`] (capped, with fallback) |
//!
//! ## Rules
//! - Algorithms call [`Sink::pace`] at least once per comparison or mutation
//!   and propagate its error with `?`, so a cancelled run unwinds at the next step.
//! - All algorithms finish with [`Sink::mark_all_sorted`].
//! - Every algorithm but [`Bogo`] is deterministic, down to the step sequence.

mod bogo;
mod bubble;
mod bucket;
mod catalog;
mod heap;
mod insertion;
mod merge;
mod quick;
mod selection;
mod tim;

pub use bogo::Bogo;
pub use bubble::Bubble;
pub use bucket::Bucket;
pub use catalog::{AlgorithmId, AlgorithmInfo, UnknownAlgorithm};
pub use heap::Heap;
pub use insertion::Insertion;
pub use merge::Merge;
pub use quick::Quick;
pub use selection::Selection;
pub use tim::Tim;

use crate::{error::SortError, sink::Sink};

/// # An instrumented, in-place sorting algorithm.
///
/// # Example
/// ```
/// use sortvisor::{AlgorithmId, Recorder, Sorter, Step};
///
/// let sorter = AlgorithmId::Insertion.sorter();
/// let rec = Recorder::new();
/// let mut buf = vec![3, 1, 2];
///
/// sorter.sort(&mut buf, &rec).unwrap();
/// assert_eq!(buf, vec![1, 2, 3]);
/// assert_eq!(rec.steps().last(), Some(&Step::AllSorted));
/// ```
pub trait Sorter: Send + Sync + 'static {
    /// Stable identifier of this algorithm.
    fn id(&self) -> AlgorithmId;

    /// Sorts `buffer` ascending, reporting every visible step to `sink`.
    ///
    /// Returns [`SortError::Interrupted`] as soon as pacing observes cancellation;
    /// the buffer then holds whatever writes already happened.
    fn sort(&self, buffer: &mut [i32], sink: &dyn Sink) -> Result<(), SortError>;

    /// Display metadata.
    fn info(&self) -> AlgorithmInfo {
        self.id().info()
    }
}

/// Exchanges `i` and `j` in the buffer and reports it.
#[inline]
pub(crate) fn swap_reported(buffer: &mut [i32], sink: &dyn Sink, i: usize, j: usize) {
    sink.swap(i, j);
    buffer.swap(i, j);
}

/// Stores `value` at `index` and reports it.
#[inline]
pub(crate) fn write_reported(buffer: &mut [i32], sink: &dyn Sink, index: usize, value: i32) {
    buffer[index] = value;
    sink.write(index, value);
}
