//! # Instrumentation sink.
//!
//! [`Sink`] is the only channel through which an algorithm reports what it is
//! doing. Every call is a notification; only pacing can fail, and it fails
//! exactly when the run has been cancelled.
//!
//! # Example
//! ```
//! use sortvisor::{Recorder, Sink, SortError, Step};
//!
//! fn compare_first_two(buf: &[i32], sink: &dyn Sink) -> Result<bool, SortError> {
//!     sink.highlight(0, Some(1));
//!     sink.pace()?;
//!     Ok(buf[0] <= buf[1])
//! }
//!
//! let rec = Recorder::new();
//! assert!(compare_first_two(&[1, 2], &rec).unwrap());
//! assert_eq!(rec.steps(), vec![Step::Compare(0, Some(1)), Step::Pace(None)]);
//! ```

use std::time::Duration;

use crate::error::SortError;

/// Receiver of instrumentation notifications from a running algorithm.
///
/// ### Rules
/// - Methods take `&self`: implementations are shared between the background
///   run and readers, so they use interior mutability.
/// - [`pace`](Sink::pace) is the **only** suspension point.
/// - Calls must be applied in the order they are issued.
pub trait Sink: Send + Sync {
    /// Marks `i` (and optionally `j`) as under comparison.
    fn highlight(&self, i: usize, j: Option<usize>);

    /// Records that the buffer holds `value` at `index`.
    fn write(&self, index: usize, value: i32);

    /// Records a position exchange between `i` and `j`.
    fn swap(&self, i: usize, j: usize);

    /// Advances the sorted boundary: indices `< k` are final.
    fn mark_sorted(&self, k: usize);

    /// Marks the whole buffer sorted and clears the highlight.
    fn mark_all_sorted(&self);

    /// Resets the highlight without touching counters.
    fn clear_highlight(&self);

    /// Yields for one animation tick using the configured delay.
    ///
    /// Returns [`SortError::Interrupted`] if the run was cancelled.
    fn pace(&self) -> Result<(), SortError>;

    /// Yields for a custom duration.
    fn pace_for(&self, delay: Duration) -> Result<(), SortError>;
}
