use crate::{error::SortError, sink::Sink};

use super::{AlgorithmId, Sorter, write_reported};

/// Insertion sort; shifts through repeated writes and marks `i + 1` sorted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Insertion;

impl Sorter for Insertion {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Insertion
    }

    fn sort(&self, buffer: &mut [i32], sink: &dyn Sink) -> Result<(), SortError> {
        if !buffer.is_empty() {
            insert_range(buffer, sink, 0, buffer.len() - 1, true)?;
        }
        sink.mark_all_sorted();
        Ok(())
    }
}

/// Insertion-sorts `buffer[lo..=hi]`.
///
/// With `mark_prefix`, the boundary is advanced to `i + 1` after each insertion
/// (only meaningful when `lo == 0`).
pub(super) fn insert_range(
    buffer: &mut [i32],
    sink: &dyn Sink,
    lo: usize,
    hi: usize,
    mark_prefix: bool,
) -> Result<(), SortError> {
    for i in lo + 1..=hi {
        let key = buffer[i];
        sink.highlight(i, None);
        sink.pace()?;

        let mut pos = i;
        while pos > lo && buffer[pos - 1] > key {
            sink.highlight(pos - 1, Some(pos));
            let shifted = buffer[pos - 1];
            write_reported(buffer, sink, pos, shifted);
            sink.pace()?;
            pos -= 1;
        }

        write_reported(buffer, sink, pos, key);
        sink.highlight(pos, None);
        sink.pace()?;
        if mark_prefix {
            sink.mark_sorted(i + 1);
        }
    }
    Ok(())
}
