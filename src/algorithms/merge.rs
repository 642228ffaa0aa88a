use crate::{error::SortError, sink::Sink};

use super::{AlgorithmId, Sorter, write_reported};

/// Top-down merge sort with stable, left-biased merges.
#[derive(Debug, Clone, Copy, Default)]
pub struct Merge;

impl Sorter for Merge {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Merge
    }

    fn sort(&self, buffer: &mut [i32], sink: &dyn Sink) -> Result<(), SortError> {
        if buffer.len() > 1 {
            let right = buffer.len() - 1;
            merge_sort(buffer, sink, 0, right)?;
        }
        sink.mark_all_sorted();
        Ok(())
    }
}

fn merge_sort(buffer: &mut [i32], sink: &dyn Sink, left: usize, right: usize) -> Result<(), SortError> {
    if left >= right {
        return Ok(());
    }
    let mid = left + (right - left) / 2;
    merge_sort(buffer, sink, left, mid)?;
    merge_sort(buffer, sink, mid + 1, right)?;
    merge_halves(buffer, sink, left, mid, right)
}

/// Merges the sorted runs `buffer[left..=mid]` and `buffer[mid + 1..=right]`.
///
/// Ties take the left element first. Highlights refer to the positions the
/// compared values occupied before the merge started.
pub(super) fn merge_halves(
    buffer: &mut [i32],
    sink: &dyn Sink,
    left: usize,
    mid: usize,
    right: usize,
) -> Result<(), SortError> {
    let lhs = buffer[left..=mid].to_vec();
    let rhs = buffer[mid + 1..=right].to_vec();

    let (mut i, mut j, mut k) = (0, 0, left);
    while i < lhs.len() && j < rhs.len() {
        sink.highlight(left + i, Some(mid + 1 + j));
        sink.pace()?;
        if lhs[i] <= rhs[j] {
            write_reported(buffer, sink, k, lhs[i]);
            i += 1;
        } else {
            write_reported(buffer, sink, k, rhs[j]);
            j += 1;
        }
        k += 1;
        sink.pace()?;
    }

    for &value in lhs[i..].iter().chain(&rhs[j..]) {
        write_reported(buffer, sink, k, value);
        sink.highlight(k, None);
        sink.pace()?;
        k += 1;
    }

    sink.clear_highlight();
    Ok(())
}
