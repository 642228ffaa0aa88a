use crate::{error::SortError, sink::Sink};

use super::{AlgorithmId, Sorter, swap_reported};

/// Heap sort over a bottom-up max-heap.
///
/// Each pop advances the boundary by one, so the boundary counts finalized
/// elements. Those elements sit at the end of the buffer while the marked
/// prefix is still the live heap; `mark_all_sorted` makes the display exact.
#[derive(Debug, Clone, Copy, Default)]
pub struct Heap;

impl Sorter for Heap {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Heap
    }

    fn sort(&self, buffer: &mut [i32], sink: &dyn Sink) -> Result<(), SortError> {
        let n = buffer.len();
        for root in (0..n / 2).rev() {
            sift_down(buffer, sink, n, root)?;
        }

        for end in (1..n).rev() {
            sink.highlight(0, Some(end));
            swap_reported(buffer, sink, 0, end);
            sink.pace()?;
            sink.mark_sorted(n - end);
            sift_down(buffer, sink, end, 0)?;
        }

        sink.mark_all_sorted();
        Ok(())
    }
}

/// Restores the max-heap property for the subtree at `root` within `buffer[..len]`.
fn sift_down(buffer: &mut [i32], sink: &dyn Sink, len: usize, root: usize) -> Result<(), SortError> {
    let mut largest = root;
    let left = 2 * root + 1;
    let right = 2 * root + 2;

    if left < len {
        sink.highlight(largest, Some(left));
        sink.pace()?;
        if buffer[left] > buffer[largest] {
            largest = left;
        }
    }
    if right < len {
        sink.highlight(largest, Some(right));
        sink.pace()?;
        if buffer[right] > buffer[largest] {
            largest = right;
        }
    }

    if largest != root {
        sink.highlight(root, Some(largest));
        swap_reported(buffer, sink, root, largest);
        sink.pace()?;
        sift_down(buffer, sink, len, largest)?;
    }
    Ok(())
}
