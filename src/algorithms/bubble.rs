use crate::{error::SortError, sink::Sink};

use super::{AlgorithmId, Sorter, swap_reported};

/// Bubble sort with early exit when a pass performs no exchange.
///
/// The final region of bubble sort grows from the end of the buffer, so it is
/// not reported through the prefix boundary; only the closing
/// `mark_all_sorted` marks it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bubble;

impl Sorter for Bubble {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Bubble
    }

    fn sort(&self, buffer: &mut [i32], sink: &dyn Sink) -> Result<(), SortError> {
        let n = buffer.len();
        for pass in 0..n.saturating_sub(1) {
            let mut swapped = false;
            for j in 0..n - pass - 1 {
                sink.highlight(j, Some(j + 1));
                sink.pace()?;
                if buffer[j] > buffer[j + 1] {
                    swap_reported(buffer, sink, j, j + 1);
                    swapped = true;
                    sink.pace()?;
                }
            }
            if !swapped {
                break;
            }
        }
        sink.mark_all_sorted();
        Ok(())
    }
}
