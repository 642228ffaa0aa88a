use crate::{error::SortError, sink::Sink};

use super::{AlgorithmId, Sorter, swap_reported};

/// Selection sort; marks `i + 1` sorted after each pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct Selection;

impl Sorter for Selection {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Selection
    }

    fn sort(&self, buffer: &mut [i32], sink: &dyn Sink) -> Result<(), SortError> {
        let n = buffer.len();
        for i in 0..n.saturating_sub(1) {
            let mut min = i;
            for j in i + 1..n {
                sink.highlight(min, Some(j));
                sink.pace()?;
                if buffer[j] < buffer[min] {
                    min = j;
                }
            }
            if min != i {
                sink.highlight(i, Some(min));
                swap_reported(buffer, sink, i, min);
                sink.pace()?;
            }
            sink.mark_sorted(i + 1);
        }
        sink.mark_all_sorted();
        Ok(())
    }
}
