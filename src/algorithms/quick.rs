use crate::{error::SortError, sink::Sink};

use super::{AlgorithmId, Sorter, swap_reported};

/// Quick sort with Lomuto partitioning around the last element.
#[derive(Debug, Clone, Copy, Default)]
pub struct Quick;

impl Sorter for Quick {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Quick
    }

    fn sort(&self, buffer: &mut [i32], sink: &dyn Sink) -> Result<(), SortError> {
        if buffer.len() > 1 {
            let high = buffer.len() - 1;
            quick_sort(buffer, sink, 0, high)?;
        }
        sink.mark_all_sorted();
        Ok(())
    }
}

fn quick_sort(buffer: &mut [i32], sink: &dyn Sink, low: usize, high: usize) -> Result<(), SortError> {
    if low >= high {
        return Ok(());
    }
    let pivot = partition(buffer, sink, low, high)?;
    if pivot > low {
        quick_sort(buffer, sink, low, pivot - 1)?;
    }
    quick_sort(buffer, sink, pivot + 1, high)
}

/// Partitions `buffer[low..=high]` around `buffer[high]`; returns the pivot's final index.
fn partition(buffer: &mut [i32], sink: &dyn Sink, low: usize, high: usize) -> Result<usize, SortError> {
    let pivot = buffer[high];
    // Next slot for an element `<= pivot`.
    let mut store = low;

    for j in low..high {
        sink.highlight(j, Some(high));
        sink.pace()?;
        if buffer[j] <= pivot {
            if store != j {
                swap_reported(buffer, sink, store, j);
                sink.pace()?;
            }
            store += 1;
        }
    }

    if store != high {
        sink.highlight(store, Some(high));
        swap_reported(buffer, sink, store, high);
        sink.pace()?;
    }
    Ok(store)
}
