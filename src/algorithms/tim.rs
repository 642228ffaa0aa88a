use crate::{error::SortError, sink::Sink};

use super::{AlgorithmId, Sorter, insertion::insert_range, merge::merge_halves};

/// Length of the insertion-sorted runs.
pub const RUN: usize = 32;

/// Simplified run-based hybrid: insertion-sorted runs of [`RUN`] elements,
/// then bottom-up merges with doubling width.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tim;

impl Sorter for Tim {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Tim
    }

    fn sort(&self, buffer: &mut [i32], sink: &dyn Sink) -> Result<(), SortError> {
        let n = buffer.len();

        for start in (0..n).step_by(RUN) {
            let end = (start + RUN - 1).min(n - 1);
            insert_range(buffer, sink, start, end, false)?;
        }

        let mut width = RUN;
        while width < n {
            for left in (0..n).step_by(2 * width) {
                let mid = (left + width - 1).min(n - 1);
                let right = (left + 2 * width - 1).min(n - 1);
                if mid < right {
                    merge_halves(buffer, sink, left, mid, right)?;
                }
            }
            width *= 2;
        }

        sink.mark_all_sorted();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::testing::{assert_replay_matches, assert_sorted_permutation, run};
    use crate::sink::Step;

    fn descending(n: i32) -> Vec<i32> {
        (0..n).rev().collect()
    }

    #[test]
    fn test_single_run_needs_no_merge() {
        let input = descending(RUN as i32);
        let (out, steps) = run(&Tim, &input);
        assert_sorted_permutation(&input, &out);
        assert!(!steps.iter().any(|s| *s == Step::ClearHighlight));
    }

    #[test]
    fn test_multiple_runs_are_merged() {
        // Four runs; two merges at width 32, one at width 64.
        let input: Vec<i32> = (0..100).map(|i| (i * 37) % 101 - 50).collect();
        let (out, steps) = run(&Tim, &input);
        assert_sorted_permutation(&input, &out);
        assert_replay_matches(&input, &steps, &out);
        assert_eq!(steps.iter().filter(|s| **s == Step::ClearHighlight).count(), 3);
    }
}
