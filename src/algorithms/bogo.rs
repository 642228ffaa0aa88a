//! Randomized repeated-shuffle sort.
//!
//! Shuffles until the buffer happens to be ascending. The number of shuffles
//! is capped; once the cap is spent the buffer is sorted deterministically and
//! every slot is re-emitted through `write`, so the run always terminates
//! sorted.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{error::SortError, sink::Sink};

use super::{AlgorithmId, Sorter, swap_reported};

/// Default shuffle cap.
pub const MAX_ITERATIONS: usize = 100_000;

/// Repeated-shuffle sort with an iteration cap and deterministic fallback.
#[derive(Debug, Clone, Copy)]
pub struct Bogo {
    max_iterations: usize,
    seed: Option<u64>,
}

impl Default for Bogo {
    fn default() -> Self {
        Self::new(MAX_ITERATIONS)
    }
}

impl Bogo {
    /// Creates a sorter that gives up after `max_iterations` shuffles.
    #[must_use]
    pub fn new(max_iterations: usize) -> Self {
        Self {
            max_iterations,
            seed: None,
        }
    }

    /// Uses a fixed rng seed (reproducible shuffles).
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Configured shuffle cap.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}

impl Sorter for Bogo {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Bogo
    }

    fn sort(&self, buffer: &mut [i32], sink: &dyn Sink) -> Result<(), SortError> {
        let mut rng = self.rng();
        let mut iterations = 0;
        let mut sorted = is_sorted(buffer, sink)?;

        while !sorted && iterations < self.max_iterations {
            shuffle(buffer, sink, &mut rng)?;
            iterations += 1;
            sorted = is_sorted(buffer, sink)?;
        }

        if !sorted {
            buffer.sort_unstable();
            for (index, &value) in buffer.iter().enumerate() {
                sink.write(index, value);
            }
        }

        sink.mark_all_sorted();
        Ok(())
    }
}

fn is_sorted(buffer: &[i32], sink: &dyn Sink) -> Result<bool, SortError> {
    for i in 0..buffer.len().saturating_sub(1) {
        sink.highlight(i, Some(i + 1));
        sink.pace()?;
        if buffer[i] > buffer[i + 1] {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Fisher-Yates; every exchange is reported, the whole shuffle is paced once.
fn shuffle(buffer: &mut [i32], sink: &dyn Sink, rng: &mut impl Rng) -> Result<(), SortError> {
    for i in (1..buffer.len()).rev() {
        let j = rng.random_range(0..=i);
        sink.highlight(i, Some(j));
        swap_reported(buffer, sink, i, j);
    }
    sink.pace()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::testing::{assert_replay_matches, assert_sorted_permutation, run};
    use crate::sink::Step;

    #[test]
    fn test_low_cap_falls_back_to_sorted() {
        let input = [3, 1, 2];
        let (out, steps) = run(&Bogo::new(1).with_seed(7), &input);
        assert_eq!(out, vec![1, 2, 3]);
        assert_replay_matches(&input, &steps, &out);
        assert_eq!(steps.last(), Some(&Step::AllSorted));
    }

    #[test]
    fn test_zero_cap_goes_straight_to_fallback() {
        let input = [9, 8, 7, 6];
        let (out, steps) = run(&Bogo::new(0), &input);
        assert_eq!(out, vec![6, 7, 8, 9]);
        assert!(!steps.iter().any(|s| matches!(s, Step::Swap(..))));
        let writes = steps.iter().filter(|s| matches!(s, Step::Write { .. })).count();
        assert_eq!(writes, input.len());
    }

    #[test]
    fn test_sorted_input_never_shuffles() {
        let (out, steps) = run(&Bogo::default(), &[1, 2, 2, 3]);
        assert_eq!(out, vec![1, 2, 2, 3]);
        assert!(!steps.iter().any(Step::is_mutation));
    }

    #[test]
    fn test_small_input_sorts_by_shuffling() {
        let input = [2, 1];
        let (out, steps) = run(&Bogo::default().with_seed(42), &input);
        assert_sorted_permutation(&input, &out);
        assert_replay_matches(&input, &steps, &out);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let input = [4, 1, 3, 2, 5];
        let a = run(&Bogo::new(50).with_seed(3), &input);
        let b = run(&Bogo::new(50).with_seed(3), &input);
        assert_eq!(a, b);
    }
}
