use crate::{error::SortError, sink::Sink};

use super::{AlgorithmId, Sorter, write_reported};

/// Bucket sort with `max(1, floor(sqrt(n)))` buckets over the value range.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bucket;

impl Sorter for Bucket {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Bucket
    }

    fn sort(&self, buffer: &mut [i32], sink: &dyn Sink) -> Result<(), SortError> {
        let n = buffer.len();
        if n == 0 {
            sink.mark_all_sorted();
            return Ok(());
        }

        // The range scan is paced once as a whole.
        let (mut min, mut max) = (buffer[0], buffer[0]);
        for (i, &value) in buffer.iter().enumerate() {
            sink.highlight(i, None);
            min = min.min(value);
            max = max.max(value);
        }
        sink.pace()?;

        let count = bucket_count(n);
        let mut buckets: Vec<Vec<i32>> = vec![Vec::new(); count];
        for (i, &value) in buffer.iter().enumerate() {
            sink.highlight(i, None);
            sink.pace()?;
            buckets[bucket_index(value, min, max, count)].push(value);
        }

        let mut index = 0;
        for mut bucket in buckets {
            bucket.sort_unstable();
            for value in bucket {
                write_reported(buffer, sink, index, value);
                sink.highlight(index, None);
                sink.pace()?;
                index += 1;
            }
        }

        sink.mark_all_sorted();
        Ok(())
    }
}

/// `max(1, floor(sqrt(n)))`.
pub(crate) fn bucket_count(n: usize) -> usize {
    n.isqrt().max(1)
}

/// `floor((value - min) * (count - 1) / (max - min + 1))`, computed in `i64`.
///
/// A constant buffer (`min == max`) maps every value to bucket 0.
pub(crate) fn bucket_index(value: i32, min: i32, max: i32, count: usize) -> usize {
    let offset = i64::from(value) - i64::from(min);
    let range = i64::from(max) - i64::from(min) + 1;
    let slots = count.saturating_sub(1) as i64;
    // offset < range, so the quotient is < count.
    (offset * slots / range) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::testing::{assert_replay_matches, assert_sorted_permutation, run};
    use crate::sink::Step;

    #[test]
    fn test_constant_values_land_in_bucket_zero() {
        assert_eq!(bucket_index(5, 5, 5, bucket_count(3)), 0);

        let (out, steps) = run(&Bucket, &[5, 5, 5]);
        assert_eq!(out, vec![5, 5, 5]);
        assert_eq!(steps.last(), Some(&Step::AllSorted));
    }

    #[test]
    fn test_bucket_count_floor_sqrt() {
        assert_eq!(bucket_count(0), 1);
        assert_eq!(bucket_count(1), 1);
        assert_eq!(bucket_count(3), 1);
        assert_eq!(bucket_count(4), 2);
        assert_eq!(bucket_count(50), 7);
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let input = [i32::MAX, i32::MIN, 0, -1, i32::MAX - 1];
        assert!(bucket_index(i32::MAX, i32::MIN, i32::MAX, 2) < 2);
        let (out, steps) = run(&Bucket, &input);
        assert_sorted_permutation(&input, &out);
        assert_replay_matches(&input, &steps, &out);
    }

    #[test]
    fn test_empty_is_noop() {
        let (out, steps) = run(&Bucket, &[]);
        assert!(out.is_empty());
        assert_eq!(steps, vec![Step::AllSorted]);
    }
}
