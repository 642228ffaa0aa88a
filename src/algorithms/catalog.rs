//! # Algorithm catalog.
//!
//! [`AlgorithmId`] is the stable identifier the presentation layer uses to pick
//! an algorithm; [`AlgorithmInfo`] carries the static display metadata.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::{Bogo, Bubble, Bucket, Heap, Insertion, Merge, Quick, Selection, Sorter, Tim};

/// Stable identifier of one of the nine algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmId {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
    Tim,
    Bucket,
    Bogo,
}

/// Static, informational description of an algorithm.
///
/// Not used for selection logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmInfo {
    pub id: AlgorithmId,
    pub name: &'static str,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
}

/// Returned when parsing an unknown algorithm key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown algorithm: {0:?}")]
pub struct UnknownAlgorithm(pub String);

impl AlgorithmId {
    /// Every algorithm, in catalog order.
    pub const ALL: [AlgorithmId; 9] = [
        AlgorithmId::Bubble,
        AlgorithmId::Selection,
        AlgorithmId::Insertion,
        AlgorithmId::Merge,
        AlgorithmId::Quick,
        AlgorithmId::Heap,
        AlgorithmId::Tim,
        AlgorithmId::Bucket,
        AlgorithmId::Bogo,
    ];

    /// Short stable key (lowercase), accepted by [`FromStr`].
    pub fn key(&self) -> &'static str {
        match self {
            AlgorithmId::Bubble => "bubble",
            AlgorithmId::Selection => "selection",
            AlgorithmId::Insertion => "insertion",
            AlgorithmId::Merge => "merge",
            AlgorithmId::Quick => "quick",
            AlgorithmId::Heap => "heap",
            AlgorithmId::Tim => "tim",
            AlgorithmId::Bucket => "bucket",
            AlgorithmId::Bogo => "bogo",
        }
    }

    /// Display metadata.
    pub fn info(&self) -> AlgorithmInfo {
        let (name, time_complexity, space_complexity) = match self {
            AlgorithmId::Bubble => ("Bubble Sort", "O(n²)", "O(1)"),
            AlgorithmId::Selection => ("Selection Sort", "O(n²)", "O(1)"),
            AlgorithmId::Insertion => ("Insertion Sort", "O(n²)", "O(1)"),
            AlgorithmId::Merge => ("Merge Sort", "O(n log n)", "O(n)"),
            AlgorithmId::Quick => ("Quick Sort", "O(n log n)", "O(log n)"),
            AlgorithmId::Heap => ("Heap Sort", "O(n log n)", "O(1)"),
            AlgorithmId::Tim => ("Tim Sort", "O(n log n)", "O(n)"),
            AlgorithmId::Bucket => ("Bucket Sort", "O(n + k)", "O(n + k)"),
            AlgorithmId::Bogo => ("Bogo Sort", "O((n+1)!)", "O(1)"),
        };
        AlgorithmInfo {
            id: *self,
            name,
            time_complexity,
            space_complexity,
        }
    }

    /// True for every algorithm except the randomized one.
    pub fn is_deterministic(&self) -> bool {
        !matches!(self, AlgorithmId::Bogo)
    }

    /// Builds the default implementation.
    ///
    /// The randomized sort uses its default iteration cap and an OS-seeded rng;
    /// construct [`Bogo`] directly to override either.
    pub fn sorter(&self) -> Box<dyn Sorter> {
        match self {
            AlgorithmId::Bubble => Box::new(Bubble),
            AlgorithmId::Selection => Box::new(Selection),
            AlgorithmId::Insertion => Box::new(Insertion),
            AlgorithmId::Merge => Box::new(Merge),
            AlgorithmId::Quick => Box::new(Quick),
            AlgorithmId::Heap => Box::new(Heap),
            AlgorithmId::Tim => Box::new(Tim),
            AlgorithmId::Bucket => Box::new(Bucket),
            AlgorithmId::Bogo => Box::new(Bogo::default()),
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AlgorithmId {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let key = key.strip_suffix(" sort").unwrap_or(&key);
        AlgorithmId::ALL
            .into_iter()
            .find(|id| id.key() == key)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}
