//! Input datasets for the experiments.
//!
//! The insertion sort experiment runs on compiled-in literal datasets so every run sorts
//! exactly the same sequences. The other experiments draw integers from a seeded
//! [`StdRng`], which keeps them reproducible across runs for a fixed seed.

use core::fmt;
use rand::rngs::StdRng;
use rand::seq::{SliceRandom, index};
use rand::{Rng, SeedableRng};

/// Order of the elements in a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputShape {
    Random,
    Ascending,
    Descending,
}

impl fmt::Display for InputShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Random => f.write_str("random"),
            Self::Ascending => f.write_str("sorted"),
            Self::Descending => f.write_str("reversed"),
        }
    }
}

const SMALL_RANDOM: [i32; 20] = [
    91, 15, 45, 59, 80, 76, 81, 12, 99, 71, 83, 44, 46, 52, 34, 53, 62, 67, 40, 29,
];
const SMALL_SORTED: [i32; 20] = [
    12, 15, 29, 34, 40, 44, 45, 46, 52, 53, 59, 62, 67, 71, 76, 80, 81, 83, 91, 99,
];
const SMALL_REVERSED: [i32; 20] = [
    99, 91, 83, 81, 80, 76, 71, 67, 62, 59, 53, 52, 46, 45, 44, 40, 34, 29, 15, 12,
];
const LARGE_RANDOM: [i32; 50] = [
    10, 82, 70, 14, 31, 84, 57, 75, 73, 60, 95, 74, 27, 63, 66, 24, 25, 6, 65, 36, 26, 16, 54,
    45, 99, 18, 19, 59, 44, 30, 85, 3, 15, 67, 61, 93, 98, 97, 35, 71, 88, 76, 32, 64, 9, 39, 83,
    34, 40, 79,
];
const LARGE_SORTED: [i32; 50] = [
    3, 6, 9, 10, 14, 15, 16, 18, 19, 24, 25, 26, 27, 30, 31, 32, 34, 35, 36, 39, 40, 44, 45, 54,
    57, 59, 60, 61, 63, 64, 65, 66, 67, 70, 71, 73, 74, 75, 76, 79, 82, 83, 84, 85, 88, 93, 95,
    97, 98, 99,
];
const LARGE_REVERSED: [i32; 50] = [
    99, 98, 97, 95, 93, 88, 85, 84, 83, 82, 79, 76, 75, 74, 73, 71, 70, 67, 66, 65, 64, 63, 61,
    60, 59, 57, 54, 45, 44, 40, 39, 36, 35, 34, 32, 31, 30, 27, 26, 25, 24, 19, 18, 16, 15, 14,
    10, 9, 6, 3,
];

/// The six fixed datasets of the insertion sort experiment, identified by a small integer tag.
///
/// | Tag | Variant | Length | Shape |
/// |-----|---------|--------|-------|
/// | 0 | `SmallRandom` | 20 | random |
/// | 1 | `SmallSorted` | 20 | ascending |
/// | 2 | `SmallReversed` | 20 | descending |
/// | 3 | `LargeRandom` | 50 | random |
/// | 4 | `LargeSorted` | 50 | ascending |
/// | 5 | `LargeReversed` | 50 | descending |
///
/// The sorted and reversed datasets hold the same values as the random one of the same length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortInput {
    SmallRandom = 0,
    SmallSorted = 1,
    SmallReversed = 2,
    LargeRandom = 3,
    LargeSorted = 4,
    LargeReversed = 5,
}

impl SortInput {
    pub const ALL: [SortInput; 6] = [
        SortInput::SmallRandom,
        SortInput::SmallSorted,
        SortInput::SmallReversed,
        SortInput::LargeRandom,
        SortInput::LargeSorted,
        SortInput::LargeReversed,
    ];

    /// Maps a scenario tag back to its dataset, or `None` for an unknown tag.
    pub fn from_tag(tag: u8) -> Option<Self> {
        Self::ALL.get(tag as usize).copied()
    }

    #[inline]
    pub fn tag(self) -> u8 {
        self as u8
    }

    pub fn dataset(self) -> &'static [i32] {
        match self {
            Self::SmallRandom => &SMALL_RANDOM,
            Self::SmallSorted => &SMALL_SORTED,
            Self::SmallReversed => &SMALL_REVERSED,
            Self::LargeRandom => &LARGE_RANDOM,
            Self::LargeSorted => &LARGE_SORTED,
            Self::LargeReversed => &LARGE_REVERSED,
        }
    }

    #[inline]
    pub fn len(self) -> usize {
        self.dataset().len()
    }

    pub fn shape(self) -> InputShape {
        match self {
            Self::SmallRandom | Self::LargeRandom => InputShape::Random,
            Self::SmallSorted | Self::LargeSorted => InputShape::Ascending,
            Self::SmallReversed | Self::LargeReversed => InputShape::Descending,
        }
    }
}

impl fmt::Display for SortInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.len(), self.shape())
    }
}

/// Returns `len` non-negative integers drawn from a generator seeded with `seed`.
///
/// Values may repeat; the chance is small but non-zero for large `len`.
pub fn random_ints(len: usize, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(0..=i32::MAX)).collect()
}

/// Returns `len` integers of the given shape.
///
/// Ascending and descending datasets are the random dataset for the same seed, sorted.
pub fn shaped_ints(len: usize, shape: InputShape, seed: u64) -> Vec<i32> {
    let mut values = random_ints(len, seed);
    match shape {
        InputShape::Random => {}
        InputShape::Ascending => values.sort_unstable(),
        InputShape::Descending => values.sort_unstable_by(|a, b| b.cmp(a)),
    }
    values
}

/// Returns `len` shuffled integers of which exactly `duplicates` repeat an earlier value.
///
/// The result therefore holds `len - duplicates` distinct values. `duplicates` is clamped to
/// `len - 1` since at least one distinct value is needed to repeat.
pub fn with_duplicates(len: usize, duplicates: usize, seed: u64) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }
    let duplicates = duplicates.min(len - 1);
    let distinct = len - duplicates;
    let mut rng = StdRng::seed_from_u64(seed);

    let mut values: Vec<i32> = index::sample(&mut rng, i32::MAX as usize, distinct)
        .into_iter()
        .map(|i| i as i32)
        .collect();
    for _ in 0..duplicates {
        let repeat = values[rng.random_range(0..distinct)];
        values.push(repeat);
    }
    values.shuffle(&mut rng);
    values
}
