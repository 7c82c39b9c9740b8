//! Recursion versus explicit stacks.
//!
//! The workload is a deliberately trivial doubling recursion: `f(n)` counts one for itself
//! and calls `f(n / 2)` twice, stopping at zero. It does nothing else, so the cost measured
//! is the cost of keeping track of pending calls. [`count_recursive`] keeps them on the call
//! stack; [`count_with_stack`] keeps them on an explicit [`Stack`] and is run with each
//! backend in turn by [`CountingVariant`].
//!
//! Every variant visits the same call tree, only in a different order, and the count does not
//! depend on the order. For `n > 0` the tree has one non-zero node per path of halvings, so
//! `f(n) = 2^bits(n) - 1` where `bits(n)` is the bit length of `n`.
//!
//! # Stack sizing
//! Popping a non-zero value pushes `BRANCHING` children, growing the stack by
//! `BRANCHING - 1`. With `depth` levels of non-zero values the stack peaks at
//! `depth * (BRANCHING - 1) + 1` entries, which [`required_capacity`] computes.

use crate::error::CapacityExceeded;
use crate::scenario::Candidate;
use crate::stacks::{BoundedStack, Stack};
use std::collections::{LinkedList, VecDeque};

/// Number of recursive calls each non-zero invocation makes.
pub const BRANCHING: usize = 2;

/// Largest input the recursion experiment is timed with.
pub const MAX_RECURSION_INPUT: u64 = 1 << 20;

/// Capacity of the inline stack and of the pre-reserved vector.
///
/// Must be at least `required_capacity(MAX_RECURSION_INPUT)`, which is 22.
pub const RECURSION_STACK_CAPACITY: usize = 32;

const _: () = assert!(required_capacity(MAX_RECURSION_INPUT) <= RECURSION_STACK_CAPACITY);

/// Maximum number of entries simultaneously on an explicit stack while counting `n`.
pub const fn required_capacity(n: u64) -> usize {
    let depth = (u64::BITS - n.leading_zeros()) as usize;
    depth * (BRANCHING - 1) + 1
}

/// Counts the calls of the doubling recursion using the call stack.
///
/// The running count is threaded through `acc` and returned, so calls share no state.
pub fn count_recursive(n: u64, acc: u64) -> u64 {
    if n == 0 {
        return acc;
    }
    let acc = count_recursive(n / 2, acc + 1);
    count_recursive(n / 2, acc)
}

/// Counts the calls of the doubling recursion using `stack` for the pending calls.
///
/// `stack` is expected to be empty; it is drained by the time this returns `Ok`.
///
/// # Errors
/// Propagates [`CapacityExceeded`] from a fixed-capacity stack that is too small for `n`.
pub fn count_with_stack<S: Stack<u64>>(n: u64, mut stack: S) -> Result<u64, CapacityExceeded> {
    let mut acc = 0;
    stack.push(n)?;
    while let Some(current) = stack.pop() {
        if current == 0 {
            continue;
        }
        acc += 1;
        for _ in 0..BRANCHING {
            stack.push(current / 2)?;
        }
    }
    Ok(acc)
}

/// The six ways of running the counting recursion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountingVariant {
    /// Native recursion.
    Recursive,
    /// Explicit stack on a `VecDeque`.
    Deque,
    /// Explicit stack on a `Vec` grown on demand.
    Vector,
    /// Explicit stack on a `LinkedList`.
    List,
    /// Explicit stack on a [`BoundedStack`] of [`RECURSION_STACK_CAPACITY`].
    Array,
    /// Explicit stack on a `Vec` reserved to [`RECURSION_STACK_CAPACITY`] up front.
    ReservedVector,
}

impl CountingVariant {
    pub const ALL: [CountingVariant; 6] = [
        CountingVariant::Recursive,
        CountingVariant::Deque,
        CountingVariant::Vector,
        CountingVariant::List,
        CountingVariant::Array,
        CountingVariant::ReservedVector,
    ];

    /// Counts the calls of `f(n)` with this variant.
    pub fn count(self, n: u64) -> Result<u64, CapacityExceeded> {
        match self {
            Self::Recursive => Ok(count_recursive(n, 0)),
            Self::Deque => count_with_stack(n, VecDeque::new()),
            Self::Vector => count_with_stack(n, Vec::new()),
            Self::List => count_with_stack(n, LinkedList::new()),
            Self::Array => {
                count_with_stack(n, BoundedStack::<u64, RECURSION_STACK_CAPACITY>::new())
            }
            Self::ReservedVector => {
                count_with_stack(n, Vec::with_capacity(RECURSION_STACK_CAPACITY))
            }
        }
    }
}

impl Candidate for CountingVariant {
    type Param = u64;
    type Input = u64;
    type Output = Result<u64, CapacityExceeded>;

    fn name(&self) -> &'static str {
        match self {
            Self::Recursive => "recursive",
            Self::Deque => "nonrecursive_deque",
            Self::Vector => "nonrecursive_vector",
            Self::List => "nonrecursive_list",
            Self::Array => "nonrecursive_array",
            Self::ReservedVector => "nonrecursive_vector_reserved",
        }
    }

    fn generate(param: &u64, _seed: u64) -> u64 {
        *param
    }

    fn run(&self, n: &u64) -> Result<u64, CapacityExceeded> {
        self.count(*n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::ScenarioMatrix;
    use proptest::prelude::*;

    fn closed_form(n: u64) -> u64 {
        (1u64 << (u64::BITS - n.leading_zeros())) - 1
    }

    #[test]
    fn test_recursion_known_values() {
        for variant in CountingVariant::ALL {
            assert_eq!(variant.count(0), Ok(0), "{variant:?}");
            assert_eq!(variant.count(1), Ok(1), "{variant:?}");
            assert_eq!(variant.count(2), Ok(3), "{variant:?}");
            assert_eq!(variant.count(3), Ok(3), "{variant:?}");
            assert_eq!(variant.count(4), Ok(7), "{variant:?}");
        }
    }

    #[test]
    fn test_recursion_accumulator_is_threaded() {
        assert_eq!(count_recursive(4, 10), 17);
        assert_eq!(count_recursive(0, 5), 5);
    }

    #[test]
    fn test_recursion_required_capacity() {
        assert_eq!(required_capacity(0), 1);
        assert_eq!(required_capacity(1), 2);
        assert_eq!(required_capacity(2), 3);
        assert_eq!(required_capacity(MAX_RECURSION_INPUT), 22);
    }

    /// Stack wrapper that records the deepest size reached.
    struct Watermark {
        inner: Vec<u64>,
        peak: usize,
    }

    impl Stack<u64> for &mut Watermark {
        fn push(&mut self, item: u64) -> Result<(), CapacityExceeded> {
            self.inner.push(item);
            self.peak = self.peak.max(self.inner.len());
            Ok(())
        }

        fn pop(&mut self) -> Option<u64> {
            self.inner.pop()
        }

        fn len(&self) -> usize {
            self.inner.len()
        }
    }

    #[test]
    fn test_recursion_peak_depth_matches_formula() {
        for n in [0, 1, 2, 5, 100, 4096, MAX_RECURSION_INPUT] {
            let mut watermark = Watermark {
                inner: Vec::new(),
                peak: 0,
            };
            count_with_stack(n, &mut watermark).unwrap();
            assert_eq!(watermark.peak, required_capacity(n), "n = {n}");
        }
    }

    #[test]
    fn test_recursion_bounded_stack_at_max_input() {
        let count = CountingVariant::Array.count(MAX_RECURSION_INPUT);
        assert_eq!(count, Ok(closed_form(MAX_RECURSION_INPUT)));
        assert_eq!(count, Ok((1 << 21) - 1));
    }

    #[test]
    fn test_recursion_bounded_stack_exact_fit_and_overflow() {
        const FIT: usize = required_capacity(MAX_RECURSION_INPUT);
        assert_eq!(
            count_with_stack(MAX_RECURSION_INPUT, BoundedStack::<u64, FIT>::new()),
            Ok(closed_form(MAX_RECURSION_INPUT))
        );
        assert_eq!(
            count_with_stack(MAX_RECURSION_INPUT, BoundedStack::<u64, { FIT - 1 }>::new()),
            Err(CapacityExceeded { capacity: FIT - 1 })
        );
    }

    #[test]
    fn test_recursion_matrix_verifies() {
        let matrix = ScenarioMatrix::new("recursion")
            .candidates(CountingVariant::ALL)
            .params([0, 1, 2, 4, 1000, MAX_RECURSION_INPUT]);
        assert_eq!(matrix.verify(), Ok(5 * 6));
    }

    proptest! {
        #[test]
        fn prop_recursion_variants_agree(n in 0u64..(1 << 14)) {
            let expected = closed_form(n);
            for variant in CountingVariant::ALL {
                prop_assert_eq!(variant.count(n), Ok(expected));
            }
        }
    }
}
