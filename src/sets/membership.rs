//! The three set-construction strategies and the container they produce.
//!
//! Insertion and lookup happen in separate phases: the whole input is loaded, then the set is
//! only queried. Under that access pattern a sorted vector built in bulk has the same lookup
//! complexity as a balanced tree and a smaller constant everywhere.

use super::SortedVecSet;
use crate::input::random_ints;
use crate::scenario::Candidate;
use std::borrow::Borrow;
use std::collections::{BTreeSet, btree_set};
use std::fmt::{self, Debug};

/// Input sizes the membership experiment is timed with.
pub const MEMBERSHIP_SIZES: [usize; 8] = [8, 64, 512, 4096, 5000, 32_768, 262_144, 1_048_576];

/// Largest input [`MembershipStrategy::KeepSorted`] is timed with. Its O(n) insertion makes
/// anything larger take seconds per trial.
pub const KEEP_SORTED_MAX_LEN: usize = 5000;

/// How a set is materialized from raw, possibly duplicated input.
///
/// | Strategy | Build cost | Result |
/// |----------|------------|--------|
/// | `SortDedup` | O(n log n) | [`MembershipSet::Sorted`] |
/// | `KeepSorted` | O(n²) worst case | [`MembershipSet::Sorted`] |
/// | `BTree` | O(n log n), one node per element | [`MembershipSet::Tree`] |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MembershipStrategy {
    /// Append everything, sort, drop adjacent duplicates.
    SortDedup,
    /// Insert one at a time into a vector kept sorted after every insert.
    KeepSorted,
    /// Insert one at a time into a `BTreeSet`.
    BTree,
}

impl MembershipStrategy {
    pub const ALL: [MembershipStrategy; 3] = [
        MembershipStrategy::SortDedup,
        MembershipStrategy::KeepSorted,
        MembershipStrategy::BTree,
    ];

    /// Builds a set holding each distinct value of `input` exactly once.
    pub fn build<T: Ord + Clone>(self, input: &[T]) -> MembershipSet<T> {
        match self {
            Self::SortDedup => {
                let mut values = Vec::new();
                for value in input {
                    values.push(value.clone());
                }
                MembershipSet::Sorted(SortedVecSet::from_unsorted(values))
            }
            Self::KeepSorted => {
                let mut set = SortedVecSet::new();
                for value in input {
                    set.insert(value.clone());
                }
                MembershipSet::Sorted(set)
            }
            Self::BTree => {
                // Inserted one by one: `collect` would sort first and bulk-load the tree.
                let mut set = BTreeSet::new();
                for value in input {
                    set.insert(value.clone());
                }
                MembershipSet::Tree(set)
            }
        }
    }
}

impl Candidate for MembershipStrategy {
    type Param = usize;
    type Input = Vec<i32>;
    type Output = MembershipSet<i32>;

    fn name(&self) -> &'static str {
        match self {
            Self::SortDedup => "vector_insert_sort",
            Self::KeepSorted => "vector_insert_keep_sorted",
            Self::BTree => "set_insert",
        }
    }

    fn generate(len: &usize, seed: u64) -> Vec<i32> {
        random_ints(*len, seed)
    }

    fn supports(&self, len: &usize) -> bool {
        !matches!(self, Self::KeepSorted) || *len <= KEEP_SORTED_MAX_LEN
    }

    fn run(&self, input: &Vec<i32>) -> MembershipSet<i32> {
        self.build(input)
    }
}

/// A built membership container.
///
/// Two sets are equal when they hold the same elements, whichever variant holds them.
#[derive(Clone)]
pub enum MembershipSet<T> {
    Sorted(SortedVecSet<T>),
    Tree(BTreeSet<T>),
}

impl<T: Ord> MembershipSet<T> {
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self {
            Self::Sorted(set) => set.contains(value),
            Self::Tree(set) => set.contains(value),
        }
    }
}

impl<T> MembershipSet<T> {
    pub fn len(&self) -> usize {
        match self {
            Self::Sorted(set) => set.len(),
            Self::Tree(set) => set.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the elements in ascending order.
    pub fn iter(&self) -> MembershipIter<'_, T> {
        match self {
            Self::Sorted(set) => MembershipIter::Sorted(set.iter()),
            Self::Tree(set) => MembershipIter::Tree(set.iter()),
        }
    }

    /// Copies the elements out in ascending order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for MembershipSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for MembershipSet<T> {}

impl<T: Debug> Debug for MembershipSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Self::Sorted(_) => "Sorted",
            Self::Tree(_) => "Tree",
        };
        write!(f, "{kind}")?;
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Ascending iterator over a [`MembershipSet`].
pub enum MembershipIter<'a, T> {
    Sorted(core::slice::Iter<'a, T>),
    Tree(btree_set::Iter<'a, T>),
}

impl<'a, T> Iterator for MembershipIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        match self {
            Self::Sorted(iter) => iter.next(),
            Self::Tree(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Sorted(iter) => iter.size_hint(),
            Self::Tree(iter) => iter.size_hint(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::with_duplicates;
    use crate::scenario::ScenarioMatrix;
    use proptest::prelude::*;

    #[test]
    fn test_membership_all_strategies_small_input() {
        let input = [5, 3, 5, 1, 3, 9, 1];
        for strategy in MembershipStrategy::ALL {
            let set = strategy.build(&input);
            assert_eq!(set.to_vec(), vec![1, 3, 5, 9], "{strategy:?}");
            assert!(set.contains(&9));
            assert!(!set.contains(&2));
        }
    }

    #[test]
    fn test_membership_empty_input() {
        for strategy in MembershipStrategy::ALL {
            let set = strategy.build::<i32>(&[]);
            assert!(set.is_empty());
            assert_eq!(set.iter().next(), None);
        }
    }

    #[test]
    fn test_membership_known_duplicate_count() {
        let duplicates = 173;
        let input = with_duplicates(1000, duplicates, 11);

        let sorted = MembershipStrategy::SortDedup.build(&input);
        let tree = MembershipStrategy::BTree.build(&input);
        let kept = MembershipStrategy::KeepSorted.build(&input);

        assert_eq!(sorted.len(), 1000 - duplicates);
        assert_eq!(tree.len(), 1000 - duplicates);
        assert_eq!(sorted, tree);
        assert_eq!(kept, tree);
        assert!(sorted.iter().zip(sorted.iter().skip(1)).all(|(a, b)| a < b));
    }

    #[test]
    fn test_membership_set_equality_across_variants() {
        let a = MembershipSet::Sorted(SortedVecSet::from_unsorted(vec![2, 1]));
        let b = MembershipSet::Tree(BTreeSet::from([1, 2]));
        let c = MembershipSet::Tree(BTreeSet::from([1, 2, 3]));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(format!("{a:?}"), "Sorted{1, 2}");
        assert_eq!(format!("{b:?}"), "Tree{1, 2}");
    }

    #[test]
    fn test_membership_keep_sorted_size_limit() {
        assert!(MembershipStrategy::KeepSorted.supports(&KEEP_SORTED_MAX_LEN));
        assert!(!MembershipStrategy::KeepSorted.supports(&32_768));
        assert!(MembershipStrategy::BTree.supports(&1_048_576));

        let matrix = ScenarioMatrix::new("membership")
            .candidates(MembershipStrategy::ALL)
            .params(MEMBERSHIP_SIZES);
        // Two strategies on all eight sizes, keep-sorted on the first five.
        assert_eq!(matrix.len(), 2 * 8 + 5);
    }

    #[test]
    fn test_membership_matrix_verifies_small_sizes() {
        let matrix = ScenarioMatrix::new("membership")
            .seed(3)
            .candidates(MembershipStrategy::ALL)
            .params([0, 8, 64, 512]);
        assert_eq!(matrix.verify(), Ok(4 * 2));
    }

    proptest! {
        #[test]
        fn prop_membership_strategies_agree(input in proptest::collection::vec(-20i32..20, 0..128)) {
            let expected: Vec<i32> = input.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
            for strategy in MembershipStrategy::ALL {
                prop_assert_eq!(strategy.build(&input).to_vec(), expected.clone());
            }
        }
    }
}
