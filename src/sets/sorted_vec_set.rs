//! Sorted vector used as a set.

use core::slice;
use std::borrow::Borrow;
use std::fmt::{self, Debug};
use std::iter::FromIterator;

/// A set of `T` stored as a strictly ascending `Vec<T>`.
///
/// Lookups use `binary_search` and cost **O(log n)**, the same as a balanced tree, but the
/// elements are contiguous and carry no per-node metadata. Building the set is where the two
/// construction paths differ:
///
/// | Path | Cost | When |
/// |------|------|------|
/// | [`from_unsorted`](SortedVecSet::from_unsorted) | O(n log n) total | all elements known before the first lookup |
/// | [`insert`](SortedVecSet::insert) one by one | O(n) per insert | lookups interleave with insertions |
///
/// # Pseudo-code Implementation
/// ```text
/// // 1. Bulk build (from_unsorted)
/// sort(values); remove adjacent duplicates
///
/// // 2. Insertion (insert)
/// if binary_search(value): return false
/// push value at the end
/// while value < predecessor: swap with predecessor   // O(n)
/// return true
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SortedVecSet<T> {
    buf: Vec<T>,
}

impl<T: Ord> SortedVecSet<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Builds the set from arbitrary values: sorts them, then collapses runs of equal values.
    pub fn from_unsorted(mut values: Vec<T>) -> Self {
        values.sort_unstable();
        values.dedup();
        Self { buf: values }
    }

    /// Adds `value` while keeping the buffer sorted. Returns `true` if it was not present.
    ///
    /// The new element is appended and then moved toward the front by adjacent swaps until
    /// its predecessor is smaller.
    pub fn insert(&mut self, value: T) -> bool {
        if self.buf.binary_search(&value).is_ok() {
            return false;
        }
        self.buf.push(value);
        let mut i = self.buf.len() - 1;
        while i > 0 && self.buf[i] < self.buf[i - 1] {
            self.buf.swap(i, i - 1);
            i -= 1;
        }
        true
    }

    /// Returns `true` if the set contains `value`. O(log n).
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.buf
            .binary_search_by(|probe| probe.borrow().cmp(value))
            .is_ok()
    }
}

impl<T> SortedVecSet<T> {
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Iterates the elements in ascending order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.buf.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    pub fn into_vec(self) -> Vec<T> {
        self.buf
    }
}

impl<T: Ord> Default for SortedVecSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for SortedVecSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.buf.iter()).finish()
    }
}

impl<T: Ord> FromIterator<T> for SortedVecSet<T> {
    /// Collects everything first and builds with [`from_unsorted`](SortedVecSet::from_unsorted).
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_unsorted(iter.into_iter().collect())
    }
}

impl<T: Ord> Extend<T> for SortedVecSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> IntoIterator for SortedVecSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SortedVecSet<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.iter()
    }
}
