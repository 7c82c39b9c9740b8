use crate::input::SortInput;
use crate::scenario::Candidate;

/// Insertion sort that locates each element's slot with a forward scan and moves it there with
/// a rotation.
///
/// For every `i` the prefix `v[..i]` is already sorted. The slot is the first position in the
/// prefix whose element compares greater than `v[i]`; rotating `v[slot..=i]` right by one
/// shifts the larger elements up and drops `v[i]` into the slot. The scan only ever walks
/// forward, so this formulation works with forward-only traversal.
///
/// `is_less(a, b)` must return `true` iff `a` orders strictly before `b`.
///
/// ```text
/// for i in 1..len:
///     slot = first j in 0..i where is_less(v[i], v[j]), else i
///     rotate_right(v[slot..=i], 1)
/// ```
pub fn insertion_sort_rotate_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        let (prefix, rest) = v.split_at(i);
        let current = &rest[0];
        let slot = prefix
            .iter()
            .position(|x| is_less(current, x))
            .unwrap_or(i);
        v[slot..=i].rotate_right(1);
    }
}

/// Insertion sort that walks each element backward with adjacent swaps until its predecessor
/// no longer orders after it. Needs to step backward through the slice.
///
/// `is_less(a, b)` must return `true` iff `a` orders strictly before `b`.
pub fn insertion_sort_swap_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && is_less(&v[j], &v[j - 1]) {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Sorts `v` ascending with [`insertion_sort_rotate_by`].
#[inline]
pub fn insertion_sort_rotate<T: Ord>(v: &mut [T]) {
    insertion_sort_rotate_by(v, |a, b| a < b);
}

/// Sorts `v` ascending with [`insertion_sort_swap_by`].
#[inline]
pub fn insertion_sort_swap<T: Ord>(v: &mut [T]) {
    insertion_sort_swap_by(v, |a, b| a < b);
}

/// The insertion sort experiment's candidates, run over the fixed [`SortInput`] datasets.
///
/// Each run copies the dataset into a fresh `Vec` and sorts the copy, so the copy is part of
/// every timed trial just like the sort itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortCandidate {
    Rotate,
    Swap,
}

impl SortCandidate {
    pub const ALL: [SortCandidate; 2] = [SortCandidate::Rotate, SortCandidate::Swap];
}

impl Candidate for SortCandidate {
    type Param = SortInput;
    type Input = &'static [i32];
    type Output = Vec<i32>;

    fn name(&self) -> &'static str {
        match self {
            Self::Rotate => "insertion_sort_rotate",
            Self::Swap => "insertion_sort_swap",
        }
    }

    fn generate(param: &SortInput, _seed: u64) -> &'static [i32] {
        param.dataset()
    }

    fn run(&self, input: &&'static [i32]) -> Vec<i32> {
        let mut v = input.to_vec();
        match self {
            Self::Rotate => insertion_sort_rotate(&mut v),
            Self::Swap => insertion_sort_swap(&mut v),
        }
        v
    }
}
