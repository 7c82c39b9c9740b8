//! Insertion sort candidates.
//!
//! Two formulations of the same algorithm:
//!
//! | Candidate | Finds the slot by | Moves the element by | Traversal needed |
//! |-----------|-------------------|----------------------|------------------|
//! | [`insertion_sort_rotate_by`] | forward linear scan | `rotate_right(1)` of the prefix tail | forward only |
//! | [`insertion_sort_swap_by`] | walking backward | adjacent swaps | bidirectional |

mod insertion;

pub use insertion::{
    SortCandidate, insertion_sort_rotate, insertion_sort_rotate_by, insertion_sort_swap,
    insertion_sort_swap_by,
};
