//! # Algo Shootout
//!
//! Side-by-side micro-benchmarks of small algorithmic choices. Each experiment offers a few
//! interchangeable [`Candidate`]s that compute the same thing in different ways, and a
//! [`ScenarioMatrix`] that crosses them with input parameters for the criterion benches under
//! `benches/`.
//!
//! | Experiment | Candidates | Parameter |
//! |------------|------------|-----------|
//! | Insertion sort | [`SortCandidate`]: rotate into place vs swap backward | [`SortInput`] dataset tag |
//! | Membership container | [`MembershipStrategy`]: sort + dedup, keep sorted, `BTreeSet` | input length |
//! | Recursion elimination | [`CountingVariant`]: call stack vs five explicit [`Stack`]s | recursion input `n` |
//!
//! ## Key Properties
//!
//! * **Equivalence first:** [`ScenarioMatrix::verify`] runs every candidate on every input and
//!   rejects the matrix if any two disagree. The benches only time verified matrices.
//! * **No hidden state:** candidates take their input by reference and return their result;
//!   counters are threaded through arguments, never shared between trials.
//! * **Checked fixed capacity:** [`BoundedStack`] stores up to `N` elements inline and returns
//!   [`CapacityExceeded`] instead of writing past its end.
//! * **Reproducible inputs:** generated datasets come from a seeded RNG; the sorting datasets
//!   are literals.
//!
//! ## Examples
//!
//! ### Checking candidates agree
//!
//! ```rust
//! use algo_shootout::{CountingVariant, ScenarioMatrix};
//!
//! let matrix = ScenarioMatrix::new("recursion")
//!     .candidates(CountingVariant::ALL)
//!     .params([0, 1, 2, 4, 1024]);
//!
//! // Five parameters, five comparisons against the recursive baseline each.
//! assert_eq!(matrix.verify(), Ok(25));
//! ```
//!
//! ### Fixed-capacity stack
//!
//! ```rust
//! use algo_shootout::{BoundedStack, CapacityExceeded, count_with_stack};
//!
//! // Counting n = 1024 needs 12 slots.
//! assert_eq!(count_with_stack(1024, BoundedStack::<u64, 12>::new()), Ok(2047));
//! assert_eq!(
//!     count_with_stack(1024, BoundedStack::<u64, 8>::new()),
//!     Err(CapacityExceeded { capacity: 8 })
//! );
//! ```
//!
//! ### Sorted vector as a set
//!
//! ```rust
//! use algo_shootout::SortedVecSet;
//!
//! let set = SortedVecSet::from_unsorted(vec![42, 7, 42, 19]);
//! assert_eq!(set.as_slice(), &[7, 19, 42]);
//! assert!(set.contains(&19));
//! ```

// --- Module Declarations ---

pub mod config;
pub mod error;
pub mod input;
pub mod recursion;
pub mod scenario;
pub mod sets;
pub mod sort;
pub mod stacks;

// --- Re-exports ---

pub use config::HarnessConfig;
pub use error::{CapacityExceeded, ConfigError, ExperimentError, Result};
pub use input::{InputShape, SortInput, random_ints, shaped_ints, with_duplicates};
pub use recursion::{
    CountingVariant, MAX_RECURSION_INPUT, RECURSION_STACK_CAPACITY, count_recursive,
    count_with_stack, required_capacity,
};
pub use scenario::{Candidate, Scenario, ScenarioMatrix};
pub use sets::{MembershipSet, MembershipStrategy, SortedVecSet};
pub use sort::{
    SortCandidate, insertion_sort_rotate, insertion_sort_rotate_by, insertion_sort_swap,
    insertion_sort_swap_by,
};
pub use stacks::{BoundedStack, Stack};
