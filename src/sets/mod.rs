//! Membership containers built in one bulk phase and queried afterwards.
//!
//! [`SortedVecSet`] is a plain sorted, duplicate-free `Vec` that answers lookups by binary
//! search. [`MembershipStrategy`] names the three ways the experiment materializes a set from
//! raw input; two of them produce a `SortedVecSet`, the third a `BTreeSet`.

mod membership;
mod sorted_vec_set;

pub use membership::{
    KEEP_SORTED_MAX_LEN, MEMBERSHIP_SIZES, MembershipIter, MembershipSet, MembershipStrategy,
};
pub use sorted_vec_set::SortedVecSet;
