//! Benchmarks: building a lookup set from raw input.
//!
//! | Candidate | Container | Sizes |
//! |-----------|-----------|-------|
//! | `vector_insert_sort` | `Vec`, sorted and deduplicated once | 8 .. 1M |
//! | `vector_insert_keep_sorted` | `Vec`, kept sorted on every insert | 8 .. 5000 |
//! | `set_insert` | `BTreeSet` | 8 .. 1M |
//!
//! Only construction is timed. Lookups are O(log n) in every container.

mod common;

use algo_shootout::sets::MEMBERSHIP_SIZES;
use algo_shootout::{MembershipStrategy, ScenarioMatrix};
use common::harness;
use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};

fn bench_membership(c: &mut Criterion) {
    let config = harness::config();
    let matrix = ScenarioMatrix::new("membership")
        .seed(config.seed)
        .candidates(MembershipStrategy::ALL)
        .params(MEMBERSHIP_SIZES);

    // Million-element builds take tens of milliseconds per iteration.
    harness::run_matrix(c, &matrix, SamplingMode::Flat);
}

criterion_group! {
    name = benches;
    config = harness::criterion();
    targets = bench_membership
}
criterion_main!(benches);
