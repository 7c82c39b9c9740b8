//! Criterion glue for [`ScenarioMatrix`].
//!
//! Every bench target builds its matrix, then hands it to [`run_matrix`], which verifies that
//! the candidates agree and registers one benchmark per scenario.

use algo_shootout::{Candidate, HarnessConfig, ScenarioMatrix};
use criterion::{BenchmarkId, Criterion, SamplingMode, black_box};
use tracing_subscriber::EnvFilter;

/// Installs a stderr subscriber filtered by `RUST_LOG`. Safe to call more than once.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Loads the harness configuration, falling back to the defaults on a bad override.
pub fn config() -> HarnessConfig {
    init_tracing();
    HarnessConfig::from_env().unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring harness overrides");
        HarnessConfig::default()
    })
}

/// Criterion instance configured from [`config`].
pub fn criterion() -> Criterion {
    let config = config();
    Criterion::default()
        .sample_size(config.sample_size)
        .measurement_time(config.measurement_time)
        .warm_up_time(config.warm_up_time)
}

/// Verifies `matrix`, then benchmarks each of its scenarios in one criterion group.
///
/// Inputs are generated before timing starts. Each timed call gets the same shared input;
/// candidates that mutate copy it themselves.
pub fn run_matrix<C: Candidate>(
    c: &mut Criterion,
    matrix: &ScenarioMatrix<C>,
    sampling: SamplingMode,
) {
    if let Err(err) = matrix.verify() {
        panic!("refusing to time an unverified matrix: {err}");
    }

    let mut group = c.benchmark_group(matrix.group());
    group.sampling_mode(sampling);

    for scenario in matrix.scenarios() {
        tracing::debug!(group = matrix.group(), id = %scenario.id(), "registering scenario");
        let input = scenario.input(matrix.seed_value());
        group.bench_with_input(
            BenchmarkId::new(scenario.candidate.name(), scenario.param),
            &input,
            |b, input| b.iter(|| black_box(scenario.candidate.run(black_box(input)))),
        );
    }
    group.finish();
}
