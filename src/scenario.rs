//! Candidates and the scenario matrix that drives them.
//!
//! A [`ScenarioMatrix`] is the cross product of a set of [`Candidate`]s and a list of input
//! parameters. The bench targets walk [`ScenarioMatrix::scenarios`] to register one timed
//! function per pair, after [`ScenarioMatrix::verify`] has confirmed that every candidate
//! agrees on every input. A timing comparison between candidates that compute different
//! things is meaningless, so the benches refuse to run when verification fails.

use crate::error::{ExperimentError, Result};
use core::fmt;

/// One alternative implementation of a benchmarked operation.
///
/// Implementors are usually fieldless enums with one variant per alternative, so a matrix can
/// hold all of them in a single `Vec`.
pub trait Candidate {
    /// Scenario parameter, e.g. an input size or a dataset tag.
    type Param: Clone + fmt::Debug + fmt::Display;
    /// Dataset built from a parameter before timing starts.
    type Input;
    /// Result compared across candidates.
    type Output: PartialEq + fmt::Debug;

    /// Stable name used in benchmark ids.
    fn name(&self) -> &'static str;

    /// Builds the dataset for `param`. Must be deterministic for a given `seed`.
    fn generate(param: &Self::Param, seed: u64) -> Self::Input;

    /// Returns `false` for parameters this candidate should not be timed on, typically because
    /// its complexity makes large inputs impractical.
    fn supports(&self, _param: &Self::Param) -> bool {
        true
    }

    /// Runs the candidate. `input` is shared and must not be observably changed; a candidate that
    /// works in place copies it first.
    fn run(&self, input: &Self::Input) -> Self::Output;
}

/// A single (candidate, parameter) pair of a matrix.
pub struct Scenario<'a, C: Candidate> {
    pub candidate: &'a C,
    pub param: &'a C::Param,
}

impl<C: Candidate> Scenario<'_, C> {
    /// Benchmark id of the form `"<candidate>/<param>"`.
    pub fn id(&self) -> String {
        format!("{}/{}", self.candidate.name(), self.param)
    }

    /// Builds the input for this scenario.
    pub fn input(&self, seed: u64) -> C::Input {
        C::generate(self.param, seed)
    }

    /// Builds the input and runs the candidate on it once.
    pub fn run_once(&self, seed: u64) -> C::Output {
        self.candidate.run(&self.input(seed))
    }
}

impl<C: Candidate> Clone for Scenario<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Candidate> Copy for Scenario<'_, C> {}

impl<C: Candidate> fmt::Debug for Scenario<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scenario")
            .field("candidate", &self.candidate.name())
            .field("param", self.param)
            .finish()
    }
}

/// Cross product of candidates and parameters for one experiment group.
///
/// # Pseudo-code
/// ```text
/// scenarios():
///     for candidate in candidates:
///         for param in params:
///             if candidate.supports(param): yield (candidate, param)
///
/// verify():
///     for param in params:
///         input = generate(param, seed)
///         baseline = first supporting candidate's run(input)
///         every other supporting candidate must produce == baseline
/// ```
pub struct ScenarioMatrix<C: Candidate> {
    group: &'static str,
    seed: u64,
    candidates: Vec<C>,
    params: Vec<C::Param>,
}

impl<C: Candidate> ScenarioMatrix<C> {
    /// Creates an empty matrix for `group` with seed `1`.
    pub fn new(group: &'static str) -> Self {
        Self {
            group,
            seed: 1,
            candidates: Vec::new(),
            params: Vec::new(),
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn candidate(mut self, candidate: C) -> Self {
        self.candidates.push(candidate);
        self
    }

    pub fn candidates<I: IntoIterator<Item = C>>(mut self, candidates: I) -> Self {
        self.candidates.extend(candidates);
        self
    }

    pub fn param(mut self, param: C::Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn params<I: IntoIterator<Item = C::Param>>(mut self, params: I) -> Self {
        self.params.extend(params);
        self
    }

    #[inline]
    pub fn group(&self) -> &'static str {
        self.group
    }

    #[inline]
    pub fn seed_value(&self) -> u64 {
        self.seed
    }

    pub fn candidate_list(&self) -> &[C] {
        &self.candidates
    }

    pub fn param_list(&self) -> &[C::Param] {
        &self.params
    }

    /// Iterates every supported (candidate, param) pair, candidate-major.
    pub fn scenarios(&self) -> impl Iterator<Item = Scenario<'_, C>> + '_ {
        self.candidates.iter().flat_map(move |candidate| {
            self.params
                .iter()
                .filter(move |param| candidate.supports(param))
                .map(move |param| Scenario { candidate, param })
        })
    }

    /// Number of scenarios [`scenarios`](Self::scenarios) yields.
    pub fn len(&self) -> usize {
        self.scenarios().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Runs every supporting candidate once per parameter and checks they agree.
    ///
    /// Returns the number of pairwise comparisons made against each parameter's baseline.
    ///
    /// # Errors
    /// [`ExperimentError::Divergence`] naming the first candidate whose output differs from the
    /// baseline (the first supporting candidate in registration order).
    pub fn verify(&self) -> Result<usize> {
        let mut comparisons = 0;

        for param in &self.params {
            let input = C::generate(param, self.seed);
            let mut runs = self
                .candidates
                .iter()
                .filter(|c| c.supports(param))
                .map(|c| (c, c.run(&input)));

            let Some((base, expected)) = runs.next() else {
                continue;
            };
            for (candidate, output) in runs {
                comparisons += 1;
                if output != expected {
                    tracing::debug!(
                        group = self.group,
                        %param,
                        baseline = base.name(),
                        candidate = candidate.name(),
                        ?expected,
                        actual = ?output,
                        "candidate output differs"
                    );
                    return Err(ExperimentError::Divergence {
                        group: self.group,
                        param: param.to_string(),
                        baseline: base.name(),
                        candidate: candidate.name(),
                    });
                }
            }
            tracing::debug!(group = self.group, %param, "candidates agree");
        }

        tracing::info!(
            group = self.group,
            params = self.params.len(),
            comparisons,
            "scenario matrix verified"
        );
        Ok(comparisons)
    }
}
