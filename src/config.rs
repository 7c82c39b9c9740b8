//! Harness configuration.
//!
//! Every setting has a default so the benches run with no environment at all. The
//! `SHOOTOUT_*` variables only override; there are no configuration files.

use crate::error::ConfigError;
use std::time::Duration;

pub const ENV_SEED: &str = "SHOOTOUT_SEED";
pub const ENV_SAMPLE_SIZE: &str = "SHOOTOUT_SAMPLE_SIZE";
pub const ENV_MEASUREMENT_MS: &str = "SHOOTOUT_MEASUREMENT_MS";
pub const ENV_WARM_UP_MS: &str = "SHOOTOUT_WARM_UP_MS";

/// Criterion refuses to run with fewer samples than this.
pub const MIN_SAMPLE_SIZE: usize = 10;

/// Settings shared by every bench target.
///
/// | Field | Default | Meaning |
/// |-------|---------|---------|
/// | `seed` | `1` | Seed for generated datasets |
/// | `sample_size` | `50` | Criterion samples per scenario |
/// | `measurement_time` | 3 s | Time spent measuring each scenario |
/// | `warm_up_time` | 1 s | Time spent warming up each scenario |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    pub seed: u64,
    pub sample_size: usize,
    pub measurement_time: Duration,
    pub warm_up_time: Duration,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            sample_size: 50,
            measurement_time: Duration::from_secs(3),
            warm_up_time: Duration::from_secs(1),
        }
    }
}

impl HarnessConfig {
    /// Builds the defaults and overlays any `SHOOTOUT_*` variables set in the process
    /// environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_SEED) {
            config.seed = parse_u64(ENV_SEED, &value)?;
        }
        if let Some(value) = lookup(ENV_SAMPLE_SIZE) {
            config.sample_size = parse_u64(ENV_SAMPLE_SIZE, &value)? as usize;
        }
        if let Some(value) = lookup(ENV_MEASUREMENT_MS) {
            config.measurement_time = Duration::from_millis(parse_u64(ENV_MEASUREMENT_MS, &value)?);
        }
        if let Some(value) = lookup(ENV_WARM_UP_MS) {
            config.warm_up_time = Duration::from_millis(parse_u64(ENV_WARM_UP_MS, &value)?);
        }

        config.validate()?;
        Ok(config)
    }

    /// Checks the preconditions criterion asserts on, so a bad override is reported
    /// instead of panicking inside the bench runner.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_size < MIN_SAMPLE_SIZE {
            return Err(ConfigError::Invalid {
                var: ENV_SAMPLE_SIZE,
                value: self.sample_size.to_string(),
                reason: format!("must be at least {MIN_SAMPLE_SIZE}"),
            });
        }
        if self.measurement_time.is_zero() {
            return Err(ConfigError::Invalid {
                var: ENV_MEASUREMENT_MS,
                value: "0".to_string(),
                reason: "must be non-zero".to_string(),
            });
        }
        if self.warm_up_time.is_zero() {
            return Err(ConfigError::Invalid {
                var: ENV_WARM_UP_MS,
                value: "0".to_string(),
                reason: "must be non-zero".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_u64(var: &'static str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        value: value.to_string(),
        reason: "not an unsigned integer".to_string(),
    })
}
