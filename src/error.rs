//! Error types shared by the candidates and the scenario matrix.

use thiserror::Error;

/// Result type for matrix and configuration operations.
pub type Result<T> = std::result::Result<T, ExperimentError>;

/// A push was rejected because the fixed-capacity stack is full.
///
/// Returned by [`BoundedStack`](crate::BoundedStack) instead of writing past the end of its
/// inline buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("stack capacity of {capacity} exceeded")]
pub struct CapacityExceeded {
    /// Compile-time capacity of the stack that overflowed.
    pub capacity: usize,
}

/// A harness setting read from the environment could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Errors surfaced while preparing or checking a scenario matrix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExperimentError {
    /// Two candidates produced different results for the same input.
    #[error("group {group}: {candidate} diverges from {baseline} for input {param}")]
    Divergence {
        group: &'static str,
        param: String,
        baseline: &'static str,
        candidate: &'static str,
    },

    #[error(transparent)]
    Capacity(#[from] CapacityExceeded),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ExperimentError {
    /// Returns `true` if the error means the timing comparison would be meaningless.
    #[must_use]
    pub fn is_divergence(&self) -> bool {
        matches!(self, Self::Divergence { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_capacity() {
        let err = CapacityExceeded { capacity: 8 };
        assert_eq!(err.to_string(), "stack capacity of 8 exceeded");

        let wrapped: ExperimentError = err.into();
        assert_eq!(wrapped.to_string(), "stack capacity of 8 exceeded");
        assert!(!wrapped.is_divergence());
    }

    #[test]
    fn test_error_display_divergence() {
        let err = ExperimentError::Divergence {
            group: "sort",
            param: "small_random".to_string(),
            baseline: "rotate",
            candidate: "swap",
        };
        assert_eq!(
            err.to_string(),
            "group sort: swap diverges from rotate for input small_random"
        );
        assert!(err.is_divergence());
    }

    #[test]
    fn test_error_display_config() {
        let err = ConfigError::Invalid {
            var: "SHOOTOUT_SEED",
            value: "abc".to_string(),
            reason: "not an unsigned integer".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value \"abc\" for SHOOTOUT_SEED: not an unsigned integer"
        );
    }
}
