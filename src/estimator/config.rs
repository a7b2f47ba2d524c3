// ============================================================================
// Estimator Configuration
// Precision policy, digit limits, and iteration budget
// ============================================================================

use crate::estimator::PiEstimator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Limits and Defaults
// ============================================================================

/// Largest supported digit request.
pub const MAX_DIGITS: u32 = 10_000;

/// Guard digits carried beyond the requested precision by the default policy.
///
/// The truncating square roots and divisions each lose less than one unit in
/// the last carried place per iteration; 25 extra digits absorb that over the
/// full iteration budget with a wide margin.
pub const DEFAULT_GUARD_DIGITS: u64 = 25;

/// Smallest guard margin the estimator will accept before refusing to run.
pub const MIN_GUARD_DIGITS: u64 = 10;

/// Iteration safety cap. Quadratic convergence reaches the maximum supported
/// precision in 14 iterations; this bound only catches misconfiguration.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

// ============================================================================
// Precision Policy
// ============================================================================

/// How working precision is chosen for a given digit request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PrecisionPolicy {
    /// Working precision scales with the request: `fractional places +
    /// guard_digits`. Small requests stay cheap.
    Scaled {
        /// Extra fractional digits carried beyond the requested precision
        guard_digits: u64,
    },

    /// One fixed working precision regardless of the request. Simple and
    /// matches a fixed-context decimal environment, but every request pays
    /// for full precision. Requests whose guard margin under this precision
    /// would fall below [`MIN_GUARD_DIGITS`] are rejected.
    Fixed {
        /// Fractional digits carried for every request
        working_digits: u64,
    },
}

impl Default for PrecisionPolicy {
    fn default() -> Self {
        PrecisionPolicy::Scaled {
            guard_digits: DEFAULT_GUARD_DIGITS,
        }
    }
}

// ============================================================================
// Estimator Configuration
// ============================================================================

/// Complete configuration for a [`PiEstimator`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EstimatorConfig {
    /// Largest digit request this estimator will accept
    pub max_digits: u32,

    /// Working-precision policy
    pub precision: PrecisionPolicy,

    /// Iteration safety cap
    pub max_iterations: u32,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            max_digits: MAX_DIGITS,
            precision: PrecisionPolicy::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl EstimatorConfig {
    /// Validate the configuration.
    ///
    /// # Returns
    /// * `Ok(())` if the configuration is usable
    /// * `Err(String)` describing the first problem found
    pub fn validate(&self) -> Result<(), String> {
        if self.max_digits == 0 {
            return Err("max_digits must be at least 1".to_string());
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".to_string());
        }
        match self.precision {
            PrecisionPolicy::Scaled { guard_digits } => {
                if guard_digits < MIN_GUARD_DIGITS {
                    return Err(format!(
                        "guard_digits {} is below the minimum of {}",
                        guard_digits, MIN_GUARD_DIGITS
                    ));
                }
            },
            PrecisionPolicy::Fixed { working_digits } => {
                if working_digits < MIN_GUARD_DIGITS {
                    return Err(format!(
                        "working_digits {} cannot provide the minimum guard margin of {}",
                        working_digits, MIN_GUARD_DIGITS
                    ));
                }
            },
        }
        Ok(())
    }
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating estimators with a fluent API
///
/// # Example
/// ```
/// use pi_estimator::estimator::{PiEstimatorBuilder, PrecisionPolicy};
///
/// let estimator = PiEstimatorBuilder::new()
///     .digit_limit(500)
///     .precision_policy(PrecisionPolicy::Scaled { guard_digits: 40 })
///     .iteration_limit(50)
///     .build()
///     .unwrap();
///
/// assert_eq!(estimator.estimate(10).unwrap(), "3.141592654");
/// ```
#[derive(Debug, Default)]
pub struct PiEstimatorBuilder {
    config: EstimatorConfig,
}

impl PiEstimatorBuilder {
    /// Start from the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the largest digit request to accept
    pub fn digit_limit(mut self, max_digits: u32) -> Self {
        self.config.max_digits = max_digits;
        self
    }

    /// Set the working-precision policy
    pub fn precision_policy(mut self, precision: PrecisionPolicy) -> Self {
        self.config.precision = precision;
        self
    }

    /// Set the iteration safety cap
    pub fn iteration_limit(mut self, max_iterations: u32) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    /// Validate the configuration and build the estimator
    pub fn build(self) -> Result<PiEstimator, String> {
        PiEstimator::with_config(self.config)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EstimatorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_limits() {
        let config = EstimatorConfig {
            max_digits: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = EstimatorConfig {
            max_iterations: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_thin_guard() {
        let config = EstimatorConfig {
            precision: PrecisionPolicy::Scaled { guard_digits: 3 },
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = EstimatorConfig {
            precision: PrecisionPolicy::Fixed { working_digits: 5 },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builder_rejects_invalid() {
        assert!(PiEstimatorBuilder::new().iteration_limit(0).build().is_err());
    }

    #[test]
    fn test_builder_defaults() {
        let estimator = PiEstimatorBuilder::new().build().unwrap();
        assert_eq!(estimator.config().max_digits, MAX_DIGITS);
        assert_eq!(estimator.config().max_iterations, DEFAULT_MAX_ITERATIONS);
    }
}
