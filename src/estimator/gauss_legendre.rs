// ============================================================================
// Gauss-Legendre Estimator
// Core iteration loop producing digits of pi
// ============================================================================

use crate::estimator::config::{EstimatorConfig, PrecisionPolicy, MIN_GUARD_DIGITS};
use crate::estimator::errors::{EstimateError, EstimateResult};
use crate::estimator::PiEstimatorBuilder;
use crate::numeric::{ApDecimal, NumericResult, PrecisionContext};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Iteration State
// ============================================================================

/// The Gauss-Legendre state tuple `(a, b, t, p)`: arithmetic mean, geometric
/// mean, accumulated correction, and power-of-two weight.
///
/// The next state is a pure function of the current one; nothing else feeds
/// the iteration.
struct IterationState {
    a: ApDecimal,
    b: ApDecimal,
    t: ApDecimal,
    p: ApDecimal,
}

impl IterationState {
    /// Initial values `(1, sqrt(1/2), 1/4, 1)` at the context's scale.
    fn initial(ctx: &PrecisionContext) -> NumericResult<Self> {
        Ok(Self {
            a: ctx.from_integer(1),
            b: ctx.ratio(1, 2)?.sqrt()?,
            t: ctx.ratio(1, 4)?,
            p: ctx.from_integer(1),
        })
    }

    /// The pi estimate this state implies: `(a + b)^2 / (4t)`.
    fn estimate(&self, ctx: &PrecisionContext) -> NumericResult<ApDecimal> {
        let sum = self.a.checked_add(&self.b)?;
        let numerator = sum.checked_mul(&sum)?;
        let denominator = ctx.from_integer(4).checked_mul(&self.t)?;
        numerator.checked_div(&denominator)
    }

    /// Advance one Gauss-Legendre step.
    ///
    /// `t` must be updated from the old `a` and the new `a_next`; using two
    /// old or two new values silently destroys convergence.
    fn advance(self, ctx: &PrecisionContext) -> NumericResult<Self> {
        let two = ctx.from_integer(2);
        let a_next = self.a.checked_add(&self.b)?.checked_div(&two)?;
        let b_next = self.a.checked_mul(&self.b)?.sqrt()?;
        let delta = self.a.checked_sub(&a_next)?;
        let correction = self.p.checked_mul(&delta.checked_mul(&delta)?)?;
        let t_next = self.t.checked_sub(&correction)?;
        let p_next = two.checked_mul(&self.p)?;
        Ok(Self {
            a: a_next,
            b: b_next,
            t: t_next,
            p: p_next,
        })
    }
}

// ============================================================================
// Estimation Result
// ============================================================================

/// A completed estimate together with how it was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Estimation {
    /// Decimal string of pi, rounded to the requested precision
    pub value: String,

    /// Iterations used before successive estimates agreed
    pub iterations: u32,

    /// Fractional digits carried during the computation
    pub working_precision: u64,
}

// ============================================================================
// Pi Estimator
// ============================================================================

/// Arbitrary-precision pi estimator using the Gauss-Legendre iteration.
///
/// Each call owns its full iteration state and precision context, so
/// concurrent calls (even with different precisions) need no coordination.
pub struct PiEstimator {
    config: EstimatorConfig,
}

impl Default for PiEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl PiEstimator {
    /// Create an estimator with the default configuration.
    pub fn new() -> Self {
        Self {
            config: EstimatorConfig::default(),
        }
    }

    /// Create an estimator from a validated configuration.
    ///
    /// # Returns
    /// * `Ok(PiEstimator)` if the configuration is usable
    /// * `Err(String)` describing the first problem found
    pub fn with_config(config: EstimatorConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Start building an estimator with a fluent API.
    pub fn builder() -> PiEstimatorBuilder {
        PiEstimatorBuilder::new()
    }

    /// The active configuration.
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Estimate pi to `digits` significant digits.
    ///
    /// `digits` counts the leading 3: the result carries `digits - 1`
    /// fractional places, rounded half to even. `estimate(1)` returns `"3"`
    /// and `estimate(10)` returns `"3.141592654"`. Callers pass the digit
    /// count they want to see; there is no pre-decrement convention.
    ///
    /// # Errors
    /// - `InvalidDigits` if `digits` is zero or above the configured maximum
    /// - `PrecisionInsufficient` if the precision policy cannot provide the
    ///   minimum guard margin for this request
    /// - `ConvergenceFailure` if the iteration budget runs out (unreachable
    ///   for supported digit counts under a sane configuration)
    pub fn estimate(&self, digits: u32) -> EstimateResult<String> {
        Ok(self.estimate_detailed(digits)?.value)
    }

    /// Like [`estimate`](Self::estimate), returning iteration statistics
    /// alongside the digit string.
    pub fn estimate_detailed(&self, digits: u32) -> EstimateResult<Estimation> {
        if digits < 1 || digits > self.config.max_digits {
            return Err(EstimateError::InvalidDigits {
                requested: digits,
                max: self.config.max_digits,
            });
        }

        // digits counts significant digits including the leading 3
        let frac_places = u64::from(digits) - 1;
        let working_scale = self.working_scale_for(frac_places)?;
        let ctx = PrecisionContext::new(working_scale);

        let tolerance = ctx.unit(frac_places)?;
        let mut state = IterationState::initial(&ctx)?;
        let mut previous: Option<ApDecimal> = None;

        for iteration in 1..=self.config.max_iterations {
            let current = state.estimate(&ctx)?;

            if let Some(prev) = previous.as_ref() {
                if prev.abs_diff(&current)? < tolerance {
                    tracing::debug!(
                        "converged after {} iterations at working scale {}",
                        iteration,
                        working_scale
                    );
                    // The one and only rounding step
                    let value = current.quantize(frac_places).to_string();
                    return Ok(Estimation {
                        value,
                        iterations: iteration,
                        working_precision: working_scale,
                    });
                }
            }

            previous = Some(current);
            state = state.advance(&ctx)?;
        }

        tracing::warn!(
            "estimate for {} digits exhausted {} iterations without converging",
            digits,
            self.config.max_iterations
        );
        Err(EstimateError::ConvergenceFailure {
            iterations: self.config.max_iterations,
        })
    }

    /// Working scale for a request, per the precision policy.
    fn working_scale_for(&self, frac_places: u64) -> EstimateResult<u64> {
        let working_digits = match self.config.precision {
            PrecisionPolicy::Scaled { guard_digits } => frac_places + guard_digits,
            PrecisionPolicy::Fixed { working_digits } => working_digits,
        };
        let required = frac_places + MIN_GUARD_DIGITS;
        if working_digits < required {
            return Err(EstimateError::PrecisionInsufficient {
                working_digits,
                required,
            });
        }
        Ok(working_digits)
    }
}

// ============================================================================
// Tests
// ============================================================================
