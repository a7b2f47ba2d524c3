// ============================================================================
// Pi Estimator Library
// Arbitrary-precision digits of pi via the Gauss-Legendre (AGM) iteration
// ============================================================================

//! # Pi Estimator
//!
//! Computes decimal digits of pi to a requested precision (1 to 10,000
//! significant digits) with the Gauss-Legendre arithmetic-geometric-mean
//! iteration, which roughly doubles the number of correct digits every step.
//!
//! ## Features
//!
//! - **Quadratic convergence**: 10,000 digits in 14 iterations
//! - **Guard-digit precision policy**: working precision scales with the
//!   request (a fixed-precision mode is also available)
//! - **Single final rounding**: intermediates truncate at working scale;
//!   the converged estimate is quantized half-to-even exactly once
//! - **No shared state**: every call owns its iteration state, so calls can
//!   run concurrently without coordination
//!
//! ## Example
//!
//! ```rust
//! use pi_estimator::prelude::*;
//!
//! let estimator = PiEstimator::new();
//!
//! // `digits` counts significant digits, including the leading 3
//! assert_eq!(estimator.estimate(1).unwrap(), "3");
//! assert_eq!(estimator.estimate(10).unwrap(), "3.141592654");
//!
//! // Iteration statistics come along when asked
//! let detailed = estimator.estimate_detailed(1000).unwrap();
//! assert!(detailed.iterations <= 15);
//! ```

pub mod estimator;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::estimator::{
        EstimateError, EstimateResult, Estimation, EstimatorConfig, PiEstimator,
        PiEstimatorBuilder, PrecisionPolicy,
    };
    pub use crate::numeric::{ApDecimal, NumericError, PrecisionContext};
}
