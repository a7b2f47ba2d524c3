// ============================================================================
// Estimator Module
// Gauss-Legendre pi estimation with configurable precision policy
// ============================================================================
//
// This module provides:
// - PiEstimator: the bounded Gauss-Legendre convergence loop
// - EstimatorConfig / PrecisionPolicy: digit limits and working precision
// - EstimateError: typed failures (none of them fatal to the process)
//
// Design principles:
// - Each call owns its iteration state and precision context exclusively
// - Stopping compares successive estimates, never a known value of pi
// - Rounding happens exactly once, on the converged estimate

mod config;
mod errors;
mod gauss_legendre;

pub use config::{
    EstimatorConfig, PiEstimatorBuilder, PrecisionPolicy, DEFAULT_GUARD_DIGITS,
    DEFAULT_MAX_ITERATIONS, MAX_DIGITS, MIN_GUARD_DIGITS,
};
pub use errors::{EstimateError, EstimateResult};
pub use gauss_legendre::{Estimation, PiEstimator};
