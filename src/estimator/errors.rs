// ============================================================================
// Estimator Errors
// Error types for the pi estimation contract
// ============================================================================

use crate::numeric::NumericError;
use std::fmt;

/// Errors that can occur while estimating pi.
///
/// All of these are recoverable from the caller's point of view: the
/// estimator holds no shared state, so a failed call leaves nothing behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimateError {
    /// Requested digit count is zero or above the configured maximum
    InvalidDigits { requested: u32, max: u32 },
    /// Iteration budget exhausted before successive estimates agreed
    ConvergenceFailure { iterations: u32 },
    /// Working precision leaves too thin a guard margin over the request
    PrecisionInsufficient { working_digits: u64, required: u64 },
    /// Underlying decimal arithmetic failed
    Numeric(NumericError),
}

impl fmt::Display for EstimateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimateError::InvalidDigits { requested, max } => write!(
                f,
                "invalid digit count {}: must be between 1 and {}",
                requested, max
            ),
            EstimateError::ConvergenceFailure { iterations } => write!(
                f,
                "estimate failed to converge within {} iterations",
                iterations
            ),
            EstimateError::PrecisionInsufficient {
                working_digits,
                required,
            } => write!(
                f,
                "working precision of {} digits is insufficient: at least {} required",
                working_digits, required
            ),
            EstimateError::Numeric(e) => write!(f, "numeric error: {}", e),
        }
    }
}

impl std::error::Error for EstimateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EstimateError::Numeric(e) => Some(e),
            _ => None,
        }
    }
}

impl From<NumericError> for EstimateError {
    fn from(e: NumericError) -> Self {
        EstimateError::Numeric(e)
    }
}

/// Result type alias for estimation operations
pub type EstimateResult<T> = Result<T, EstimateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            EstimateError::InvalidDigits {
                requested: 0,
                max: 10_000
            }
            .to_string(),
            "invalid digit count 0: must be between 1 and 10000"
        );
        assert_eq!(
            EstimateError::ConvergenceFailure { iterations: 100 }.to_string(),
            "estimate failed to converge within 100 iterations"
        );
    }

    #[test]
    fn test_numeric_wrapping() {
        let e: EstimateError = NumericError::DivisionByZero.into();
        assert_eq!(e, EstimateError::Numeric(NumericError::DivisionByZero));
        assert!(std::error::Error::source(&e).is_some());
    }
}
