// ============================================================================
// Precision Context
// Per-call working-precision scope for decimal arithmetic
// ============================================================================

use super::ap_decimal::{pow10, ApDecimal};
use super::errors::{NumericError, NumericResult};

/// Working-precision scope for one computation.
///
/// Carries the number of fractional decimal digits every value in the
/// computation holds. Each caller creates its own context, so two concurrent
/// computations with different precisions cannot interfere; there is no
/// process-global precision setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrecisionContext {
    working_scale: u64,
}

impl PrecisionContext {
    /// Create a context carrying `working_scale` fractional digits.
    pub fn new(working_scale: u64) -> Self {
        Self { working_scale }
    }

    /// Number of fractional digits carried by values in this context.
    pub fn working_scale(&self) -> u64 {
        self.working_scale
    }

    /// An exact integer at this context's scale.
    pub fn from_integer(&self, value: i64) -> ApDecimal {
        ApDecimal::from_integer(value, self.working_scale)
    }

    /// The exact-as-carried ratio `numerator / denominator` at this scale.
    ///
    /// # Errors
    /// Returns `DivisionByZero` for a zero denominator.
    pub fn ratio(&self, numerator: i64, denominator: i64) -> NumericResult<ApDecimal> {
        self.from_integer(numerator)
            .checked_div(&self.from_integer(denominator))
    }

    /// The value `10^-frac_places` expressed at this context's scale.
    ///
    /// # Errors
    /// Returns `PrecisionLoss` if `frac_places` exceeds the working scale:
    /// the unit would be smaller than the context can represent.
    pub fn unit(&self, frac_places: u64) -> NumericResult<ApDecimal> {
        if frac_places > self.working_scale {
            return Err(NumericError::PrecisionLoss);
        }
        Ok(ApDecimal::new(
            pow10(self.working_scale - frac_places),
            self.working_scale,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_at_scale() {
        let ctx = PrecisionContext::new(8);
        assert_eq!(ctx.from_integer(2).to_string(), "2.00000000");
        assert_eq!(ctx.ratio(1, 4).unwrap().to_string(), "0.25000000");
    }

    #[test]
    fn test_unit() {
        let ctx = PrecisionContext::new(6);
        assert_eq!(ctx.unit(2).unwrap().to_string(), "0.010000");
        assert_eq!(ctx.unit(0).unwrap().to_string(), "1.000000");
        assert_eq!(ctx.unit(7), Err(NumericError::PrecisionLoss));
    }

    #[test]
    fn test_contexts_are_independent() {
        let narrow = PrecisionContext::new(4);
        let wide = PrecisionContext::new(12);
        assert_eq!(narrow.from_integer(1).scale(), 4);
        assert_eq!(wide.from_integer(1).scale(), 12);
    }
}
