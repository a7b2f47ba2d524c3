// ============================================================================
// Arbitrary-Precision Decimal
// Scaled-integer decimal arithmetic with runtime-configurable precision
// ============================================================================

use super::errors::{NumericError, NumericResult};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;

/// Compute 10^exp as a BigInt.
pub(crate) fn pow10(exp: u64) -> BigInt {
    num_traits::pow(BigInt::from(10u8), exp as usize)
}

/// Arbitrary-precision decimal number with a runtime scale.
///
/// Internally stores `value * 10^scale` as a `BigInt`, where `scale` is the
/// number of fractional decimal digits carried. All arithmetic between two
/// values requires identical scales; results stay at that scale, with
/// multiplication, division, and square root truncated toward zero in the
/// last carried digit. Callers are expected to carry guard digits so that the
/// truncation error never reaches the digits they report.
///
/// # Example
/// ```ignore
/// use pi_estimator::numeric::ApDecimal;
///
/// let one = ApDecimal::from_integer(1, 20);
/// let two = ApDecimal::from_integer(2, 20);
/// let half = one.checked_div(&two)?;        // 0.50000000000000000000
/// let root = half.sqrt()?;                  // 0.70710678118654752440
/// ```
#[derive(Clone)]
pub struct ApDecimal {
    mantissa: BigInt,
    scale: u64,
}

impl ApDecimal {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a raw mantissa already scaled by `10^scale`.
    pub fn new(mantissa: BigInt, scale: u64) -> Self {
        Self { mantissa, scale }
    }

    /// Create an exact integer value at the given scale.
    pub fn from_integer(value: i64, scale: u64) -> Self {
        Self {
            mantissa: BigInt::from(value) * pow10(scale),
            scale,
        }
    }

    /// Zero at the given scale.
    pub fn zero(scale: u64) -> Self {
        Self {
            mantissa: BigInt::zero(),
            scale,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The raw scaled mantissa (`value * 10^scale`).
    pub fn mantissa(&self) -> &BigInt {
        &self.mantissa
    }

    /// Number of fractional decimal digits carried.
    pub fn scale(&self) -> u64 {
        self.scale
    }

    /// Check if value is zero.
    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    /// Check if value is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.mantissa.is_positive()
    }

    /// Check if value is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.mantissa.is_negative()
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self {
            mantissa: self.mantissa.abs(),
            scale: self.scale,
        }
    }

    fn check_scale(&self, rhs: &Self) -> NumericResult<()> {
        if self.scale == rhs.scale {
            Ok(())
        } else {
            Err(NumericError::ScaleMismatch)
        }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition. Exact.
    ///
    /// # Errors
    /// Returns `ScaleMismatch` if the operands carry different scales.
    pub fn checked_add(&self, rhs: &Self) -> NumericResult<Self> {
        self.check_scale(rhs)?;
        Ok(Self {
            mantissa: &self.mantissa + &rhs.mantissa,
            scale: self.scale,
        })
    }

    /// Checked subtraction. Exact.
    ///
    /// # Errors
    /// Returns `ScaleMismatch` if the operands carry different scales.
    pub fn checked_sub(&self, rhs: &Self) -> NumericResult<Self> {
        self.check_scale(rhs)?;
        Ok(Self {
            mantissa: &self.mantissa - &rhs.mantissa,
            scale: self.scale,
        })
    }

    /// Checked multiplication, truncated toward zero at the common scale.
    ///
    /// The full product is formed at scale `2 * scale` and scaled back down,
    /// discarding digits below the last carried place. The discarded amount
    /// is below one unit in the last place.
    ///
    /// # Errors
    /// Returns `ScaleMismatch` if the operands carry different scales.
    pub fn checked_mul(&self, rhs: &Self) -> NumericResult<Self> {
        self.check_scale(rhs)?;
        let product = &self.mantissa * &rhs.mantissa;
        // BigInt division truncates toward zero, like primitive integers
        Ok(Self {
            mantissa: product / pow10(self.scale),
            scale: self.scale,
        })
    }

    /// Checked division, truncated toward zero at the common scale.
    ///
    /// The numerator is pre-scaled by `10^scale` so the quotient lands back
    /// at the common scale.
    ///
    /// # Errors
    /// - `ScaleMismatch` if the operands carry different scales
    /// - `DivisionByZero` if `rhs` is zero
    pub fn checked_div(&self, rhs: &Self) -> NumericResult<Self> {
        self.check_scale(rhs)?;
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        let numerator = &self.mantissa * pow10(self.scale);
        Ok(Self {
            mantissa: numerator / &rhs.mantissa,
            scale: self.scale,
        })
    }

    /// Square root, truncated toward zero at the value's scale.
    ///
    /// Computes the integer square root of `mantissa * 10^scale`, which is
    /// the root's mantissa at the same scale. The result is exact in all but
    /// the last carried digit.
    ///
    /// # Errors
    /// Returns `NegativeSquareRoot` if the value is negative.
    pub fn sqrt(&self) -> NumericResult<Self> {
        if self.is_negative() {
            return Err(NumericError::NegativeSquareRoot);
        }
        let scaled = &self.mantissa * pow10(self.scale);
        Ok(Self {
            mantissa: scaled.sqrt(),
            scale: self.scale,
        })
    }

    /// Absolute difference `|self - rhs|`.
    ///
    /// # Errors
    /// Returns `ScaleMismatch` if the operands carry different scales.
    pub fn abs_diff(&self, rhs: &Self) -> NumericResult<Self> {
        Ok(self.checked_sub(rhs)?.abs())
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    /// Rescale to exactly `places` fractional digits.
    ///
    /// Scaling up pads with zeros and is exact. Scaling down rounds half to
    /// even on the discarded digits. This is the one place rounding happens;
    /// everything else truncates and relies on guard digits.
    pub fn quantize(&self, places: u64) -> Self {
        if places >= self.scale {
            return Self {
                mantissa: &self.mantissa * pow10(places - self.scale),
                scale: places,
            };
        }

        let divisor = pow10(self.scale - places);
        let magnitude = self.mantissa.abs();
        let (mut quotient, remainder) = magnitude.div_rem(&divisor);

        // Round half to even on the discarded tail
        let twice = &remainder + &remainder;
        if twice > divisor || (twice == divisor && quotient.is_odd()) {
            quotient += 1;
        }

        let mantissa = if self.mantissa.is_negative() {
            -quotient
        } else {
            quotient
        };
        Self {
            mantissa,
            scale: places,
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialEq for ApDecimal {
    /// Representation equality: both mantissa and scale must match.
    fn eq(&self, other: &Self) -> bool {
        self.scale == other.scale && self.mantissa == other.mantissa
    }
}

impl Eq for ApDecimal {}

impl PartialOrd for ApDecimal {
    /// Ordering is only defined between values at the same scale.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.scale == other.scale {
            Some(self.mantissa.cmp(&other.mantissa))
        } else {
            None
        }
    }
}

impl Neg for ApDecimal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            mantissa: -self.mantissa,
            scale: self.scale,
        }
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for ApDecimal {
    type Err = NumericError;

    /// Parse from a decimal string at the string's natural scale.
    ///
    /// # Examples
    /// - "3" -> mantissa 3, scale 0
    /// - "3.14" -> mantissa 314, scale 2
    /// - "-0.001" -> mantissa -1, scale 3
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        let (is_negative, s) = if let Some(rest) = s.strip_prefix('-') {
            (true, rest)
        } else {
            (false, s)
        };

        let (int_str, frac_str) = if let Some(pos) = s.find('.') {
            (&s[..pos], &s[pos + 1..])
        } else {
            (s, "")
        };

        if int_str.is_empty() && frac_str.is_empty() {
            return Err(NumericError::InvalidInput);
        }
        if !int_str.bytes().all(|b| b.is_ascii_digit())
            || !frac_str.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(NumericError::InvalidInput);
        }

        let scale = frac_str.len() as u64;
        let digits = format!("{int_str}{frac_str}");
        let mantissa: BigInt = digits.parse().map_err(|_| NumericError::InvalidInput)?;

        Ok(Self {
            mantissa: if is_negative { -mantissa } else { mantissa },
            scale,
        })
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for ApDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApDecimal({}, scale={})", self, self.scale)
    }
}

impl fmt::Display for ApDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.mantissa.abs();
        let sign = if self.mantissa.is_negative() { "-" } else { "" };

        if self.scale == 0 {
            return write!(f, "{}{}", sign, magnitude);
        }

        let (int_part, frac_part) = magnitude.div_rem(&pow10(self.scale));
        let frac_digits = frac_part.to_string();
        write!(
            f,
            "{}{}.{:0>width$}",
            sign,
            int_part,
            frac_digits,
            width = self.scale as usize
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
