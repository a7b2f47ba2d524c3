// ============================================================================
// Conformance Tests
// Estimates checked digit-for-digit against a precomputed reference constant
// ============================================================================
//
// The fixture holds pi to 10,060 fractional digits, generated independently
// by Chudnovsky binary splitting and a high-precision AGM run; both methods
// agree on every stored digit.

use pi_estimator::prelude::*;
use proptest::prelude::*;

/// "3." followed by 10,060 fractional digits of pi.
const PI_REFERENCE: &str = include_str!("data/pi_10000.txt");

/// The reference constant correctly rounded to `digits` significant digits.
///
/// Rounds by inspecting the first discarded digit. The discarded tail of an
/// irrational number is never exactly half a unit, so a first discarded
/// digit of 5 or more always rounds up; carries propagate through runs of
/// nines (the reference has six consecutive nines at position 762).
fn rounded_reference(digits: usize) -> String {
    let all: Vec<u8> = PI_REFERENCE
        .bytes()
        .filter(|b| b.is_ascii_digit())
        .collect();
    let frac = digits - 1;
    assert!(1 + frac < all.len(), "fixture too short for request");

    let mut kept = all[..1 + frac].to_vec();
    if all[1 + frac] >= b'5' {
        let mut i = kept.len();
        loop {
            i -= 1;
            if kept[i] == b'9' {
                kept[i] = b'0';
            } else {
                kept[i] += 1;
                break;
            }
        }
    }

    let integer = kept[0] as char;
    if frac == 0 {
        integer.to_string()
    } else {
        let fraction = String::from_utf8(kept[1..].to_vec()).unwrap();
        format!("{integer}.{fraction}")
    }
}

// ============================================================================
// Digit Conformance
// ============================================================================

#[test]
fn matches_reference_at_spot_checks() {
    let estimator = PiEstimator::new();
    for digits in [1u32, 5, 10, 50, 100, 1_000] {
        assert_eq!(
            estimator.estimate(digits).unwrap(),
            rounded_reference(digits as usize),
            "mismatch at {digits} digits"
        );
    }
}

#[test]
fn matches_reference_through_nine_runs() {
    // Position 762 starts six consecutive nines; rounding and convergence
    // near that run must not smear into neighboring digits
    let estimator = PiEstimator::new();
    for digits in [761u32, 763, 768, 770] {
        assert_eq!(
            estimator.estimate(digits).unwrap(),
            rounded_reference(digits as usize),
            "mismatch at {digits} digits"
        );
    }
}

#[test]
fn matches_reference_at_maximum_precision() {
    // The guard-margin property: every one of the 10,000 digits must hold
    // at the largest supported request
    let estimator = PiEstimator::new();
    let result = estimator.estimate_detailed(10_000).unwrap();
    assert_eq!(result.value, rounded_reference(10_000));
    assert_eq!(result.value.len(), 10_001); // "3." plus 9,999 fractional digits
    assert!(
        result.iterations <= 15,
        "quadratic convergence should need at most 15 iterations, used {}",
        result.iterations
    );
}

// ============================================================================
// Contract Checks
// ============================================================================

#[test]
fn single_digit_returns_bare_three() {
    assert_eq!(PiEstimator::new().estimate(1).unwrap(), "3");
}

#[test]
fn out_of_range_requests_fail_typed() {
    let estimator = PiEstimator::new();
    assert!(matches!(
        estimator.estimate(0),
        Err(EstimateError::InvalidDigits { requested: 0, .. })
    ));
    assert!(matches!(
        estimator.estimate(10_001),
        Err(EstimateError::InvalidDigits {
            requested: 10_001,
            ..
        })
    ));
}

#[test]
fn repeated_calls_are_identical() {
    let estimator = PiEstimator::new();
    let first = estimator.estimate(1_000).unwrap();
    let second = estimator.estimate(1_000).unwrap();
    assert_eq!(first, second);
}

#[test]
fn fixed_policy_without_margin_is_refused() {
    let estimator = PiEstimator::builder()
        .precision_policy(PrecisionPolicy::Fixed {
            working_digits: 100,
        })
        .build()
        .unwrap();
    // 100 working digits serve a 50-digit request but not a 500-digit one
    assert!(estimator.estimate(50).is_ok());
    assert!(matches!(
        estimator.estimate(500),
        Err(EstimateError::PrecisionInsufficient { .. })
    ));
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #[test]
    fn every_small_request_is_correctly_rounded(digits in 2u32..200) {
        let estimator = PiEstimator::new();
        let value = estimator.estimate(digits).unwrap();
        prop_assert_eq!(&value, &rounded_reference(digits as usize));
        // "3." plus digits - 1 fractional places
        prop_assert_eq!(value.len(), digits as usize + 1);
    }
}
