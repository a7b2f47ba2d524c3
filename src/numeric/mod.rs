// ============================================================================
// Numeric Module
// Arbitrary-precision decimal arithmetic for iterative estimation
// ============================================================================
//
// This module provides:
// - ApDecimal: scaled-integer decimal with a runtime-configurable scale
// - PrecisionContext: per-call working-precision scope
// - NumericError: error types for decimal operations
//
// Design principles:
// - No floating-point operations
// - All fallible arithmetic returns Result (no panics)
// - Truncating intermediates + guard digits; rounding happens exactly once,
//   in `ApDecimal::quantize`
// - No global precision state; every computation owns its context

mod ap_decimal;
mod context;
mod errors;

pub use ap_decimal::ApDecimal;
pub use context::PrecisionContext;
pub use errors::{NumericError, NumericResult};
