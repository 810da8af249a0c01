// ============================================================================
// Numeric Module
// Exact and fixed-decimal value types plus scalar helpers
// ============================================================================
//
// This module provides:
// - IntegerRange: arithmetic progression with membership tests
// - Fraction: exact rational number in lowest terms
// - Fixed: floating value with fixed decimal-digit rendering
// - Scalar helpers: max, sum, floor division, gcd
// - NumericError: error type shared by the whole crate
//
// Design principles:
// - Immutable value types; every operation returns a new value
// - Validation failures return Result (no panics)
// - Integer overflow is reported, never wrapped

mod errors;
mod fixed;
mod fraction;
mod range;
mod scalar;

pub use errors::{NumericError, NumericResult};
pub use fixed::{fixed, Fixed};
pub use fraction::{fraction, Fraction};
pub use range::{range, range_from, range_step, IntegerRange, RangeIter};
pub use scalar::{divide, gcd, integral, max, round_half_up, sum};
