// ============================================================================
// Scalar Helpers
// Numeric reductions, floor division and greatest common divisor
// ============================================================================

use super::errors::{NumericError, NumericResult};

/// Largest element, seeded with `-inf`.
///
/// NaN is never skipped: a single NaN anywhere makes the result NaN.
/// An empty slice yields `f64::NEG_INFINITY`.
pub fn max(xs: &[f64]) -> f64 {
    xs.iter().fold(f64::NEG_INFINITY, |acc, &x| {
        if acc.is_nan() || x.is_nan() {
            f64::NAN
        } else if x > acc {
            x
        } else {
            acc
        }
    })
}

/// Sum of all elements. An empty slice yields `0.0`.
pub fn sum(xs: &[f64]) -> f64 {
    xs.iter().fold(0.0, |acc, &x| acc + x)
}

/// Floor division returning `(quotient, remainder)`.
///
/// `quotient = floor(a / b)` and `remainder = a - quotient * b`, so the
/// remainder always carries the sign of `b`.
///
/// # Errors
/// - `DivisionByZero` if `b == 0`
/// - `Overflow` for `i64::MIN / -1`
pub fn divide(a: i64, b: i64) -> NumericResult<(i64, i64)> {
    if b == 0 {
        return Err(NumericError::DivisionByZero);
    }
    let q = a.checked_div(b).ok_or(NumericError::Overflow)?;
    let r = a - q * b;

    // Truncation rounded toward zero; step back one when signs disagree
    if r != 0 && ((r < 0) != (b < 0)) {
        Ok((q - 1, r + b))
    } else {
        Ok((q, r))
    }
}

/// Greatest common divisor of `|a|` and `|b|` (Euclid).
///
/// `gcd(0, 0) == 0` and `gcd(a, 0) == |a|`. The result is unsigned so that
/// `gcd(i64::MIN, 0)` is representable.
pub fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b > 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Wide gcd used when reducing `i128` cross products.
pub(crate) fn gcd_wide(a: i128, b: i128) -> u128 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b > 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Check that `value` is a whole number representable as `i64`.
///
/// # Errors
/// Returns `NotInteger` for NaN, infinities, values with a fractional part,
/// or values outside the `i64` range.
pub fn integral(value: f64) -> NumericResult<i64> {
    // 2^63 is exactly representable; anything at or above it overflows i64
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if !value.is_finite() || value.fract() != 0.0 || value >= LIMIT || value < -LIMIT {
        return Err(NumericError::NotInteger { value });
    }
    Ok(value as i64)
}

/// Round to the nearest integer, ties toward positive infinity.
///
/// `2.5 -> 3`, `-2.5 -> -2`. Non-finite input is returned unchanged.
pub fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn test_max() {
        assert_eq!(max(&[1.0, 2.0, 3.0]), 3.0);
        assert_eq!(max(&[1.0, f64::INFINITY, 3.0]), f64::INFINITY);
        assert_eq!(max(&[]), f64::NEG_INFINITY);
        assert_eq!(max(&[-5.0, -2.0]), -2.0);
    }

    #[test]
    fn test_max_propagates_nan() {
        assert!(max(&[1.0, 2.0, f64::NAN]).is_nan());
        assert!(max(&[f64::NAN, 2.0, 1.0]).is_nan());
    }

    #[test]
    fn test_sum() {
        assert_eq!(sum(&[1.0, 2.0, 3.0]), 6.0);
        assert!(sum(&[1.0, 2.0, f64::NAN]).is_nan());
        assert_eq!(sum(&[1.0, f64::INFINITY, 3.0]), f64::INFINITY);
        assert_eq!(sum(&[]), 0.0);
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(7, 3), Ok((2, 1)));
        assert_eq!(divide(-7, 3), Ok((-3, 2)));
        assert_eq!(divide(7, -3), Ok((-3, -2)));
        assert_eq!(divide(-7, -3), Ok((2, -1)));
        assert_eq!(divide(6, 3), Ok((2, 0)));
    }

    #[test]
    fn test_divide_errors() {
        assert_eq!(divide(1, 0), Err(NumericError::DivisionByZero));
        assert_eq!(divide(i64::MIN, -1), Err(NumericError::Overflow));
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12, 8), 4);
        assert_eq!(gcd(100, 25), 25);
        assert_eq!(gcd(17, 13), 1);
        assert_eq!(gcd(-12, 8), 4);
        assert_eq!(gcd(12, -8), 4);
        assert_eq!(gcd(-12, -8), 4);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(i64::MIN, 0), 1 << 63);
    }

    #[test]
    fn test_integral() {
        assert_eq!(integral(5.0), Ok(5));
        assert_eq!(integral(-3.0), Ok(-3));
        assert_eq!(integral(1.5), Err(NumericError::NotInteger { value: 1.5 }));
        assert!(integral(f64::NAN).is_err());
        assert!(integral(f64::INFINITY).is_err());
        assert!(integral(1e20).is_err());
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(2.4), 2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(3.584), 4.0);
    }

    quickcheck! {
        fn prop_divide_reconstructs(a: i64, b: i64) -> bool {
            match divide(a, b) {
                Ok((q, r)) => {
                    let b_wide = b as i128;
                    let r_wide = r as i128;
                    (q as i128) * b_wide + r_wide == a as i128
                        && r_wide.abs() < b_wide.abs()
                        && (r == 0 || (r < 0) == (b < 0))
                }
                Err(NumericError::DivisionByZero) => b == 0,
                Err(NumericError::Overflow) => a == i64::MIN && b == -1,
                Err(_) => false,
            }
        }

        fn prop_gcd_divides_both(a: i64, b: i64) -> bool {
            let g = gcd(a, b);
            if g == 0 {
                return a == 0 && b == 0;
            }
            a.unsigned_abs() % g == 0 && b.unsigned_abs() % g == 0
        }

        fn prop_gcd_ignores_sign(a: i32, b: i32) -> bool {
            let (a, b) = (a as i64, b as i64);
            gcd(a, b) == gcd(a.abs(), b.abs()) && gcd(a, b) == gcd(b, a)
        }
    }
}
