// ============================================================================
// Fixed
// Floating value paired with a decimal digit count for display and rounding
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::scalar::{integral, round_half_up};
use std::fmt;

/// Floating value that renders with a fixed number of decimal places.
///
/// Rounding is purely a presentation concern: [`Fixed::value`] always returns
/// the stored, unrounded number, while `Display` rounds to `digits` places
/// and pads with trailing zeros.
///
/// # Example
/// ```
/// use numeric_kernel::numeric::Fixed;
///
/// let x = Fixed::new(1.23, 1).unwrap();
/// assert_eq!(x.to_string(), "1.2");
/// assert_eq!(x.value(), 1.23);
///
/// assert_eq!(Fixed::round(1.237, 2).unwrap().to_string(), "1.24");
/// assert_eq!(Fixed::floor(1.237, 2).unwrap().to_string(), "1.23");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fixed {
    value: f64,
    digits: u32,
}

impl Fixed {
    /// Largest supported digit count
    pub const MAX_DIGITS: u32 = 100;

    // ========================================================================
    // Construction
    // ========================================================================

    /// Wrap `value` for display with `digits` decimal places.
    ///
    /// # Errors
    /// Returns `DigitsOutOfRange` if `digits > MAX_DIGITS`.
    pub fn new(value: f64, digits: u32) -> NumericResult<Self> {
        if digits > Self::MAX_DIGITS {
            return Err(NumericError::DigitsOutOfRange {
                digits: digits as i64,
            });
        }
        Ok(Self { value, digits })
    }

    /// Like [`Fixed::new`] with the digit count given as a float.
    ///
    /// # Errors
    /// - `NotInteger` if `digits` is not a whole number
    /// - `DigitsOutOfRange` if it is negative or above `MAX_DIGITS`
    pub fn from_float_digits(value: f64, digits: f64) -> NumericResult<Self> {
        let digits = integral(digits)?;
        let digits =
            u32::try_from(digits).map_err(|_| NumericError::DigitsOutOfRange { digits })?;
        Self::new(value, digits)
    }

    /// Snap `value` to the nearest point of the `10^-digits` grid
    /// (ties round up).
    pub fn round(value: f64, digits: u32) -> NumericResult<Self> {
        let zoom = Self::zoom(digits)?;
        Self::new(round_half_up(value * zoom) / zoom, digits)
    }

    /// Snap `value` down to the `10^-digits` grid.
    pub fn floor(value: f64, digits: u32) -> NumericResult<Self> {
        let zoom = Self::zoom(digits)?;
        Self::new((value * zoom).floor() / zoom, digits)
    }

    fn zoom(digits: u32) -> NumericResult<f64> {
        if digits > Self::MAX_DIGITS {
            return Err(NumericError::DigitsOutOfRange {
                digits: digits as i64,
            });
        }
        Ok(10f64.powi(digits as i32))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The stored, unrounded value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.value
    }

    #[inline]
    pub const fn digits(self) -> u32 {
        self.digits
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Value floored at `digits` places, padded to exactly `digits` places.
    pub fn to_floor_string(&self) -> String {
        let zoom = 10f64.powi(self.digits as i32);
        render_fixed((self.value * zoom).floor() / zoom, self.digits)
    }

    /// Render in an arbitrary radix.
    ///
    /// Radix 10 is the rounded `Display` form. Any other radix renders the
    /// unrounded value with the shortest digit string that reads back as the
    /// same `f64`; `digits` has no meaning outside base 10.
    ///
    /// # Errors
    /// Returns `InvalidRadix` unless `2 <= radix <= 36`.
    pub fn to_string_radix(&self, radix: u32) -> NumericResult<String> {
        if !(2..=36).contains(&radix) {
            return Err(NumericError::InvalidRadix { radix });
        }
        if radix == 10 {
            return Ok(self.to_string());
        }
        Ok(float_to_radix(self.value, radix))
    }

    /// Convert to rust_decimal::Decimal rounded to `digits` places, with the
    /// same ties-up rule as `Display`.
    ///
    /// # Errors
    /// Returns `InvalidInput` for NaN, infinities and values outside the
    /// decimal range.
    pub fn to_decimal(self) -> NumericResult<rust_decimal::Decimal> {
        // The rounded double sits within an ulp of the grid point, far from any midpoint
        let d = rust_decimal::Decimal::from_f64_retain(self.rounded())
            .ok_or(NumericError::InvalidInput)?;
        Ok(d.round_dp(self.digits))
    }

    /// Value rounded half-up to `digits` places.
    fn rounded(self) -> f64 {
        let zoom = 10f64.powi(self.digits as i32);
        round_half_up(self.value * zoom) / zoom
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl From<Fixed> for f64 {
    #[inline]
    fn from(fixed: Fixed) -> f64 {
        fixed.value
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_fixed(self.rounded(), self.digits))
    }
}

// ============================================================================
// Formatting Helpers
// ============================================================================

/// Decimal rendering with exactly `digits` places.
fn render_fixed(value: f64, digits: u32) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // No "-0.0": negative zero renders unsigned
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.*}", digits as usize, value)
}

const RADIX_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Shortest round-trip rendering of `value` in `radix`.
///
/// Fractional digits are produced until the remaining fraction is smaller
/// than half the gap to the next representable double, with round-half-even
/// on the final digit and carry propagation into the integer part.
fn float_to_radix(value: f64, radix: u32) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let negative = value < 0.0;
    let value = value.abs();
    let base = radix as f64;

    let mut integer = value.floor();
    let mut fraction = value - integer;

    // Half the distance to the next double, never below the smallest subnormal
    let next_up = f64::from_bits(value.to_bits() + 1);
    let mut delta = (0.5 * (next_up - value)).max(f64::from_bits(1));

    let mut frac_digits: Vec<u8> = Vec::new();
    if fraction >= delta {
        loop {
            fraction *= base;
            delta *= base;
            let digit = fraction as u32;
            frac_digits.push(digit as u8);
            fraction -= digit as f64;

            if fraction > 0.5 || (fraction == 0.5 && digit & 1 == 1) {
                if fraction + delta > 1.0 {
                    // Round up, carrying through digits that overflow the radix
                    loop {
                        match frac_digits.pop() {
                            None => {
                                integer += 1.0;
                                break;
                            },
                            Some(d) if (d as u32) + 1 < radix => {
                                frac_digits.push(d + 1);
                                break;
                            },
                            Some(_) => {},
                        }
                    }
                    break;
                }
            }
            if fraction < delta {
                break;
            }
        }
    }

    // Digits beyond the 53-bit significand are not representable: emit zeros
    let mut int_digits: Vec<u8> = Vec::new();
    while integer / base >= 9_007_199_254_740_992.0 {
        integer /= base;
        int_digits.push(b'0');
    }
    loop {
        let remainder = integer % base;
        int_digits.push(RADIX_DIGITS[remainder as usize]);
        integer = (integer - remainder) / base;
        if integer <= 0.0 {
            break;
        }
    }

    let mut out = String::with_capacity(int_digits.len() + frac_digits.len() + 2);
    if negative {
        out.push('-');
    }
    out.extend(int_digits.iter().rev().map(|&b| b as char));
    if !frac_digits.is_empty() {
        out.push('.');
        out.extend(frac_digits.iter().map(|&d| RADIX_DIGITS[d as usize] as char));
    }
    out
}

// ============================================================================
// Factory Function
// ============================================================================

/// Shorthand for [`Fixed::new`].
pub fn fixed(value: f64, digits: u32) -> NumericResult<Fixed> {
    Fixed::new(value, digits)
}

// ============================================================================
// Tests
// ============================================================================
