// ============================================================================
// Fraction
// Exact rational number kept in lowest terms
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::scalar::{gcd_wide, integral, round_half_up};
use std::cmp::Ordering;
use std::fmt;

/// Exact rational number `p / q`.
///
/// Always stored fully reduced with a positive denominator, so the sign
/// lives on the numerator and structural equality is numeric equality.
/// Arithmetic widens to `i128` for cross products and fails with
/// `Overflow` only when the *reduced* result does not fit `i64`.
///
/// # Example
/// ```
/// use numeric_kernel::numeric::Fraction;
///
/// let a = Fraction::new(6, -8).unwrap();
/// assert_eq!(a.to_string(), "-3/4");
///
/// let b = a.checked_add(Fraction::new(1, 4).unwrap()).unwrap();
/// assert_eq!(b, Fraction::new(-1, 2).unwrap());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    p: i64,
    q: i64,
}

impl Fraction {
    /// Zero (0/1)
    pub const ZERO: Self = Self { p: 0, q: 1 };

    /// One (1/1)
    pub const ONE: Self = Self { p: 1, q: 1 };

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a reduced fraction from numerator and denominator.
    ///
    /// # Errors
    /// - `DivisionByZero` if `q == 0`
    /// - `Overflow` if normalizing the sign leaves `i64` (`i64::MIN / -1`)
    pub fn new(p: i64, q: i64) -> NumericResult<Self> {
        Self::reduce(p as i128, q as i128)
    }

    /// Whole number `p / 1`.
    #[inline]
    pub const fn from_integer(p: i64) -> Self {
        Self { p, q: 1 }
    }

    /// Create from floating numerator and denominator, each of which must be
    /// a whole number.
    ///
    /// # Errors
    /// - `NotInteger` if either part has a fractional component
    /// - `DivisionByZero` if `q == 0`
    pub fn from_floats(p: f64, q: f64) -> NumericResult<Self> {
        Self::new(integral(p)?, integral(q)?)
    }

    fn reduce(p: i128, q: i128) -> NumericResult<Self> {
        if q == 0 {
            return Err(NumericError::DivisionByZero);
        }
        let k = gcd_wide(p, q) as i128;
        let (mut p, mut q) = (p / k, q / k);
        if q < 0 {
            p = -p;
            q = -q;
        }
        Ok(Self {
            p: i64::try_from(p).map_err(|_| NumericError::Overflow)?,
            q: i64::try_from(q).map_err(|_| NumericError::Overflow)?,
        })
    }

    // ========================================================================
    // Grid Snapping
    // ========================================================================

    /// Nearest multiple of `unit` to `value` (ties round up).
    ///
    /// # Errors
    /// - `NotInteger` if `value / unit` is not finite
    /// - `Overflow` if the multiple does not fit
    pub fn round(value: f64, unit: Fraction) -> NumericResult<Self> {
        let times = integral(round_half_up(value / unit.to_f64()))?;
        unit.checked_mul(Self::from_integer(times))
    }

    /// Largest multiple of `unit` not above `value`.
    ///
    /// # Errors
    /// Same as [`Fraction::round`].
    pub fn floor(value: f64, unit: Fraction) -> NumericResult<Self> {
        let times = integral((value / unit.to_f64()).floor())?;
        unit.checked_mul(Self::from_integer(times))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Numerator, carrying the sign.
    #[inline]
    pub const fn numerator(self) -> i64 {
        self.p
    }

    /// Denominator, always positive.
    #[inline]
    pub const fn denominator(self) -> i64 {
        self.q
    }

    #[inline]
    pub const fn is_integer(self) -> bool {
        self.q == 1
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.p == 0
    }

    /// -1, 0 or 1.
    #[inline]
    pub const fn signum(self) -> i64 {
        self.p.signum()
    }

    /// Absolute value.
    ///
    /// # Errors
    /// Returns `Overflow` for a numerator of `i64::MIN`.
    pub fn abs(self) -> NumericResult<Self> {
        self.p
            .checked_abs()
            .map(|p| Self { p, q: self.q })
            .ok_or(NumericError::Overflow)
    }

    /// Floating approximation `p / q`.
    ///
    /// For display and mixing with floats only; compare fractions with
    /// their `Ord` implementation, which is exact.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.p as f64 / self.q as f64
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        let (p1, q1, p2, q2) = self.widen(rhs);
        Self::reduce(p1 * q2 + q1 * p2, q1 * q2)
    }

    /// Checked subtraction.
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        let (p1, q1, p2, q2) = self.widen(rhs);
        Self::reduce(p1 * q2 - q1 * p2, q1 * q2)
    }

    /// Checked multiplication.
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        let (p1, q1, p2, q2) = self.widen(rhs);
        Self::reduce(p1 * p2, q1 * q2)
    }

    /// Checked division.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        let (p1, q1, p2, q2) = self.widen(rhs);
        Self::reduce(p1 * q2, q1 * p2)
    }

    /// Reciprocal `q / p`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` for zero.
    pub fn inv(self) -> NumericResult<Self> {
        Self::reduce(self.q as i128, self.p as i128)
    }

    #[inline]
    fn widen(self, rhs: Self) -> (i128, i128, i128, i128) {
        (
            self.p as i128,
            self.q as i128,
            rhs.p as i128,
            rhs.q as i128,
        )
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Convert to rust_decimal::Decimal.
    ///
    /// Intended for API boundaries. Non-terminating expansions are cut at
    /// the decimal type's precision.
    ///
    /// # Errors
    /// Returns `Overflow` if the quotient is outside the decimal range.
    pub fn to_decimal(self) -> NumericResult<rust_decimal::Decimal> {
        rust_decimal::Decimal::from(self.p)
            .checked_div(rust_decimal::Decimal::from(self.q))
            .ok_or(NumericError::Overflow)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Fraction {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for Fraction {
    #[inline]
    fn from(p: i64) -> Self {
        Self::from_integer(p)
    }
}

// Denominators are positive, so cross multiplication preserves direction.
impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.p as i128 * other.q as i128;
        let rhs = other.p as i128 * self.q as i128;
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Fraction {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fraction({})", self)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.p, self.q)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for Fraction {
    type Err = NumericError;

    /// Parse `"p/q"` or a bare integer `"p"`.
    ///
    /// # Examples
    /// - "3/4" -> 3/4
    /// - "6/-8" -> -3/4
    /// - "5" -> 5/1
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        let (p_str, q_str) = match s.split_once('/') {
            Some((p, q)) => (p.trim(), Some(q.trim())),
            None => (s, None),
        };

        let p: i64 = p_str.parse().map_err(|_| NumericError::InvalidInput)?;
        let q: i64 = match q_str {
            Some(q) => q.parse().map_err(|_| NumericError::InvalidInput)?,
            None => 1,
        };

        Self::new(p, q)
    }
}

// ============================================================================
// Serde (string form, re-validated on the way in)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Fraction {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Fraction {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Factory Function
// ============================================================================

/// Shorthand for [`Fraction::new`].
pub fn fraction(p: i64, q: i64) -> NumericResult<Fraction> {
    Fraction::new(p, q)
}

// ============================================================================
// Tests
// ============================================================================
