// ============================================================================
// Integer Range
// Arithmetic progression with membership tests and lazy iteration
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::scalar::integral;
use std::fmt;
use std::iter::FusedIterator;

/// Integer range `[start, stop) ∩ { start + step * k : k >= 0 }`.
///
/// The range is directional: `direction = signum(stop - start)`. When the
/// sign of `step` disagrees with `direction` the progression never reaches
/// the interval and the range is empty rather than an error.
///
/// # Example
/// ```
/// use numeric_kernel::numeric::IntegerRange;
///
/// let r = IntegerRange::new(2, 10, 3).unwrap();
/// assert_eq!(r.iter().collect::<Vec<_>>(), vec![2, 5, 8]);
/// assert!(r.contains(5.0));
/// assert!(!r.contains(6.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntegerRange {
    start: i64,
    stop: i64,
    step: i64,
    direction: i64,
}

impl IntegerRange {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a range with explicit start, stop and step.
    ///
    /// # Errors
    /// Returns `ZeroStep` if `step == 0`.
    pub fn new(start: i64, stop: i64, step: i64) -> NumericResult<Self> {
        if step == 0 {
            return Err(NumericError::ZeroStep);
        }
        Ok(Self {
            start,
            stop,
            step,
            direction: (stop as i128 - start as i128).signum() as i64,
        })
    }

    /// `[0, stop)` with step 1.
    pub fn upto(stop: i64) -> Self {
        Self::span(0, stop)
    }

    /// `[start, stop)` with step 1.
    pub fn span(start: i64, stop: i64) -> Self {
        Self {
            start,
            stop,
            step: 1,
            direction: (stop as i128 - start as i128).signum() as i64,
        }
    }

    /// Create a range from floating bounds, each of which must be a whole
    /// number.
    ///
    /// # Errors
    /// - `NotInteger` for the first bound that is not a whole number
    /// - `ZeroStep` if `step == 0`
    pub fn from_floats(start: f64, stop: f64, step: f64) -> NumericResult<Self> {
        let start = integral(start)?;
        let stop = integral(stop)?;
        let step = integral(step)?;
        Self::new(start, stop, step)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub const fn start(&self) -> i64 {
        self.start
    }

    #[inline]
    pub const fn stop(&self) -> i64 {
        self.stop
    }

    #[inline]
    pub const fn step(&self) -> i64 {
        self.step
    }

    /// `signum(stop - start)`: -1, 0 or +1.
    #[inline]
    pub const fn direction(&self) -> i64 {
        self.direction
    }

    // ========================================================================
    // Membership
    // ========================================================================

    fn after_start(&self, value: f64) -> bool {
        if self.direction > 0 {
            self.start as f64 <= value
        } else {
            value <= self.start as f64
        }
    }

    fn before_stop(&self, value: f64) -> bool {
        if self.direction > 0 {
            value < self.stop as f64
        } else {
            (self.stop as f64) < value
        }
    }

    /// Whether `value` lies in the real half-open interval from `start`
    /// toward `stop`.
    pub fn between(&self, value: f64) -> bool {
        self.after_start(value) && self.before_stop(value)
    }

    /// Whether `value` is inside [`between`](Self::between) and a whole
    /// number of steps away from `start`.
    pub fn contains(&self, value: f64) -> bool {
        if !self.between(value) {
            return false;
        }
        let k = (value - self.start as f64) / self.step as f64;
        k.is_finite() && k.fract() == 0.0
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Number of elements the iterator yields.
    pub fn len(&self) -> usize {
        if self.step.signum() != self.direction {
            return 0;
        }
        let span = (self.stop as i128 - self.start as i128).unsigned_abs();
        let step = (self.step as i128).unsigned_abs();
        span.div_ceil(step) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lazily iterate the progression. Each call starts over from `start`.
    pub fn iter(&self) -> RangeIter {
        RangeIter {
            next: Some(self.start),
            step: self.step,
            remaining: self.len(),
        }
    }
}

impl fmt::Display for IntegerRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "range({}, {}, {})", self.start, self.stop, self.step)
    }
}

// ============================================================================
// Iterator
// ============================================================================

/// Iterator over an [`IntegerRange`].
#[derive(Debug, Clone)]
pub struct RangeIter {
    next: Option<i64>,
    step: i64,
    remaining: usize,
}

impl Iterator for RangeIter {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next?;
        self.remaining -= 1;
        self.next = current.checked_add(self.step);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RangeIter {}

impl FusedIterator for RangeIter {}

impl IntoIterator for IntegerRange {
    type Item = i64;
    type IntoIter = RangeIter;

    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl IntoIterator for &IntegerRange {
    type Item = i64;
    type IntoIter = RangeIter;

    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

// ============================================================================
// Factory Functions
// ============================================================================

/// `[0, stop)` with step 1.
pub fn range(stop: i64) -> IntegerRange {
    IntegerRange::upto(stop)
}

/// `[start, stop)` with step 1.
pub fn range_from(start: i64, stop: i64) -> IntegerRange {
    IntegerRange::span(start, stop)
}

/// `[start, stop)` advancing by `step`.
///
/// # Errors
/// Returns `ZeroStep` if `step == 0`.
pub fn range_step(start: i64, stop: i64, step: i64) -> NumericResult<IntegerRange> {
    IntegerRange::new(start, stop, step)
}
