// ============================================================================
// Numeric Errors
// Error types for exact and fixed-decimal arithmetic and matrix operations
// ============================================================================

use std::fmt;

/// Errors raised by the numeric kernel.
///
/// Every variant is a synchronous validation failure. Degenerate but
/// well-formed linear systems are not errors; the solver reports them with
/// NaN / infinite components instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// A value required to be a whole number is not
    NotInteger { value: f64 },
    /// Zero denominator, or division by a zero fraction
    DivisionByZero,
    /// Range step equals zero
    ZeroStep,
    /// Determinant or solver input is not square
    NotSquareMatrix,
    /// Result does not fit the underlying integer type
    Overflow,
    /// Input string could not be parsed
    InvalidInput,
    /// Rows do not form a rectangular, non-empty matrix
    InvalidShape { reason: &'static str },
    /// Row or column index outside the matrix
    IndexOutOfBounds { row: usize, col: usize, order: usize },
    /// Decimal digit count outside the renderable range
    DigitsOutOfRange { digits: i64 },
    /// Radix outside 2..=36
    InvalidRadix { radix: u32 },
    /// Matrix order above the configured limit
    OrderTooLarge { order: usize, max: usize },
    /// Solver configuration rejected by validation
    InvalidConfig { reason: &'static str },
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NotInteger { value } => write!(f, "{} is not integer.", value),
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::ZeroStep => write!(f, "step cannot be zero"),
            NumericError::NotSquareMatrix => write!(f, "matrix is not square"),
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded representable range")
            },
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::InvalidShape { reason } => write!(f, "invalid matrix shape: {}", reason),
            NumericError::IndexOutOfBounds { row, col, order } => write!(
                f,
                "index ({}, {}) out of bounds for matrix of order {}",
                row, col, order
            ),
            NumericError::DigitsOutOfRange { digits } => {
                write!(f, "digits must be between 0 and 100, got {}", digits)
            },
            NumericError::InvalidRadix { radix } => {
                write!(f, "radix must be between 2 and 36, got {}", radix)
            },
            NumericError::OrderTooLarge { order, max } => write!(
                f,
                "matrix of order {} exceeds configured maximum {}",
                order, max
            ),
            NumericError::InvalidConfig { reason } => {
                write!(f, "invalid solver configuration: {}", reason)
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::NotInteger { value: 1.5 }.to_string(),
            "1.5 is not integer."
        );
        assert_eq!(NumericError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(NumericError::ZeroStep.to_string(), "step cannot be zero");
        assert_eq!(
            NumericError::NotSquareMatrix.to_string(),
            "matrix is not square"
        );
        assert_eq!(
            NumericError::IndexOutOfBounds {
                row: 3,
                col: 0,
                order: 2
            }
            .to_string(),
            "index (3, 0) out of bounds for matrix of order 2"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::ZeroStep, NumericError::ZeroStep);
        assert_ne!(NumericError::ZeroStep, NumericError::DivisionByZero);
        assert_ne!(
            NumericError::NotInteger { value: 0.5 },
            NumericError::NotInteger { value: 1.5 }
        );
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(NumericError::Overflow);
        assert!(err.to_string().starts_with("arithmetic overflow"));
    }
}
