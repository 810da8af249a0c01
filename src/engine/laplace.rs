// ============================================================================
// Laplace Expansion
// Recursive cofactor expansion along the first column
// ============================================================================

use crate::domain::{is_square_matrix, Matrix};
use crate::interfaces::DeterminantAlgorithm;
use crate::numeric::{NumericError, NumericResult};

/// Determinant by cofactor expansion along column 0.
///
/// `det(M) = Σ (-1)^i · M[i][0] · det(minor(i, 0))`, bottoming out at 1×1.
/// Every level allocates fresh minors, so the cost is O(N!) and the
/// algorithm is meant for small orders. For integer-valued input small
/// enough to stay within 2^53 the result is exact, which is what makes
/// singular-system detection in the solver reliable.
#[derive(Debug, Clone, Copy, Default)]
pub struct LaplaceExpansion;

impl LaplaceExpansion {
    pub fn new() -> Self {
        Self
    }
}

impl DeterminantAlgorithm for LaplaceExpansion {
    fn determinant(&self, matrix: &Matrix) -> NumericResult<f64> {
        let n = matrix.order().ok_or(NumericError::NotSquareMatrix)?;
        tracing::trace!(order = n, "laplace expansion");

        if n == 1 {
            return Ok(matrix[(0, 0)]);
        }

        let mut sum = 0.0;
        let mut sign = 1.0;
        for i in 0..n {
            sum += sign * matrix[(i, 0)] * self.cofactor(matrix, i, 0)?;
            sign = -sign;
        }
        Ok(sum)
    }

    fn name(&self) -> &'static str {
        "Laplace"
    }

    fn is_exact(&self) -> bool {
        true
    }
}

// ============================================================================
// Free Functions
// ============================================================================

/// Determinant of the minor left after deleting row `r` and column `c`.
///
/// This is the unsigned minor; callers apply `(-1)^(r+c)` themselves.
/// A 1×1 matrix has an empty minor, which counts as `0.0`.
///
/// # Errors
/// Returns `NotSquareMatrix` if `rows` is not a square matrix or `r`/`c` lies
/// outside it (the minor would not be square).
pub fn cofactor<R: AsRef<[f64]>>(rows: &[R], r: usize, c: usize) -> NumericResult<f64> {
    let matrix = square(rows)?;
    LaplaceExpansion.cofactor(&matrix, r, c)
}

/// Determinant by Laplace expansion.
///
/// # Errors
/// Returns `NotSquareMatrix` if `rows` is not a square matrix.
///
/// # Example
/// ```
/// use numeric_kernel::engine::det;
///
/// assert_eq!(det(&[[1.0, 2.0], [3.0, 4.0]]).unwrap(), -2.0);
/// ```
pub fn det<R: AsRef<[f64]>>(rows: &[R]) -> NumericResult<f64> {
    let matrix = square(rows)?;
    LaplaceExpansion.determinant(&matrix)
}

/// Determinant of a compile-time-sized square matrix.
///
/// # Errors
/// Returns `NotSquareMatrix` for the empty `N = 0` case.
pub fn det_array<const N: usize>(matrix: &[[f64; N]; N]) -> NumericResult<f64> {
    det(matrix.as_slice())
}

fn square<R: AsRef<[f64]>>(rows: &[R]) -> NumericResult<Matrix> {
    if !is_square_matrix(rows) {
        return Err(NumericError::NotSquareMatrix);
    }
    Matrix::from_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_det_small() {
        assert_eq!(det(&[[5.0]]).unwrap(), 5.0);
        assert_eq!(det(&[[1.0, 2.0], [3.0, 4.0]]).unwrap(), -2.0);
        assert_eq!(
            det(&[[6.0, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]]).unwrap(),
            -306.0
        );
    }

    #[test]
    fn test_det_four_by_four() {
        let m = [
            [1.0, 0.0, 2.0, -1.0],
            [3.0, 0.0, 0.0, 5.0],
            [2.0, 1.0, 4.0, -3.0],
            [1.0, 0.0, 5.0, 0.0],
        ];
        assert_eq!(det_array(&m).unwrap(), 30.0);
    }

    #[test]
    fn test_det_singular_is_exact_zero() {
        assert_eq!(det(&[[1.0, 2.0], [4.0, 8.0]]).unwrap(), 0.0);
        assert_eq!(
            det(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]).unwrap(),
            0.0
        );
    }

    #[test]
    fn test_det_rejects_non_square() {
        assert_eq!(
            det(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]),
            Err(NumericError::NotSquareMatrix)
        );
        assert_eq!(
            det(&[vec![1.0, 2.0], vec![3.0]]),
            Err(NumericError::NotSquareMatrix)
        );
        let empty: Vec<Vec<f64>> = Vec::new();
        assert_eq!(det(&empty), Err(NumericError::NotSquareMatrix));
    }

    #[test]
    fn test_cofactor() {
        let m = [[1.0, 2.0, 3.0], [0.0, 4.0, 5.0], [7.0, 8.0, 9.0]];
        assert_eq!(cofactor(&m, 0, 0).unwrap(), -4.0);
        assert_eq!(cofactor(&m, 1, 1).unwrap(), -12.0);
    }

    #[test]
    fn test_cofactor_errors() {
        assert_eq!(
            cofactor(&[[1.0, 2.0, 3.0], [2.0, 3.0, 4.0]], 0, 0),
            Err(NumericError::NotSquareMatrix)
        );
        assert_eq!(
            cofactor(&[[1.0, 2.0], [3.0, 4.0]], 0, 5),
            Err(NumericError::NotSquareMatrix)
        );
    }

    #[test]
    fn test_cofactor_of_single_entry() {
        assert_eq!(cofactor(&[[5.0]], 0, 0), Ok(0.0));
        assert_eq!(cofactor(&[[5.0]], 1, 0), Err(NumericError::NotSquareMatrix));
    }

    #[test]
    fn test_nan_propagates() {
        assert!(det(&[[1.0, 2.0], [3.0, f64::NAN]]).unwrap().is_nan());
    }

    #[test]
    fn test_name() {
        assert_eq!(LaplaceExpansion::new().name(), "Laplace");
        assert!(LaplaceExpansion.is_exact());
    }
}
