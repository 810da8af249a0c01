// ============================================================================
// Determinant Algorithm Interface
// Defines the contract for pluggable determinant strategies
// ============================================================================

use crate::domain::Matrix;
use crate::numeric::{NumericError, NumericResult};

/// Strategy pattern interface for determinant computation
/// Implementations: LaplaceExpansion (cofactor recursion), LuDecomposition
pub trait DeterminantAlgorithm: Send + Sync {
    /// Determinant of a square matrix
    ///
    /// # Errors
    /// Returns `NotSquareMatrix` for non-square input
    fn determinant(&self, matrix: &Matrix) -> NumericResult<f64>;

    /// Get the algorithm name for logging/benchmarks
    fn name(&self) -> &'static str;

    /// Whether a singular integer-valued matrix always yields exactly `0.0`
    ///
    /// Solvers backed by an inexact strategy confirm singularity with
    /// Laplace expansion before dividing.
    fn is_exact(&self) -> bool {
        false
    }

    /// Determinant of the minor left after deleting row `r` and column `c`
    /// (unsigned; callers apply the checkerboard sign)
    ///
    /// The minor of a 1×1 matrix is empty and counts as `0.0`. An index
    /// outside the matrix leaves a non-square minor.
    fn cofactor(&self, matrix: &Matrix, r: usize, c: usize) -> NumericResult<f64> {
        let n = matrix.order().ok_or(NumericError::NotSquareMatrix)?;
        if r >= n || c >= n {
            return Err(NumericError::NotSquareMatrix);
        }
        if n == 1 {
            return Ok(0.0);
        }
        self.determinant(&matrix.minor(r, c)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Diagonal product: correct only for triangular input
    struct DiagonalOnly;

    impl DeterminantAlgorithm for DiagonalOnly {
        fn determinant(&self, matrix: &Matrix) -> NumericResult<f64> {
            let n = matrix.order().ok_or(NumericError::NotSquareMatrix)?;
            Ok((0..n).map(|i| matrix[(i, i)]).product())
        }

        fn name(&self) -> &'static str {
            "Diagonal"
        }
    }

    #[test]
    fn test_trait_can_be_implemented() {
        assert_eq!(DiagonalOnly.name(), "Diagonal");
        assert!(!DiagonalOnly.is_exact());
    }

    #[test]
    fn test_default_cofactor_uses_minor() {
        let m = Matrix::from_array(&[[2.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 4.0]]).unwrap();
        assert_eq!(DiagonalOnly.cofactor(&m, 0, 0).unwrap(), 12.0);
        assert_eq!(DiagonalOnly.cofactor(&m, 2, 2).unwrap(), 6.0);
    }

    #[test]
    fn test_default_cofactor_rejects_rectangular() {
        let m = Matrix::from_array(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(
            DiagonalOnly.cofactor(&m, 0, 0),
            Err(NumericError::NotSquareMatrix)
        );
    }

    #[test]
    fn test_default_cofactor_of_single_entry_is_zero() {
        let m = Matrix::from_array(&[[5.0]]).unwrap();
        assert_eq!(DiagonalOnly.cofactor(&m, 0, 0), Ok(0.0));
    }

    #[test]
    fn test_default_cofactor_out_of_range_is_not_square() {
        let m = Matrix::from_array(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(
            DiagonalOnly.cofactor(&m, 2, 0),
            Err(NumericError::NotSquareMatrix)
        );
        assert_eq!(
            DiagonalOnly.cofactor(&m, 0, 2),
            Err(NumericError::NotSquareMatrix)
        );
    }
}
