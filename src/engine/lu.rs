// ============================================================================
// LU Decomposition
// Determinant via Gaussian elimination with partial pivoting
// ============================================================================

use crate::domain::Matrix;
use crate::interfaces::DeterminantAlgorithm;
use crate::numeric::{NumericError, NumericResult};

/// Determinant as `sign(P) · Π diag(U)` from `PA = LU`.
///
/// O(N^3). A column whose remaining entries are all exactly zero yields an
/// exact `0.0`; otherwise rounding in the elimination can leave a tiny
/// non-zero residue where Laplace expansion would produce zero.
/// [`LinearSolver`](crate::engine::LinearSolver) recomputes such near-zero
/// results by expansion.
#[derive(Debug, Clone, Copy, Default)]
pub struct LuDecomposition;

impl LuDecomposition {
    pub fn new() -> Self {
        Self
    }
}

impl DeterminantAlgorithm for LuDecomposition {
    fn determinant(&self, matrix: &Matrix) -> NumericResult<f64> {
        let n = matrix.order().ok_or(NumericError::NotSquareMatrix)?;

        // Working copy, eliminated in place
        let mut lu: Vec<f64> = matrix.as_slice().to_vec();
        let mut det = 1.0;

        for k in 0..n {
            // Find pivot: row with largest |lu[i, k]| for i >= k
            let mut max_val = lu[k * n + k].abs();
            let mut max_row = k;
            for i in (k + 1)..n {
                let val = lu[i * n + k].abs();
                if val > max_val {
                    max_val = val;
                    max_row = i;
                }
            }

            if max_val == 0.0 {
                tracing::trace!(column = k, "zero pivot column; determinant is zero");
                return Ok(0.0);
            }

            if max_row != k {
                for j in 0..n {
                    lu.swap(k * n + j, max_row * n + j);
                }
                det = -det;
                tracing::trace!(from = max_row, to = k, "pivot row swap");
            }

            let pivot = lu[k * n + k];
            det *= pivot;

            // Eliminate below the pivot
            for i in (k + 1)..n {
                let factor = lu[i * n + k] / pivot;
                for j in (k + 1)..n {
                    let ukj = lu[k * n + j];
                    lu[i * n + j] -= factor * ukj;
                }
            }
        }

        Ok(det)
    }

    fn name(&self) -> &'static str {
        "LU"
    }
}
