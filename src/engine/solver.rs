// ============================================================================
// Linear Solver
// Cramer's rule over a pluggable determinant strategy
// ============================================================================

use crate::domain::{is_matrix, Matrix};
use crate::engine::LaplaceExpansion;
use crate::interfaces::DeterminantAlgorithm;
use crate::numeric::{NumericError, NumericResult};
use std::fmt;

/// Linear solver with a pluggable determinant algorithm
///
/// Singular systems are not errors. With `d = det(A) == 0`, a component
/// whose substituted determinant is also zero comes back as NaN (the system
/// has infinitely many solutions along that axis); a non-zero substituted
/// determinant gives ±Infinity (the system is inconsistent).
pub struct LinearSolver {
    /// Determinant strategy
    algorithm: Box<dyn DeterminantAlgorithm>,

    /// Largest accepted order, if capped
    max_order: Option<usize>,
}

impl LinearSolver {
    /// Create a solver without an order cap
    pub fn new(algorithm: Box<dyn DeterminantAlgorithm>) -> Self {
        Self {
            algorithm,
            max_order: None,
        }
    }

    /// Create a solver that rejects matrices above `max_order`
    pub fn with_max_order(algorithm: Box<dyn DeterminantAlgorithm>, max_order: usize) -> Self {
        Self {
            algorithm,
            max_order: Some(max_order),
        }
    }

    /// Name of the determinant strategy
    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm.name()
    }

    pub fn max_order(&self) -> Option<usize> {
        self.max_order
    }

    /// Determinant of a square matrix
    pub fn det(&self, matrix: &Matrix) -> NumericResult<f64> {
        let n = matrix.order().ok_or(NumericError::NotSquareMatrix)?;
        self.check_order(n)?;
        self.checked().determinant(matrix)
    }

    /// Unsigned minor at `(r, c)`
    pub fn cofactor(&self, matrix: &Matrix, r: usize, c: usize) -> NumericResult<f64> {
        let n = matrix.order().ok_or(NumericError::NotSquareMatrix)?;
        self.check_order(n)?;
        self.checked().cofactor(matrix, r, c)
    }

    /// Solve an N×(N+1) augmented system by Cramer's rule
    ///
    /// # Errors
    /// - `NotSquareMatrix` if the coefficient part is not square
    /// - `OrderTooLarge` if the order exceeds the configured cap
    pub fn solve(&self, augmented: &Matrix) -> NumericResult<Vec<f64>> {
        let n = augmented.rows();
        if augmented.cols() != n + 1 {
            return Err(NumericError::NotSquareMatrix);
        }
        self.check_order(n)?;
        cramer(&self.checked(), augmented)
    }

    fn checked(&self) -> SingularityChecked<'_> {
        SingularityChecked(self.algorithm.as_ref())
    }

    fn check_order(&self, order: usize) -> NumericResult<()> {
        match self.max_order {
            Some(max) if order > max => {
                tracing::debug!(order, max, "matrix order exceeds solver limit");
                Err(NumericError::OrderTooLarge { order, max })
            },
            _ => Ok(()),
        }
    }
}

impl Default for LinearSolver {
    fn default() -> Self {
        Self::new(Box::new(LaplaceExpansion))
    }
}

impl fmt::Debug for LinearSolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinearSolver")
            .field("algorithm", &self.algorithm.name())
            .field("max_order", &self.max_order)
            .finish()
    }
}

// ============================================================================
// Exact Singularity
// ============================================================================

/// Orders up to which near-zero results of an inexact strategy are
/// recomputed by Laplace expansion
const EXACT_CHECK_MAX_ORDER: usize = 8;

/// `|det|` at or below this fraction of the Hadamard bound counts as near zero
const NEAR_SINGULAR_RATIO: f64 = 1e-9;

/// Strategy adapter whose zero determinants match Laplace expansion
///
/// A singular matrix run through LU usually leaves a residue of a few ulps
/// instead of `0.0`. Such results are replaced by the exact expansion, so
/// the NaN / ±Infinity split of Cramer's rule is the same for every
/// strategy.
struct SingularityChecked<'a>(&'a dyn DeterminantAlgorithm);

impl DeterminantAlgorithm for SingularityChecked<'_> {
    fn determinant(&self, matrix: &Matrix) -> NumericResult<f64> {
        let n = matrix.order().ok_or(NumericError::NotSquareMatrix)?;
        let d = self.0.determinant(matrix)?;
        if self.0.is_exact() || n > EXACT_CHECK_MAX_ORDER || !d.is_finite() {
            return Ok(d);
        }
        if d.abs() > NEAR_SINGULAR_RATIO * hadamard_bound(matrix) {
            return Ok(d);
        }

        let exact = LaplaceExpansion.determinant(matrix)?;
        tracing::trace!(
            order = n,
            algorithm = self.0.name(),
            approximate = d,
            exact,
            "near-zero determinant recomputed by expansion"
        );
        Ok(exact)
    }

    fn name(&self) -> &'static str {
        self.0.name()
    }

    fn is_exact(&self) -> bool {
        self.0.is_exact()
    }
}

/// Product of the row norms, an upper bound on `|det|`
fn hadamard_bound(matrix: &Matrix) -> f64 {
    (0..matrix.rows())
        .map(|r| matrix.row(r).iter().map(|v| v * v).sum::<f64>().sqrt())
        .product()
}

// ============================================================================
// Cramer's Rule
// ============================================================================

fn cramer(algorithm: &dyn DeterminantAlgorithm, augmented: &Matrix) -> NumericResult<Vec<f64>> {
    let coefficients = augmented
        .without_last_column()
        .map_err(|_| NumericError::NotSquareMatrix)?;
    let n = coefficients.order().ok_or(NumericError::NotSquareMatrix)?;
    let constants = augmented
        .column(n)
        .ok_or(NumericError::NotSquareMatrix)?;

    let d = algorithm.determinant(&coefficients)?;
    if d == 0.0 {
        tracing::debug!(
            order = n,
            algorithm = algorithm.name(),
            "singular coefficient matrix; components will be NaN or infinite"
        );
    }

    // Each substituted copy is independent of the others
    let mut solution = Vec::with_capacity(n);
    for i in 0..n {
        let substituted = coefficients.with_column(i, &constants)?;
        solution.push(algorithm.determinant(&substituted)? / d);
    }
    Ok(solution)
}

// ============================================================================
// Free Functions
// ============================================================================

/// Solve an N×(N+1) augmented system by Cramer's rule with Laplace
/// expansion.
///
/// # Errors
/// Returns `NotSquareMatrix` if the rows are ragged or the coefficient part
/// (all but the last column) is not square.
///
/// # Example
/// ```
/// use numeric_kernel::engine::solve;
///
/// // x + y = 3, 2x + 5y = 12
/// let x = solve(&[[1.0, 1.0, 3.0], [2.0, 5.0, 12.0]]).unwrap();
/// assert!((x[0] - 1.0).abs() < 1e-12);
/// assert!((x[1] - 2.0).abs() < 1e-12);
///
/// // Dependent system: infinitely many solutions
/// let x = solve(&[[1.0, 2.0, 3.0], [4.0, 8.0, 12.0]]).unwrap();
/// assert!(x.iter().all(|v| v.is_nan()));
/// ```
pub fn solve<R: AsRef<[f64]>>(rows: &[R]) -> NumericResult<Vec<f64>> {
    if !is_matrix(rows) {
        return Err(NumericError::NotSquareMatrix);
    }
    let augmented = Matrix::from_rows(rows)?;
    cramer(&LaplaceExpansion, &augmented)
}

/// Solve a compile-time-sized augmented system.
///
/// # Errors
/// Returns `NotSquareMatrix` unless `M == N + 1`.
pub fn solve_array<const N: usize, const M: usize>(
    augmented: &[[f64; M]; N],
) -> NumericResult<[f64; N]> {
    if M != N + 1 {
        return Err(NumericError::NotSquareMatrix);
    }
    let solution = solve(augmented.as_slice())?;
    solution
        .try_into()
        .map_err(|_| NumericError::NotSquareMatrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SolverConfig;
    use crate::engine::{create_from_config, LuDecomposition};

    #[test]
    fn test_solve_unique() {
        let x = solve(&[[1.0, 1.0, 3.0], [2.0, 5.0, 12.0]]).unwrap();
        assert_eq!(x.len(), 2);
        assert!((x[0] - 1.0).abs() < 1e-12);
        assert!((x[1] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_solve_three_unknowns() {
        // 2x + y - z = 8, -3x - y + 2z = -11, -2x + y + 2z = -3
        let x = solve_array(&[
            [2.0, 1.0, -1.0, 8.0],
            [-3.0, -1.0, 2.0, -11.0],
            [-2.0, 1.0, 2.0, -3.0],
        ])
        .unwrap();
        assert!((x[0] - 2.0).abs() < 1e-12);
        assert!((x[1] - 3.0).abs() < 1e-12);
        assert!((x[2] + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_solve_dependent_gives_nan() {
        let x = solve(&[[1.0, 2.0, 3.0], [4.0, 8.0, 12.0]]).unwrap();
        assert!(x[0].is_nan());
        assert!(x[1].is_nan());
    }

    #[test]
    fn test_solve_inconsistent_gives_infinity() {
        let x = solve(&[[1.0, 2.0, 3.0], [1.0, 2.0, 0.0]]).unwrap();
        assert!(!x[0].is_finite());
        assert!(!x[1].is_finite());
        assert!(!x[0].is_nan());
        assert!(!x[1].is_nan());
    }

    #[test]
    fn test_solve_single_equation() {
        assert_eq!(solve(&[[4.0, 10.0]]).unwrap(), vec![2.5]);
    }

    #[test]
    fn test_solve_bad_dimensions() {
        assert_eq!(
            solve(&[vec![1.0, 2.0], vec![1.0, 2.0, 3.0]]),
            Err(NumericError::NotSquareMatrix)
        );
        assert_eq!(
            solve(&[[1.0, 2.0, 3.0, 4.0], [5.0, 6.0, 7.0, 8.0]]),
            Err(NumericError::NotSquareMatrix)
        );
        assert_eq!(solve(&[[1.0], [2.0]]), Err(NumericError::NotSquareMatrix));
        assert_eq!(
            solve_array(&[[1.0, 2.0], [3.0, 4.0]]),
            Err(NumericError::NotSquareMatrix)
        );
    }

    #[test]
    fn test_solver_with_lu() {
        let solver = LinearSolver::new(Box::new(LuDecomposition));
        let augmented = Matrix::from_array(&[[1.0, 1.0, 3.0], [2.0, 5.0, 12.0]]).unwrap();
        let x = solver.solve(&augmented).unwrap();
        assert!((x[0] - 1.0).abs() < 1e-9);
        assert!((x[1] - 2.0).abs() < 1e-9);
        assert_eq!(solver.algorithm_name(), "LU");
    }

    fn assert_same_components(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            if e.is_nan() {
                assert!(a.is_nan(), "{:?} != {:?}", actual, expected);
            } else {
                assert_eq!(a, e, "{:?} != {:?}", actual, expected);
            }
        }
    }

    #[test]
    fn test_singular_systems_agree_across_strategies() {
        let dependent = [
            [1.0, 2.0, 3.0, 6.0],
            [4.0, 5.0, 6.0, 15.0],
            [7.0, 8.0, 9.0, 24.0],
        ];
        let inconsistent = [
            [1.0, 2.0, 3.0, 6.0],
            [4.0, 5.0, 6.0, 15.0],
            [7.0, 8.0, 9.0, 0.0],
        ];

        for config in [SolverConfig::exact(), SolverConfig::fast()] {
            let solver = create_from_config(config).unwrap();

            let x = solver.solve(&Matrix::from_array(&dependent).unwrap()).unwrap();
            assert!(x.iter().all(|v| v.is_nan()), "{}: {:?}", solver.algorithm_name(), x);
            assert_same_components(&x, &solve(&dependent).unwrap());

            let x = solver.solve(&Matrix::from_array(&inconsistent).unwrap()).unwrap();
            assert!(
                x.iter().all(|v| v.is_infinite()),
                "{}: {:?}",
                solver.algorithm_name(),
                x
            );
            assert_same_components(&x, &solve(&inconsistent).unwrap());
        }
    }

    #[test]
    fn test_lu_solver_reports_exact_zero_determinant() {
        let solver = create_from_config(SolverConfig::fast()).unwrap();
        let singular =
            Matrix::from_array(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]).unwrap();
        assert_eq!(solver.det(&singular), Ok(0.0));
        assert!((solver.cofactor(&singular, 0, 0).unwrap() + 3.0).abs() < 1e-12);

        let regular =
            Matrix::from_array(&[[6.0, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]]).unwrap();
        assert!((solver.det(&regular).unwrap() + 306.0).abs() < 1e-9);
    }

    #[test]
    fn test_solver_order_cap() {
        let solver = LinearSolver::with_max_order(Box::new(LaplaceExpansion), 2);
        let big = Matrix::from_array(&[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]).unwrap();
        assert_eq!(
            solver.det(&big),
            Err(NumericError::OrderTooLarge { order: 3, max: 2 })
        );

        let small = Matrix::from_array(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(solver.det(&small), Ok(-2.0));
        assert_eq!(solver.cofactor(&small, 0, 0), Ok(4.0));
    }

    #[test]
    fn test_solver_rejects_non_augmented() {
        let solver = LinearSolver::default();
        let square = Matrix::from_array(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(solver.solve(&square), Err(NumericError::NotSquareMatrix));
    }

    #[test]
    fn test_debug() {
        let solver = LinearSolver::default();
        assert_eq!(
            format!("{:?}", solver),
            "LinearSolver { algorithm: \"Laplace\", max_order: None }"
        );
    }
}
