// ============================================================================
// Solver Factory
// Creates linear solvers with proper configuration
// ============================================================================

use crate::domain::config::{DeterminantStrategy, SolverConfig};
use crate::engine::{LaplaceExpansion, LinearSolver, LuDecomposition};
use crate::interfaces::DeterminantAlgorithm;
use crate::numeric::NumericResult;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a linear solver from configuration
///
/// # Arguments
/// * `config` - Solver configuration
///
/// # Returns
/// * `NumericResult<LinearSolver>` - Configured solver or `InvalidConfig`
///
/// # Example
/// ```
/// use numeric_kernel::prelude::*;
///
/// let solver = create_from_config(SolverConfig::bounded(4)).unwrap();
/// assert_eq!(solver.algorithm_name(), "Laplace");
/// ```
pub fn create_from_config(config: SolverConfig) -> NumericResult<LinearSolver> {
    // Validate configuration first
    config.validate()?;

    let algorithm = create_determinant_algorithm(config.strategy);
    tracing::debug!(
        algorithm = algorithm.name(),
        max_order = ?config.max_order,
        "creating linear solver"
    );

    Ok(match config.max_order {
        Some(max) => LinearSolver::with_max_order(algorithm, max),
        None => LinearSolver::new(algorithm),
    })
}

/// Creates the determinant algorithm for a strategy
fn create_determinant_algorithm(strategy: DeterminantStrategy) -> Box<dyn DeterminantAlgorithm> {
    match strategy {
        DeterminantStrategy::Laplace => Box::new(LaplaceExpansion::new()),
        DeterminantStrategy::Lu => Box::new(LuDecomposition::new()),
    }
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating linear solvers with fluent API
///
/// # Example
/// ```
/// use numeric_kernel::prelude::*;
///
/// let solver = LinearSolverBuilder::new()
///     .lu()
///     .with_max_order(16)
///     .build()
///     .unwrap();
/// assert_eq!(solver.max_order(), Some(16));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LinearSolverBuilder {
    config: SolverConfig,
}

impl LinearSolverBuilder {
    /// Create a new builder (Laplace expansion, no order cap)
    pub fn new() -> Self {
        Self::default()
    }

    /// Use Laplace expansion (default)
    pub fn laplace(mut self) -> Self {
        self.config.strategy = DeterminantStrategy::Laplace;
        self
    }

    /// Use LU decomposition
    pub fn lu(mut self) -> Self {
        self.config.strategy = DeterminantStrategy::Lu;
        self
    }

    /// Set maximum matrix order
    pub fn with_max_order(mut self, max_order: usize) -> Self {
        self.config.max_order = Some(max_order);
        self
    }

    /// Build the solver
    pub fn build(self) -> NumericResult<LinearSolver> {
        create_from_config(self.config)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &SolverConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Matrix;
    use crate::numeric::NumericError;

    #[test]
    fn test_create_laplace_solver() {
        let solver = create_from_config(SolverConfig::exact()).unwrap();
        assert_eq!(solver.algorithm_name(), "Laplace");
        assert_eq!(solver.max_order(), None);
    }

    #[test]
    fn test_create_lu_solver() {
        let solver = create_from_config(SolverConfig::fast()).unwrap();
        assert_eq!(solver.algorithm_name(), "LU");
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(matches!(
            create_from_config(SolverConfig::bounded(0)),
            Err(NumericError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_builder_pattern() {
        let solver = LinearSolverBuilder::new()
            .laplace()
            .with_max_order(3)
            .build()
            .unwrap();
        assert_eq!(solver.algorithm_name(), "Laplace");
        assert_eq!(solver.max_order(), Some(3));

        let m = Matrix::from_array(&[[6.0, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]]).unwrap();
        assert_eq!(solver.det(&m), Ok(-306.0));
    }

    #[test]
    fn test_builder_config_inspection() {
        let builder = LinearSolverBuilder::new().lu().with_max_order(8);
        assert_eq!(builder.get_config().strategy, DeterminantStrategy::Lu);
        assert_eq!(builder.get_config().max_order, Some(8));
    }
}
