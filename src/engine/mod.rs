// ============================================================================
// Engine Module
// Determinant algorithms and the Cramer's-rule solver
// ============================================================================

mod laplace;
mod lu;
mod solver;

pub mod factory;

pub use factory::{create_from_config, LinearSolverBuilder};
pub use laplace::{cofactor, det, det_array, LaplaceExpansion};
pub use lu::LuDecomposition;
pub use solver::{solve, solve_array, LinearSolver};
