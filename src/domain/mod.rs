// ============================================================================
// Domain Models Module
// Matrix value type and solver configuration
// ============================================================================

pub mod config;
pub mod matrix;

pub use config::{DeterminantStrategy, SolverConfig};
pub use matrix::{is_matrix, is_square_matrix, Matrix};
