// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod determinant;

pub use determinant::DeterminantAlgorithm;
