// ============================================================================
// Numeric Kernel Library
// Exact fractions, integer ranges, fixed-decimal display and small linear systems
// ============================================================================

//! # Numeric Kernel
//!
//! Small, dependency-light numeric building blocks.
//!
//! ## Features
//!
//! - **IntegerRange**: directional arithmetic progressions with lazy iteration
//! - **Fraction**: exact rationals kept in lowest terms with a positive denominator
//! - **Fixed**: floating values rendered with a fixed number of decimal places
//! - **Determinants and Cramer's rule** for small dense matrices, with
//!   pluggable Laplace / LU strategies
//!
//! Singular systems are reported through the solution values rather than as
//! errors: `NaN` for a dependent system, `±Infinity` for an inconsistent one.
//!
//! ## Example
//!
//! ```rust
//! use numeric_kernel::prelude::*;
//!
//! // Exact arithmetic
//! let half = Fraction::new(1, 2).unwrap();
//! let third = Fraction::new(1, 3).unwrap();
//! assert_eq!(half.checked_add(third).unwrap().to_string(), "5/6");
//!
//! // Ranges
//! let evens: Vec<i64> = range_step(0, 10, 2).unwrap().into_iter().collect();
//! assert_eq!(evens, vec![0, 2, 4, 6, 8]);
//!
//! // Fixed-decimal display
//! assert_eq!(Fixed::round(1.237, 2).unwrap().to_string(), "1.24");
//!
//! // x + y = 3, 2x + 5y = 12
//! let x = solve(&[[1.0, 1.0, 3.0], [2.0, 5.0, 12.0]]).unwrap();
//! assert!((x[0] - 1.0).abs() < 1e-12 && (x[1] - 2.0).abs() < 1e-12);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{is_matrix, is_square_matrix, DeterminantStrategy, Matrix, SolverConfig};
    pub use crate::engine::{
        cofactor, create_from_config, det, det_array, solve, solve_array, LaplaceExpansion,
        LinearSolver, LinearSolverBuilder, LuDecomposition,
    };
    pub use crate::interfaces::DeterminantAlgorithm;
    pub use crate::numeric::{
        divide, fixed, fraction, gcd, max, range, range_from, range_step, sum, Fixed, Fraction,
        IntegerRange, NumericError, NumericResult,
    };
}
