// ============================================================================
// Solver Configuration
// Determinant strategy selection and size limits for the linear solver
// ============================================================================

use crate::numeric::{NumericError, NumericResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Determinant Strategy
// ============================================================================

/// Defines how determinants are computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DeterminantStrategy {
    /// Cofactor (Laplace) expansion along the first column
    /// - Exact for small integer matrices; singular systems give exact zero
    /// - O(N!) time, intended for small fixed orders
    #[default]
    Laplace,

    /// LU decomposition with partial pivoting
    /// - O(N^3) time
    /// - Near-zero determinants up to order 8 are recomputed by Laplace
    ///   expansion, so singular systems still give NaN / Infinity
    Lu,
}

// ============================================================================
// Complete Solver Configuration
// ============================================================================

/// Configuration for creating a linear solver
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolverConfig {
    /// Determinant algorithm
    pub strategy: DeterminantStrategy,

    /// Optional: Largest accepted matrix order
    /// None means unlimited
    pub max_order: Option<usize>,
}

impl SolverConfig {
    /// Create a new configuration with the given strategy and no order cap
    pub fn new(strategy: DeterminantStrategy) -> Self {
        Self {
            strategy,
            max_order: None,
        }
    }

    /// Builder method: Set maximum matrix order
    pub fn with_max_order(mut self, max_order: usize) -> Self {
        self.max_order = Some(max_order);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> NumericResult<()> {
        if self.max_order == Some(0) {
            return Err(NumericError::InvalidConfig {
                reason: "max order must be at least 1",
            });
        }
        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::exact()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl SolverConfig {
    /// Laplace expansion without an order cap
    pub fn exact() -> Self {
        Self::new(DeterminantStrategy::Laplace)
    }

    /// Laplace expansion refusing matrices above `max_order`
    pub fn bounded(max_order: usize) -> Self {
        Self::exact().with_max_order(max_order)
    }

    /// LU decomposition for larger systems
    pub fn fast() -> Self {
        Self::new(DeterminantStrategy::Lu)
    }
}
