// ============================================================================
// Matrix
// Dense row-major matrix value with shape validation
// ============================================================================

use crate::numeric::{NumericError, NumericResult};
use std::fmt;
use std::ops::Index;

// ============================================================================
// Shape Predicates
// ============================================================================

/// Whether `rows` form a matrix: non-empty, the first row non-empty, every
/// row the same length.
///
/// Element values are not inspected; NaN is still a number here.
pub fn is_matrix<R: AsRef<[f64]>>(rows: &[R]) -> bool {
    let Some(first) = rows.first() else {
        return false;
    };
    let width = first.as_ref().len();
    width > 0 && rows.iter().all(|row| row.as_ref().len() == width)
}

/// Whether `rows` form a matrix with as many rows as columns.
pub fn is_square_matrix<R: AsRef<[f64]>>(rows: &[R]) -> bool {
    is_matrix(rows) && rows[0].as_ref().len() == rows.len()
}

// ============================================================================
// Matrix
// ============================================================================

/// Dense matrix of `f64` stored row-major.
///
/// Construction validates the shape once; every derived matrix (minors,
/// column substitutions) is a fresh allocation, so values never alias.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Build from a slice of rows.
    ///
    /// # Errors
    /// Returns `InvalidShape` unless the rows pass [`is_matrix`].
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> NumericResult<Self> {
        if rows.is_empty() {
            return Err(NumericError::InvalidShape {
                reason: "matrix has no rows",
            });
        }
        if !is_matrix(rows) {
            return Err(NumericError::InvalidShape {
                reason: "rows must be non-empty and of equal length",
            });
        }
        let cols = rows[0].as_ref().len();
        let data = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Build from a fixed-size array.
    ///
    /// # Errors
    /// Returns `InvalidShape` if either dimension is zero.
    pub fn from_array<const N: usize, const M: usize>(
        array: &[[f64; M]; N],
    ) -> NumericResult<Self> {
        Self::from_rows(array.as_slice())
    }

    fn from_raw(data: Vec<f64>, rows: usize, cols: usize) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Order of a square matrix, `None` otherwise.
    #[inline]
    pub fn order(&self) -> Option<usize> {
        self.is_square().then_some(self.rows)
    }

    /// Element at `(r, c)`, `None` when out of bounds.
    #[inline]
    pub fn get(&self, r: usize, c: usize) -> Option<f64> {
        (r < self.rows && c < self.cols).then(|| self.data[r * self.cols + c])
    }

    /// Row `r` as a slice.
    ///
    /// # Panics
    /// Panics if `r >= rows()`.
    #[inline]
    pub fn row(&self, r: usize) -> &[f64] {
        let start = r * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Row-major element buffer.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Copy of column `c`.
    pub fn column(&self, c: usize) -> Option<Vec<f64>> {
        (c < self.cols).then(|| (0..self.rows).map(|r| self.data[r * self.cols + c]).collect())
    }

    /// Copy as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.cols).map(<[f64]>::to_vec).collect()
    }

    // ========================================================================
    // Derived Matrices
    // ========================================================================

    /// The (N-1)×(N-1) matrix left after deleting row `r` and column `c`.
    ///
    /// # Errors
    /// - `NotSquareMatrix` if the matrix is not square
    /// - `IndexOutOfBounds` if `r` or `c` is outside the matrix, or the
    ///   matrix is 1×1 and has no minor
    pub fn minor(&self, r: usize, c: usize) -> NumericResult<Matrix> {
        let n = self.order().ok_or(NumericError::NotSquareMatrix)?;
        if r >= n || c >= n || n < 2 {
            return Err(NumericError::IndexOutOfBounds {
                row: r,
                col: c,
                order: n,
            });
        }

        let mut data = Vec::with_capacity((n - 1) * (n - 1));
        for (i, row) in self.data.chunks(n).enumerate() {
            if i == r {
                continue;
            }
            data.extend(
                row.iter()
                    .enumerate()
                    .filter(|&(j, _)| j != c)
                    .map(|(_, &v)| v),
            );
        }
        Ok(Self::from_raw(data, n - 1, n - 1))
    }

    /// Copy with column `c` replaced by `values`.
    ///
    /// # Errors
    /// - `IndexOutOfBounds` if `c >= cols()`
    /// - `InvalidShape` if `values.len() != rows()`
    pub fn with_column(&self, c: usize, values: &[f64]) -> NumericResult<Matrix> {
        if c >= self.cols {
            return Err(NumericError::IndexOutOfBounds {
                row: 0,
                col: c,
                order: self.cols,
            });
        }
        if values.len() != self.rows {
            return Err(NumericError::InvalidShape {
                reason: "replacement column length must equal row count",
            });
        }
        let mut copy = self.clone();
        for (r, &v) in values.iter().enumerate() {
            copy.data[r * self.cols + c] = v;
        }
        Ok(copy)
    }

    /// Copy without the last column.
    ///
    /// # Errors
    /// Returns `InvalidShape` if only one column exists.
    pub fn without_last_column(&self) -> NumericResult<Matrix> {
        if self.cols < 2 {
            return Err(NumericError::InvalidShape {
                reason: "cannot drop the only column",
            });
        }
        let cols = self.cols - 1;
        let data = self
            .data
            .chunks(self.cols)
            .flat_map(|row| row[..cols].iter().copied())
            .collect();
        Ok(Self::from_raw(data, self.rows, cols))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, (r, c): (usize, usize)) -> &f64 {
        assert!(c < self.cols, "column {} out of bounds ({})", c, self.cols);
        &self.data[r * self.cols + c]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", v)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
