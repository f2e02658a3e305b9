//! Dense LU solve, used when [`SolveStrategy::Dense`](crate::SolveStrategy)
//! is selected.
//!
//! O(N³) and allocation-heavy. Useful for cross-checking the banded path
//! and for small grids; produces the same answer to round-off.

use nalgebra::{DMatrix, DVector};
use seep_core::{Result, SeepError};

/// Solve `matrix · x = rhs` by LU decomposition with partial pivoting.
///
/// Returns `Err(SeepError::DimensionMismatch)` if `matrix` is not square or
/// `rhs` does not have one entry per row.
pub fn solve(matrix: DMatrix<f64>, rhs: &[f64]) -> Result<Vec<f64>> {
    let n = matrix.nrows();
    if matrix.ncols() != n {
        return Err(SeepError::DimensionMismatch {
            what: "matrix columns",
            expected: n,
            actual: matrix.ncols(),
        });
    }
    if rhs.len() != n {
        return Err(SeepError::DimensionMismatch {
            what: "rhs",
            expected: n,
            actual: rhs.len(),
        });
    }

    let b = DVector::from_column_slice(rhs);
    let lu = matrix.lu();
    let Some(x) = lu.solve(&b) else {
        let u = lu.u();
        let row = (0..u.nrows()).find(|&i| u[(i, i)] == 0.0).unwrap_or(0);
        tracing::warn!(row, "singular dense system");
        return Err(SeepError::SingularSystem {
            row,
            pivot: u[(row, row)],
        });
    };

    if let Some(row) = x.iter().position(|v| !v.is_finite()) {
        tracing::warn!(row, "non-finite solution from dense solve");
        return Err(SeepError::SingularSystem {
            row,
            pivot: f64::NAN,
        });
    }
    Ok(x.iter().copied().collect())
}
