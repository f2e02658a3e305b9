//! Banded storage for the discrete diffusion operator.

use nalgebra::DMatrix;
use seep_core::{Result, SeepError};

/// The discrete diffusion operator `A`, with `dq/dt ≈ A·q` for zero source.
///
/// Stored in symmetric tridiagonal form: `diagonal[i]` holds `A[i][i]` and
/// `coupling[i]` holds both `A[i][i+1]` and `A[i+1][i]`, the scaled face
/// diffusivity `k(x_{i+1})/h²` linking cells `i` and `i+1`. Each diagonal
/// entry is minus the sum of the couplings in its row, so every row (and,
/// by symmetry, every column) sums to zero.
///
/// Values are produced by [`OperatorBuilder`](crate::OperatorBuilder) and
/// never mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct OperatorMatrix {
    diagonal: Vec<f64>,
    coupling: Vec<f64>,
    cell_width: f64,
}

impl OperatorMatrix {
    /// Build from scaled face couplings. `coupling.len()` is `N - 1`.
    pub(crate) fn from_couplings(coupling: Vec<f64>, cell_width: f64) -> Self {
        let n = coupling.len() + 1;
        let diagonal = (0..n)
            .map(|i| {
                let left = if i > 0 { coupling[i - 1] } else { 0.0 };
                let right = if i + 1 < n { coupling[i] } else { 0.0 };
                -(left + right)
            })
            .collect();
        Self {
            diagonal,
            coupling,
            cell_width,
        }
    }

    /// Matrix dimension `N`.
    pub fn dim(&self) -> usize {
        self.diagonal.len()
    }

    /// Width `h` of the cells the operator was assembled on.
    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    /// Main diagonal, length `N`.
    pub fn diagonal(&self) -> &[f64] {
        &self.diagonal
    }

    /// Off-diagonal couplings, length `N - 1`. Serves as both the sub- and
    /// super-diagonal.
    pub fn coupling(&self) -> &[f64] {
        &self.coupling
    }

    /// Entry `A[row][col]`. Zero outside the three central bands.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not below [`dim`](Self::dim).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        let n = self.dim();
        assert!(row < n && col < n, "index ({row}, {col}) out of range for {n}x{n}");
        if row == col {
            self.diagonal[row]
        } else if col == row + 1 {
            self.coupling[row]
        } else if row == col + 1 {
            self.coupling[col]
        } else {
            0.0
        }
    }

    /// Sum of row `i`. Zero up to round-off for every row.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not below [`dim`](Self::dim).
    pub fn row_sum(&self, i: usize) -> f64 {
        let n = self.dim();
        assert!(i < n, "row {i} out of range for {n}x{n}");
        let mut sum = self.diagonal[i];
        if i > 0 {
            sum += self.coupling[i - 1];
        }
        if i + 1 < n {
            sum += self.coupling[i];
        }
        sum
    }

    /// `true` if `A[i][j] == A[j][i]` exactly for all `i, j`.
    ///
    /// Always holds for operators built here; exposed for dense cross-checks.
    pub fn is_symmetric(&self) -> bool {
        let dense = self.to_dense();
        dense == dense.transpose()
    }

    /// Matrix-vector product `A·q`.
    pub fn apply(&self, q: &[f64]) -> Result<Vec<f64>> {
        let n = self.dim();
        if q.len() != n {
            return Err(SeepError::DimensionMismatch {
                what: "q",
                expected: n,
                actual: q.len(),
            });
        }
        Ok((0..n)
            .map(|i| {
                let mut v = self.diagonal[i] * q[i];
                if i > 0 {
                    v += self.coupling[i - 1] * q[i - 1];
                }
                if i + 1 < n {
                    v += self.coupling[i] * q[i + 1];
                }
                v
            })
            .collect())
    }

    /// Dense `N×N` copy of the operator.
    pub fn to_dense(&self) -> DMatrix<f64> {
        let n = self.dim();
        DMatrix::from_fn(n, n, |i, j| self.get(i, j))
    }
}
