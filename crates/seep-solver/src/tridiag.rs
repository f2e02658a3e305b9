//! Thomas algorithm for symmetric tridiagonal systems.

use seep_core::{Result, SeepError};

/// Solve `M·x = rhs` for symmetric tridiagonal `M`.
///
/// - `diagonal`: main diagonal, length `n`
/// - `off`: sub- and super-diagonal, length `n - 1`
/// - `rhs`: right-hand side, length `n`
///
/// O(n) forward sweep and back substitution without pivoting, which is
/// stable for the diagonally dominant systems the step solver builds.
/// Returns `Err(SeepError::SingularSystem)` if a pivot is zero, vanishes
/// relative to its row, or the result is not finite.
///
/// # Panics
///
/// Panics if the slice lengths are inconsistent; callers size them from
/// the same operator.
pub fn solve_symmetric(diagonal: &[f64], off: &[f64], rhs: &[f64]) -> Result<Vec<f64>> {
    let n = diagonal.len();
    assert!(n > 0, "system size must be > 0");
    assert_eq!(off.len(), n - 1, "off-diagonal must have n - 1 entries");
    assert_eq!(rhs.len(), n, "rhs must have n entries");

    let mut c_prime = vec![0.0; n.saturating_sub(1)];
    let mut d_prime = vec![0.0; n];

    for i in 0..n {
        let lower = if i > 0 { off[i - 1] } else { 0.0 };
        let upper = if i + 1 < n { off[i] } else { 0.0 };
        let den = if i > 0 {
            diagonal[i] - lower * c_prime[i - 1]
        } else {
            diagonal[i]
        };

        let scale = diagonal[i].abs() + lower.abs() + upper.abs();
        if !den.is_finite() || den.abs() <= f64::EPSILON * scale {
            tracing::warn!(row = i, pivot = den, "singular tridiagonal system");
            return Err(SeepError::SingularSystem { row: i, pivot: den });
        }

        if i + 1 < n {
            c_prime[i] = upper / den;
        }
        d_prime[i] = if i > 0 {
            (rhs[i] - lower * d_prime[i - 1]) / den
        } else {
            rhs[i] / den
        };
    }

    let mut x = vec![0.0; n];
    x[n - 1] = d_prime[n - 1];
    for i in (0..n - 1).rev() {
        x[i] = d_prime[i] - c_prime[i] * x[i + 1];
    }

    if let Some(row) = x.iter().position(|v| !v.is_finite()) {
        tracing::warn!(row, "non-finite solution from tridiagonal solve");
        return Err(SeepError::SingularSystem {
            row,
            pivot: f64::NAN,
        });
    }
    Ok(x)
}
