//! Finite-volume assembly of the diffusion operator.
//!
//! The flux across the face shared by cells `j` and `j+1` is
//! `k(x_{j+1}) · (q_{j+1} - q_j) / h`, with `k` evaluated exactly at the face
//! coordinate `(j+1)·h`. Dividing the net flux into a cell by its width
//! gives the row of `A`. The two boundary faces carry zero flux (Neumann),
//! so the diffusivity is never evaluated there.

use crate::matrix::OperatorMatrix;
use seep_core::{Diffusivity, Grid, Result, SeepError};

/// Assembles [`OperatorMatrix`] values on a fixed grid.
///
/// Holding the grid lets a time loop rebuild the operator every step when
/// the diffusivity depends on time or state, without re-validating the grid.
///
/// # Examples
///
/// ```
/// use seep_core::{ConstantDiffusivity, Grid};
/// use seep_operator::OperatorBuilder;
///
/// let builder = OperatorBuilder::new(Grid::new(4, 1.0).unwrap());
/// let a = builder.build(&ConstantDiffusivity(1.0)).unwrap();
/// // h = 0.25, so each coupling is 1 / h² = 16.
/// assert_eq!(a.coupling(), &[16.0, 16.0, 16.0]);
/// assert_eq!(a.diagonal(), &[-16.0, -32.0, -32.0, -16.0]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OperatorBuilder {
    grid: Grid,
}

impl OperatorBuilder {
    /// Create a builder for `grid`.
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    /// The grid operators are assembled on.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Assemble the operator for diffusivity `k`.
    ///
    /// Returns `Err(SeepError::InvalidDiffusivity)` for the first interior
    /// face where `k` is negative or not finite, or so large that `k/h²`
    /// (or a diagonal entry summing two such couplings) overflows.
    pub fn build<K: Diffusivity + ?Sized>(&self, k: &K) -> Result<OperatorMatrix> {
        let n = self.grid.cells();
        let h = self.grid.cell_width();
        let inv_h2 = 1.0 / (h * h);

        let mut coupling = Vec::with_capacity(n - 1);
        for face in 1..n {
            let x = self.grid.face(face);
            let value = k.at(x);
            let c = value * inv_h2;
            // Each diagonal entry is minus the sum of two couplings.
            if !value.is_finite() || value < 0.0 || !(2.0 * c).is_finite() {
                return Err(SeepError::InvalidDiffusivity { face, x, value });
            }
            coupling.push(c);
        }

        let (min, max) = coupling
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &c| {
                (lo.min(c), hi.max(c))
            });
        tracing::debug!(
            cells = n,
            length = self.grid.length(),
            min_coupling = min,
            max_coupling = max,
            "assembled diffusion operator"
        );

        Ok(OperatorMatrix::from_couplings(coupling, h))
    }
}

/// Assemble the operator for `cells` cells over `[0, length]`.
///
/// Shorthand for `OperatorBuilder::new(Grid::new(cells, length)?).build(k)`.
/// Fails with `InvalidConfiguration` for `cells < 2` or a bad length.
pub fn build<K: Diffusivity + ?Sized>(cells: usize, k: &K, length: f64) -> Result<OperatorMatrix> {
    OperatorBuilder::new(Grid::new(cells, length)?).build(k)
}
