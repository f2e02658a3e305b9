//! Uniform 1D finite-volume grid on `0 < x < L`.

use crate::error::{Result, SeepError};
use crate::field::SourceField;

/// A uniform cell-centred grid of `N` cells covering `[0, L]`.
///
/// Cell `j` spans `[j·h, (j+1)·h]` with centre `x_j = h/2 + j·h`, where
/// `h = L/N`. Face `f` sits at `x = f·h` for `f = 0..=N`; faces `0` and `N`
/// are the domain boundaries.
///
/// # Examples
///
/// ```
/// use seep_core::Grid;
///
/// let grid = Grid::new(4, 2.0).unwrap();
/// assert_eq!(grid.cell_width(), 0.5);
/// assert_eq!(grid.centers(), vec![0.25, 0.75, 1.25, 1.75]);
/// assert_eq!(grid.face(4), 2.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
    cells: usize,
    length: f64,
    width: f64,
}

impl Grid {
    /// Smallest grid with interior structure. A single cell has no faces to
    /// exchange flux across and is rejected.
    pub const MIN_CELLS: usize = 2;

    /// Create a grid of `cells` cells over a domain of length `length`.
    ///
    /// Returns `Err(SeepError::InvalidConfiguration)` if `cells < 2`,
    /// `length` is not finite and positive, or `h²` is not a normal `f64`
    /// (the operator scales by `1/h²`).
    pub fn new(cells: usize, length: f64) -> Result<Self> {
        if cells < Self::MIN_CELLS {
            return Err(SeepError::config(format!(
                "grid needs at least {} cells, got {cells}",
                Self::MIN_CELLS
            )));
        }
        if !length.is_finite() || length <= 0.0 {
            return Err(SeepError::config(format!(
                "domain length must be finite and positive, got {length}"
            )));
        }
        let width = length / cells as f64;
        if !(width * width).is_normal() {
            return Err(SeepError::config(format!(
                "cell width {width} squared is not a normal f64 ({cells} cells over {length})"
            )));
        }
        Ok(Self {
            cells,
            length,
            width,
        })
    }

    /// Number of cells `N`.
    pub fn cells(&self) -> usize {
        self.cells
    }

    /// Domain length `L`.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Cell width `h = L/N`.
    pub fn cell_width(&self) -> f64 {
        self.width
    }

    /// Centre of cell `j`.
    pub fn center(&self, j: usize) -> f64 {
        self.width * 0.5 + j as f64 * self.width
    }

    /// All cell centres in order.
    pub fn centers(&self) -> Vec<f64> {
        (0..self.cells).map(|j| self.center(j)).collect()
    }

    /// Coordinate of face `f` (`0..=N`).
    pub fn face(&self, f: usize) -> f64 {
        f as f64 * self.width
    }

    /// Evaluate `f` at every cell centre.
    pub fn sample(&self, f: impl Fn(f64) -> f64) -> Vec<f64> {
        (0..self.cells).map(|j| f(self.center(j))).collect()
    }

    /// Evaluate a source field at every cell centre at time `t`.
    pub fn sample_source<S: SourceField + ?Sized>(&self, source: &S, t: f64) -> Vec<f64> {
        (0..self.cells).map(|j| source.at(self.center(j), t)).collect()
    }

    /// Finite-volume integral `h·Σ values` of a cell-centred quantity.
    pub fn integrate(&self, values: &[f64]) -> Result<f64> {
        self.check_len("values", values)?;
        Ok(self.width * values.iter().sum::<f64>())
    }

    /// Fail with `DimensionMismatch` unless `values` has one entry per cell.
    pub fn check_len(&self, what: &'static str, values: &[f64]) -> Result<()> {
        if values.len() != self.cells {
            return Err(SeepError::DimensionMismatch {
                what,
                expected: self.cells,
                actual: values.len(),
            });
        }
        Ok(())
    }
}
