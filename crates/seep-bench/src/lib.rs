//! Benchmark profiles for the Seep diffusion kernel.
//!
//! - [`reference_profile`]: 1K cells, variable diffusivity, Crank–Nicolson
//! - [`stress_profile`]: 100K cells, same setup

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use seep_core::{Grid, Result};
use seep_operator::{OperatorBuilder, OperatorMatrix};
use seep_solver::{Scheme, SolveStrategy, StepConfig, StepSolver};

/// A ready-to-step problem: operator, solver, initial state, and zero source.
pub struct Profile {
    /// Grid the operator was assembled on.
    pub grid: Grid,
    /// Assembled operator.
    pub operator: OperatorMatrix,
    /// Configured step solver.
    pub solver: StepSolver,
    /// Initial state.
    pub state: Vec<f64>,
    /// Source sample reused as both old and new level.
    pub source: Vec<f64>,
}

/// Diffusivity used by every profile: smooth, strictly positive.
pub fn profile_diffusivity(x: f64) -> f64 {
    0.05 + 0.2 * x * (1.0 - x)
}

/// Build a profile with `cells` cells on the unit interval.
pub fn profile(cells: usize, strategy: SolveStrategy) -> Result<Profile> {
    let grid = Grid::new(cells, 1.0)?;
    let operator = OperatorBuilder::new(grid).build(&profile_diffusivity)?;
    let solver = StepSolver::new(
        StepConfig::new(1e-3, Scheme::CrankNicolson).with_strategy(strategy),
    )?;
    Ok(Profile {
        grid,
        operator,
        solver,
        state: grid.sample(|x| (6.0 * x).sin()),
        source: vec![0.0; cells],
    })
}

/// 1K-cell banded profile.
pub fn reference_profile() -> Result<Profile> {
    profile(1_000, SolveStrategy::Tridiagonal)
}

/// 100K-cell banded profile.
pub fn stress_profile() -> Result<Profile> {
    profile(100_000, SolveStrategy::Tridiagonal)
}
