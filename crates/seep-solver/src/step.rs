//! Single-step theta-method advance.
//!
//! Each step solves
//!
//! ```text
//! (I − θ·dt·A)·q_new = (I + (1−θ)·dt·A)·q_old + dt·(θ·s_new + (1−θ)·s_old)
//! ```
//!
//! For `k ≥ 0` and `θ ≥ 0` the left-hand matrix is symmetric, tridiagonal
//! and strictly diagonally dominant, so the banded solve always succeeds.
//! `θ = 0` is not special-cased: the left-hand matrix is then the identity
//! and the sweep reproduces the explicit update.

use nalgebra::DMatrix;
use seep_core::{Diffusivity, Grid, Result, SeepError};
use seep_operator::{OperatorBuilder, OperatorMatrix};

use crate::config::{Scheme, SolveStrategy, StepConfig};
use crate::{dense, tridiag};

/// Advances a state by one theta-method step.
///
/// Holds only a validated [`StepConfig`]; every call is independent and the
/// inputs are never mutated.
///
/// # Examples
///
/// ```
/// use seep_core::{ConstantDiffusivity, Grid};
/// use seep_operator::OperatorBuilder;
/// use seep_solver::{Scheme, StepConfig, StepSolver};
///
/// let grid = Grid::new(10, 1.0).unwrap();
/// let a = OperatorBuilder::new(grid).build(&ConstantDiffusivity(0.1)).unwrap();
/// let solver = StepSolver::new(StepConfig::new(0.01, Scheme::CrankNicolson)).unwrap();
///
/// let q0 = grid.sample(|x| x);
/// let s = vec![0.0; 10];
/// let q1 = solver.advance(&a, &q0, &s, &s).unwrap();
/// let before: f64 = q0.iter().sum();
/// let after: f64 = q1.iter().sum();
/// assert!((after - before).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepSolver {
    config: StepConfig,
}

impl StepSolver {
    /// Create a solver, rejecting invalid `dt` or `theta` up front.
    pub fn new(config: StepConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The validated configuration.
    pub fn config(&self) -> &StepConfig {
        &self.config
    }

    /// Advance `q_old` by one step of `dt` under `operator`.
    ///
    /// `s_old` and `s_new` are the source sampled at the old and new time
    /// levels. All three must match the operator dimension; a mismatch is
    /// reported as `DimensionMismatch` and nothing is truncated or padded.
    /// A NaN or infinite entry in any of them is reported as
    /// `NonFiniteValue` before the system is formed.
    pub fn advance(
        &self,
        operator: &OperatorMatrix,
        q_old: &[f64],
        s_old: &[f64],
        s_new: &[f64],
    ) -> Result<Vec<f64>> {
        let n = operator.dim();
        check_len("q_old", n, q_old)?;
        check_len("s_old", n, s_old)?;
        check_len("s_new", n, s_new)?;
        check_finite("q_old", q_old)?;
        check_finite("s_old", s_old)?;
        check_finite("s_new", s_new)?;

        let dt = self.config.dt;
        let theta = self.config.scheme.theta();
        tracing::trace!(cells = n, dt, theta, strategy = ?self.config.strategy, "theta step");

        let aq = operator.apply(q_old)?;
        let explicit = (1.0 - theta) * dt;
        let rhs: Vec<f64> = (0..n)
            .map(|i| {
                q_old[i] + explicit * aq[i] + dt * (theta * s_new[i] + (1.0 - theta) * s_old[i])
            })
            .collect();

        let implicit = theta * dt;
        match self.config.strategy {
            SolveStrategy::Tridiagonal => {
                let diagonal: Vec<f64> = operator
                    .diagonal()
                    .iter()
                    .map(|&d| 1.0 - implicit * d)
                    .collect();
                let off: Vec<f64> = operator.coupling().iter().map(|&c| -implicit * c).collect();
                tridiag::solve_symmetric(&diagonal, &off, &rhs)
            }
            SolveStrategy::Dense => {
                let lhs = DMatrix::identity(n, n) - operator.to_dense() * implicit;
                dense::solve(lhs, &rhs)
            }
        }
    }
}

fn check_len(what: &'static str, expected: usize, values: &[f64]) -> Result<()> {
    if values.len() != expected {
        return Err(SeepError::DimensionMismatch {
            what,
            expected,
            actual: values.len(),
        });
    }
    Ok(())
}

fn check_finite(what: &'static str, values: &[f64]) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(SeepError::NonFiniteValue {
            what,
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}

/// Advance `q_old` by one theta-method step of `dt`.
///
/// Validates `dt` and `theta` before touching the data, then solves the
/// banded system. Equivalent to
/// `StepSolver::new(StepConfig::new(dt, theta))?.advance(operator, q_old, s_old, s_new)`.
pub fn advance(
    q_old: &[f64],
    s_old: &[f64],
    s_new: &[f64],
    operator: &OperatorMatrix,
    dt: f64,
    theta: f64,
) -> Result<Vec<f64>> {
    StepSolver::new(StepConfig::new(dt, Scheme::Theta(theta)))?.advance(operator, q_old, s_old, s_new)
}

/// Assemble the operator for `k` on `grid` and advance one step.
///
/// Convenient when the diffusivity changes every step; when it does not,
/// build the operator once and call [`advance`] instead.
pub fn step_with_diffusivity<K: Diffusivity + ?Sized>(
    grid: &Grid,
    k: &K,
    q_old: &[f64],
    s_old: &[f64],
    s_new: &[f64],
    dt: f64,
    theta: f64,
) -> Result<Vec<f64>> {
    let solver = StepSolver::new(StepConfig::new(dt, Scheme::Theta(theta)))?;
    let operator = OperatorBuilder::new(*grid).build(k)?;
    solver.advance(&operator, q_old, s_old, s_new)
}
