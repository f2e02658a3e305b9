//! Seep: a finite-volume theta-method kernel for 1D diffusion.
//!
//! Advances `dq/dt − d/dx[k(x) dq/dx] = S(x, t)` on `0 < x < L` with
//! zero-flux boundaries, one step at a time. This is the top-level facade
//! crate that re-exports the public API of the Seep sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use seep::prelude::*;
//!
//! // 25 cells on [0, 2], constant diffusivity, no source.
//! let grid = Grid::new(25, 2.0).unwrap();
//! let operator = OperatorBuilder::new(grid)
//!     .build(&ConstantDiffusivity(0.25))
//!     .unwrap();
//! let solver = StepSolver::new(StepConfig::new(1.0, Scheme::BackwardEuler)).unwrap();
//!
//! let source = grid.sample_source(&ZeroSource, 0.0);
//! let mut q = grid.sample(|x| 4.0 * x * (2.0 - x));
//! let total = grid.integrate(&q).unwrap();
//! for _ in 0..10 {
//!     q = solver.advance(&operator, &q, &source, &source).unwrap();
//! }
//! // Zero-flux boundaries: the integral is unchanged.
//! assert!((grid.integrate(&q).unwrap() - total).abs() < 1e-10);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `seep-core` | Grid, diffusivity and source capabilities, errors |
//! | [`operator`] | `seep-operator` | Operator assembly and banded storage |
//! | [`solver`] | `seep-solver` | Theta schemes, step solver, linear solves |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid, field capabilities, and error types (`seep-core`).
pub use seep_core as types;

/// Operator assembly (`seep-operator`).
///
/// [`operator::OperatorBuilder`] produces an [`operator::OperatorMatrix`]
/// from a grid and a diffusivity.
pub use seep_operator as operator;

/// Time stepping (`seep-solver`).
///
/// [`solver::StepSolver`] for configured stepping, [`solver::advance`] for
/// one-off calls, and the [`solver::tridiag`] and [`solver::dense`] solves.
pub use seep_solver as solver;

/// Common imports for typical Seep usage.
///
/// ```rust
/// use seep::prelude::*;
/// ```
pub mod prelude {
    pub use seep_core::{
        ConstantDiffusivity, Diffusivity, Grid, Result, SeepError, SourceField, ZeroSource,
    };
    pub use seep_operator::{OperatorBuilder, OperatorMatrix};
    pub use seep_solver::{
        advance, budget_residual, step_with_diffusivity, Scheme, SolveStrategy, StepConfig,
        StepSolver,
    };
}
