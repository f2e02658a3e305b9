//! Theta-method time stepping for the Seep diffusion kernel.
//!
//! [`StepSolver`] combines an [`OperatorMatrix`](seep_operator::OperatorMatrix)
//! with the theta-method to advance a cell-centred state by one step. The
//! implicit system is solved with an O(N) tridiagonal sweep by default;
//! a dense LU path is available through [`SolveStrategy::Dense`].
//!
//! The solver is stateless: time, looping, and diagnostics belong to the
//! caller.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod budget;
pub mod config;
pub mod dense;
pub mod step;
pub mod tridiag;

pub use budget::budget_residual;
pub use config::{Scheme, SolveStrategy, StepConfig};
pub use step::{advance, step_with_diffusivity, StepSolver};
