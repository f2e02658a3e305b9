//! Discrete diffusion operator for the Seep kernel.
//!
//! [`OperatorBuilder`] turns a [`Grid`](seep_core::Grid) and a
//! [`Diffusivity`](seep_core::Diffusivity) into an [`OperatorMatrix`]
//! representing `d/dx[k(x) dq/dx]` under zero-flux boundaries.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod builder;
pub mod matrix;

pub use builder::{build, OperatorBuilder};
pub use matrix::OperatorMatrix;
