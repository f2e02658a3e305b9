//! Core types for the Seep finite-volume diffusion kernel.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! grid, the diffusivity and source capabilities, and the error taxonomy
//! shared by the operator and solver crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod grid;

pub use error::{Result, SeepError};
pub use field::{ConstantDiffusivity, Diffusivity, SourceField, ZeroSource};
pub use grid::Grid;
