//! Error types for the Seep diffusion kernel.
//!
//! Every failure is detected synchronously at the call boundary and handed
//! back to the immediate caller. Nothing is retried internally: a singular
//! system solved again with identical inputs cannot succeed.

use std::error::Error;
use std::fmt;

/// Errors from grid construction, operator assembly, and step solving.
#[derive(Clone, Debug, PartialEq)]
pub enum SeepError {
    /// Grid resolution below the minimum usable size, non-positive domain
    /// length, non-positive time step, or theta outside `[0, 1]`.
    InvalidConfiguration {
        /// Human-readable description of the rejected parameter.
        reason: String,
    },
    /// Diffusivity evaluated to a negative or non-finite value at a face, or
    /// to one whose scaled coupling `k/h²` overflows.
    InvalidDiffusivity {
        /// Index of the offending face (`0..=N`).
        face: usize,
        /// Coordinate of the face.
        x: f64,
        /// The value the diffusivity returned.
        value: f64,
    },
    /// A state or source sequence does not match the operator dimension.
    DimensionMismatch {
        /// Which input was rejected (`"q_old"`, `"s_old"`, `"s_new"`, ...).
        what: &'static str,
        /// The operator dimension.
        expected: usize,
        /// The length actually supplied.
        actual: usize,
    },
    /// A state or source entry is NaN or infinite.
    NonFiniteValue {
        /// Which input was rejected (`"q_old"`, `"s_old"`, `"s_new"`).
        what: &'static str,
        /// Index of the first offending entry.
        index: usize,
        /// The entry itself.
        value: f64,
    },
    /// The implicit system could not be solved to a finite result.
    SingularSystem {
        /// Row at which elimination broke down.
        row: usize,
        /// The pivot value found there.
        pivot: f64,
    },
}

impl SeepError {
    /// Shorthand for [`SeepError::InvalidConfiguration`].
    pub fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SeepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration { reason } => {
                write!(f, "invalid configuration: {reason}")
            }
            Self::InvalidDiffusivity { face, x, value } => {
                write!(
                    f,
                    "diffusivity must be finite, non-negative and representable after 1/h² scaling, got {value} at face {face} (x = {x})"
                )
            }
            Self::DimensionMismatch {
                what,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{what} has length {actual}, operator dimension is {expected}"
                )
            }
            Self::NonFiniteValue { what, index, value } => {
                write!(f, "{what}[{index}] is not finite: {value}")
            }
            Self::SingularSystem { row, pivot } => {
                write!(f, "implicit system is singular: pivot {pivot} at row {row}")
            }
        }
    }
}

impl Error for SeepError {}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, SeepError>;
