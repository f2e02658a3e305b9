//! Evaluable capabilities for diffusivity and source terms.
//!
//! Both are plain traits with blanket impls for closures, so a caller can
//! pass `|x| 0.1 * (1.0 - x * x)` directly. The kernel only ever evaluates
//! them at fixed coordinates; they are never stored past a single call.

/// Diffusivity `k(x)` as a function of position.
///
/// Implementations must return a finite, non-negative value at every face
/// coordinate the operator samples. Assembly rejects anything else.
///
/// # Examples
///
/// ```
/// use seep_core::{ConstantDiffusivity, Diffusivity};
///
/// let k = |x: f64| 0.0684 * (1.0 - x * x);
/// assert!((k.at(0.5) - 0.0513).abs() < 1e-12);
/// assert_eq!(ConstantDiffusivity(0.25).at(1.7), 0.25);
/// ```
pub trait Diffusivity {
    /// Diffusivity at coordinate `x`.
    fn at(&self, x: f64) -> f64;
}

impl<F> Diffusivity for F
where
    F: Fn(f64) -> f64,
{
    fn at(&self, x: f64) -> f64 {
        self(x)
    }
}

/// Spatially uniform diffusivity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantDiffusivity(pub f64);

impl Diffusivity for ConstantDiffusivity {
    fn at(&self, _x: f64) -> f64 {
        self.0
    }
}

/// Source term `S(x, t)`.
pub trait SourceField {
    /// Source value at coordinate `x` and time `t`.
    fn at(&self, x: f64, t: f64) -> f64;
}

impl<F> SourceField for F
where
    F: Fn(f64, f64) -> f64,
{
    fn at(&self, x: f64, t: f64) -> f64 {
        self(x, t)
    }
}

/// A source that is zero everywhere and always.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ZeroSource;

impl SourceField for ZeroSource {
    fn at(&self, _x: f64, _t: f64) -> f64 {
        0.0
    }
}
