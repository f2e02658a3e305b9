//! Step configuration: time step, theta scheme, and linear-solve strategy.

use seep_core::{Result, SeepError};

// ── Scheme ─────────────────────────────────────────────────────────

/// Member of the theta-method family.
///
/// `theta` weights the new time level: 0 is fully explicit, 1 fully
/// implicit, and 0.5 the centred second-order scheme. Any value in
/// `[0, 1]` is a valid blend.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Scheme {
    /// Forward Euler, `theta = 0`.
    ForwardEuler,
    /// Crank–Nicolson, `theta = 0.5`.
    CrankNicolson,
    /// Backward Euler, `theta = 1`.
    #[default]
    BackwardEuler,
    /// Arbitrary blend.
    Theta(f64),
}

impl Scheme {
    /// The blending weight for this scheme.
    pub fn theta(&self) -> f64 {
        match self {
            Self::ForwardEuler => 0.0,
            Self::CrankNicolson => 0.5,
            Self::BackwardEuler => 1.0,
            Self::Theta(theta) => *theta,
        }
    }

    /// Reject a theta that is not finite or lies outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        let theta = self.theta();
        if !theta.is_finite() || !(0.0..=1.0).contains(&theta) {
            return Err(SeepError::config(format!(
                "theta must lie in [0, 1], got {theta}"
            )));
        }
        Ok(())
    }
}

impl From<f64> for Scheme {
    fn from(theta: f64) -> Self {
        Self::Theta(theta)
    }
}

// ── SolveStrategy ──────────────────────────────────────────────────

/// How the implicit system is solved. Both give the same answer to
/// round-off; only cost differs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SolveStrategy {
    /// O(N) Thomas sweep on the banded system.
    #[default]
    Tridiagonal,
    /// O(N³) dense LU factorization.
    Dense,
}

// ── StepConfig ─────────────────────────────────────────────────────

/// Parameters of a single theta-method step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepConfig {
    /// Time step. Must be finite and positive. Default: 1.0.
    pub dt: f64,
    /// Theta scheme. Default: backward Euler.
    pub scheme: Scheme,
    /// Linear solve. Default: tridiagonal.
    pub strategy: SolveStrategy,
}

impl Default for StepConfig {
    fn default() -> Self {
        Self {
            dt: 1.0,
            scheme: Scheme::default(),
            strategy: SolveStrategy::default(),
        }
    }
}

impl StepConfig {
    /// Config with the given time step and scheme, default strategy.
    pub fn new(dt: f64, scheme: impl Into<Scheme>) -> Self {
        Self {
            dt,
            scheme: scheme.into(),
            strategy: SolveStrategy::default(),
        }
    }

    /// Replace the solve strategy.
    pub fn with_strategy(mut self, strategy: SolveStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Check all parameters before any computation.
    pub fn validate(&self) -> Result<()> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(SeepError::config(format!(
                "dt must be finite and positive, got {}",
                self.dt
            )));
        }
        self.scheme.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_schemes_map_to_theta() {
        assert_eq!(Scheme::ForwardEuler.theta(), 0.0);
        assert_eq!(Scheme::CrankNicolson.theta(), 0.5);
        assert_eq!(Scheme::BackwardEuler.theta(), 1.0);
        assert_eq!(Scheme::from(0.3).theta(), 0.3);
    }

    #[test]
    fn default_is_backward_euler_tridiagonal() {
        let c = StepConfig::default();
        assert_eq!(c.scheme, Scheme::BackwardEuler);
        assert_eq!(c.strategy, SolveStrategy::Tridiagonal);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn theta_out_of_range_rejected() {
        for theta in [-0.1, 1.0001, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(
                    StepConfig::new(0.1, theta).validate(),
                    Err(SeepError::InvalidConfiguration { .. })
                ),
                "theta {theta} accepted"
            );
        }
    }

    #[test]
    fn theta_endpoints_accepted() {
        assert!(StepConfig::new(0.1, 0.0).validate().is_ok());
        assert!(StepConfig::new(0.1, 1.0).validate().is_ok());
        assert!(StepConfig::new(0.1, 0.73).validate().is_ok());
    }

    #[test]
    fn dt_must_be_positive() {
        for dt in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(
                    StepConfig::new(dt, Scheme::CrankNicolson).validate(),
                    Err(SeepError::InvalidConfiguration { .. })
                ),
                "dt {dt} accepted"
            );
        }
    }
}
