//! Reference profiles and closed-form solutions.
//!
//! - [`parabola_profile`] — the `q_max·x·(L−x)` initial condition.
//! - [`analytic_parabola_solution`] — its exact evolution under constant
//!   diffusivity, zero source and zero-flux boundaries.

use seep_core::Grid;
use std::f64::consts::PI;

/// `q_max·x·(L−x)` sampled at the cell centres of `grid`.
pub fn parabola_profile(grid: &Grid, q_max: f64) -> Vec<f64> {
    let l = grid.length();
    grid.sample(|x| q_max * x * (l - x))
}

/// Truncated cosine-series solution of `q_t = k0·q_xx` on `[0, L]` with
/// `q_x = 0` at both ends and `q(x, 0) = q_max·x·(L−x)`:
///
/// ```text
/// q(x, t) = q_max·L²/6 − Σ_{n even, 2..=truncate} 4·q_max·L²/(nπ)² · exp(−k0·(nπ/L)²·t) · cos(nπx/L)
/// ```
///
/// Odd modes vanish by symmetry of the initial profile about `L/2`.
pub fn analytic_parabola_solution(
    x: &[f64],
    t: f64,
    k0: f64,
    length: f64,
    q_max: f64,
    truncate: usize,
) -> Vec<f64> {
    let mean = length * length * q_max / 6.0;
    x.iter()
        .map(|&xi| {
            (2..=truncate)
                .step_by(2)
                .map(|n| {
                    let wave = n as f64 * PI;
                    let coeff = -4.0 * q_max * length * length / (wave * wave);
                    let decay = (-k0 * (wave / length).powi(2) * t).exp();
                    coeff * decay * (wave * xi / length).cos()
                })
                .fold(mean, |acc, term| acc + term)
        })
        .collect()
}
