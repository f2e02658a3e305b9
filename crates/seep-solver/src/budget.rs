//! Column-integral budget of a completed step.

use seep_core::{Grid, Result, SeepError};

/// Residual of the integral budget `d/dt ∫q dx = ∫S dx` over one step:
///
/// ```text
/// (∫q_new − ∫q_old) / dt − ∫source
/// ```
///
/// With zero-flux boundaries nothing leaves the domain, so the residual is
/// zero up to round-off when `source` is the theta-weighted sample the step
/// used. Passing the old-time sample instead measures the time-lag error of
/// the source treatment.
pub fn budget_residual(
    grid: &Grid,
    q_old: &[f64],
    q_new: &[f64],
    source: &[f64],
    dt: f64,
) -> Result<f64> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(SeepError::config(format!(
            "dt must be finite and positive, got {dt}"
        )));
    }
    let before = grid.integrate(q_old)?;
    let after = grid.integrate(q_new)?;
    let forcing = grid.integrate(source)?;
    Ok((after - before) / dt - forcing)
}
