//! Long-run behaviour with constant diffusivity and zero source: agreement
//! with the cosine-series solution, relaxation to the mean, and exact
//! conservation of the integral.

use proptest::prelude::*;
use seep_core::{ConstantDiffusivity, Grid, ZeroSource};
use seep_operator::{build, OperatorBuilder};
use seep_solver::{advance, Scheme, StepConfig, StepSolver};
use seep_test_utils::{analytic_parabola_solution, max_abs_diff, mean, parabola_profile};

/// Backward-Euler run of the parabola test case; returns (numerical, analytic).
fn parabola_run(cells: usize, t_total: f64, steps: usize) -> (Vec<f64>, Vec<f64>) {
    let (length, k0, q_max) = (2.0, 0.25, 4.0);
    let grid = Grid::new(cells, length).unwrap();
    let op = OperatorBuilder::new(grid)
        .build(&ConstantDiffusivity(k0))
        .unwrap();
    let dt = t_total / steps as f64;
    let solver = StepSolver::new(StepConfig::new(dt, Scheme::BackwardEuler)).unwrap();

    let s = grid.sample_source(&ZeroSource, 0.0);
    let mut q = parabola_profile(&grid, q_max);
    for _ in 0..steps {
        q = solver.advance(&op, &q, &s, &s).unwrap();
    }
    let exact = analytic_parabola_solution(&grid.centers(), t_total, k0, length, q_max, 20);
    (q, exact)
}

#[test]
fn backward_euler_matches_series_solution() {
    // N = 25, L = 2, k0 = 0.25, dt = 1, 10 steps.
    let (q, exact) = parabola_run(25, 10.0, 10);
    let err = max_abs_diff(&q, &exact);
    assert!(err < 5e-3, "max error {err}");
}

#[test]
fn error_tightens_with_resolution() {
    let (coarse, exact_coarse) = parabola_run(25, 10.0, 10);
    let (fine, exact_fine) = parabola_run(100, 10.0, 10);
    let coarse_err = max_abs_diff(&coarse, &exact_coarse);
    let fine_err = max_abs_diff(&fine, &exact_fine);
    assert!(fine_err < 5e-4, "max error {fine_err}");
    assert!(fine_err < coarse_err);
}

#[test]
fn relaxes_to_initial_mean() {
    // Same total time, two step counts: both flatten every non-constant mode.
    let grid = Grid::new(20, 1.0).unwrap();
    let op = build(20, &ConstantDiffusivity(1.0), 1.0).unwrap();
    let q0 = grid.sample(|x| (3.0 * x).sin() + x);
    let target = mean(&q0);
    let s = vec![0.0; 20];

    for steps in [50, 500] {
        let dt = 5.0 / steps as f64;
        let mut q = q0.clone();
        for _ in 0..steps {
            q = advance(&q, &s, &s, &op, dt, 1.0).unwrap();
        }
        for v in &q {
            assert!((v - target).abs() < 1e-9, "{steps} steps: {v} vs {target}");
        }
    }
}

#[test]
fn source_shorter_than_grid_is_rejected() {
    let grid = Grid::new(25, 2.0).unwrap();
    let op = OperatorBuilder::new(grid)
        .build(&ConstantDiffusivity(0.25))
        .unwrap();
    let q = parabola_profile(&grid, 4.0);
    let short = vec![0.0; 24];
    let err = advance(&q, &short, &short, &op, 1.0, 1.0).unwrap_err();
    assert!(matches!(
        err,
        seep_core::SeepError::DimensionMismatch {
            expected: 25,
            actual: 24,
            ..
        }
    ));
}

fn arb_state(max_cells: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-100.0f64..100.0, 2..max_cells)
}

proptest! {
    #[test]
    fn zero_source_conserves_sum(
        q in arb_state(50),
        theta in 0.0f64..=1.0,
        dt in 1e-3f64..1.0,
        length in 0.5f64..5.0,
        a in 0.0f64..2.0,
        b in 0.0f64..2.0,
        c in 0.1f64..10.0,
    ) {
        let n = q.len();
        let k = move |x: f64| a + b * (c * x).cos().powi(2);
        let op = build(n, &k, length).unwrap();
        let s = vec![0.0; n];
        let q1 = advance(&q, &s, &s, &op, dt, theta).unwrap();

        let before: f64 = q.iter().sum();
        let after: f64 = q1.iter().sum();
        let stiffness = op.diagonal().iter().fold(0.0f64, |m, d| m.max(d.abs()));
        let magnitude = q.iter().fold(1.0f64, |m, v| m.max(v.abs()));
        let tol = 1e-12 * n as f64 * (1.0 + dt * stiffness) * magnitude;
        prop_assert!((after - before).abs() <= tol, "sum {} -> {} (tol {})", before, after, tol);
    }
}
