//! End-to-end simulation scenarios.
//!
//! These integration tests drive every model through `PathIntegrator` with
//! deterministic drivers and check the documented path properties.

use approx::assert_abs_diff_eq;
use irm_core::{Error, Real, TimeGrid};
use irm_math::random_numbers::{InverseCumulativeNormalRng, PseudoRandomNormal, ReplayDriver};
use irm_methods::{PathCollector, PathIntegrator};
use irm_processes::{
    CevProcess, CklsProcess, CoxIngersollRossProcess, Extension, HjmProcess, HoLeeProcess,
    HullWhiteProcess, RateModel, TermSchedule, VasicekProcess,
};
use proptest::prelude::*;

fn one_year() -> TimeGrid {
    TimeGrid::new(1.0, 0.01).unwrap()
}

fn run_with<M: RateModel + ?Sized>(model: &M, grid: &TimeGrid, draws: Vec<Real>) -> PathCollector {
    let driver = ReplayDriver::new(draws).unwrap();
    PathIntegrator::new(grid, driver).run(model).unwrap()
}

fn every_model() -> Vec<Box<dyn RateModel>> {
    let clamp = |v: Vec<Real>| {
        TermSchedule::new(v)
            .unwrap()
            .with_extension(Extension::Clamp)
    };
    vec![
        Box::new(VasicekProcess::new(0.1, 0.2, 0.02, 0.05).unwrap()),
        Box::new(CoxIngersollRossProcess::new(0.1, 0.2, 0.02, 0.05).unwrap()),
        Box::new(CevProcess::new(0.1, 0.2, 0.5, 0.02, 0.05).unwrap()),
        Box::new(CklsProcess::new(0.1, 0.2, 0.5, 0.02, 0.05).unwrap()),
        Box::new(HoLeeProcess::new(0.02, 0.01).unwrap()),
        Box::new(
            HullWhiteProcess::new(
                0.02,
                clamp(vec![0.03, 0.02, 0.025]),
                clamp(vec![0.01, 0.015, 0.012]),
                clamp(vec![0.01, 0.015, 0.02]),
            )
            .unwrap(),
        ),
        Box::new(HjmProcess::new(0.1, 0.02, 5).unwrap()),
    ]
}

// ─── Reproducibility ──────────────────────────────────────────────────────────

#[test]
fn every_model_is_bit_reproducible() {
    let grid = one_year();
    for model in every_model() {
        let first = PathIntegrator::new(&grid, InverseCumulativeNormalRng::new(99))
            .run(model.as_ref())
            .unwrap();
        let second = PathIntegrator::new(&grid, InverseCumulativeNormalRng::new(99))
            .run(model.as_ref())
            .unwrap();
        assert_eq!(first.size(), grid.size(), "{}", model.name());
        let bits = |c: &PathCollector| -> Vec<u64> {
            c.rows().flat_map(|(_, v)| v.iter().map(|x| x.to_bits())).collect()
        };
        assert_eq!(bits(&first), bits(&second), "{} not reproducible", model.name());
    }
}

#[test]
fn replayed_draws_reproduce_exactly() {
    let grid = one_year();
    let draws: Vec<Real> = (0..37).map(|k| (k as Real * 0.7).sin() * 2.0).collect();
    for model in every_model() {
        let a = run_with(model.as_ref(), &grid, draws.clone());
        let b = run_with(model.as_ref(), &grid, draws.clone());
        assert_eq!(a, b, "{}", model.name());
    }
}

// ─── Vasicek ──────────────────────────────────────────────────────────────────

#[test]
fn vasicek_without_noise_converges_to_long_run_level() {
    let grid = one_year();
    assert_eq!(grid.steps(), 100);
    let model = VasicekProcess::new(0.1, 0.2, 0.02, 0.05).unwrap();
    let path = run_with(&model, &grid, vec![0.0]).path(0).unwrap();

    assert_eq!(path.len(), 101);
    assert_eq!(path.front(), Some(0.05));
    for w in path.values.windows(2) {
        assert!(w[1] > w[0] && w[1] < 0.2);
    }
    // r_k = b + (r_0 − b)(1 − aΔt)^k
    for (k, r) in path.values.iter().enumerate() {
        let expected = 0.2 + (0.05 - 0.2) * (1.0 - 0.1 * 0.01_f64).powi(k as i32);
        assert_abs_diff_eq!(*r, expected, epsilon = 1e-12);
    }
}

#[test]
fn vasicek_without_reversion_is_brownian_motion() {
    let grid = one_year();
    let draws: Vec<Real> = (0..100).map(|k| ((k * 13 % 17) as Real - 8.0) / 4.0).collect();
    let model = VasicekProcess::new(0.0, 0.2, 0.02, 0.05).unwrap();
    let path = run_with(&model, &grid, draws.clone()).path(0).unwrap();

    let sqrt_dt = grid.dt().sqrt();
    let mut expected = 0.05;
    for (k, d) in draws.iter().enumerate() {
        expected += 0.02 * sqrt_dt * d;
        assert_abs_diff_eq!(path.values[k + 1], expected, epsilon = 1e-12);
    }
}

// ─── CIR ──────────────────────────────────────────────────────────────────────

#[test]
fn cir_large_negative_shock_clamps_to_zero() {
    let grid = one_year();
    let model = CoxIngersollRossProcess::new(0.1, 0.2, 0.02, 0.05).unwrap();
    let mut draws = vec![0.0; 100];
    draws[0] = -1_000.0;
    let path = run_with(&model, &grid, draws).path(0).unwrap();
    assert_eq!(path.values[1], 0.0);
    // From zero the drift pulls the rate back up.
    assert!(path.values[2] > 0.0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn cir_path_is_never_negative(draws in prop::collection::vec(-50.0f64..50.0, 1..64)) {
        let grid = TimeGrid::new(1.0, 0.05).unwrap();
        let model = CoxIngersollRossProcess::new(0.1, 0.2, 0.5, 0.05).unwrap();
        let c = run_with(&model, &grid, draws);
        for (_, v) in c.rows() {
            prop_assert!(v[0] >= 0.0);
        }
    }
}

// ─── Ho-Lee ───────────────────────────────────────────────────────────────────

#[test]
fn ho_lee_without_forcing_stays_at_zero() {
    let grid = one_year();
    let model = HoLeeProcess::new(0.0, 0.0).unwrap();
    let mut driver = PseudoRandomNormal::new(5);
    let c = PathIntegrator::new(&grid, &mut driver).run(&model).unwrap();
    assert!(c.rows().all(|(_, v)| v[0] == 0.0));
}

#[test]
fn ho_lee_trend_accumulates_end_of_step_times() {
    let grid = TimeGrid::new(1.0, 0.25).unwrap();
    let model = HoLeeProcess::new(1.0, 0.0).unwrap();
    let path = run_with(&model, &grid, vec![0.0]).path(0).unwrap();
    // Σ θ·t_k·Δt for t_k = 0.25, 0.5, 0.75, 1.0
    assert_abs_diff_eq!(path.back().unwrap(), 0.625, epsilon = 1e-15);
}

// ─── Hull-White ───────────────────────────────────────────────────────────────

#[test]
fn hull_white_without_forcing_keeps_initial_rate() {
    let grid = one_year();
    let zeros = TermSchedule::new(vec![0.0; 100]).unwrap();
    let model = HullWhiteProcess::new(0.04, zeros.clone(), zeros.clone(), zeros).unwrap();
    let c = PathIntegrator::new(&grid, InverseCumulativeNormalRng::new(1))
        .run(&model)
        .unwrap();
    assert!(c.rows().all(|(_, v)| v[0] == 0.04));
}

#[test]
fn hull_white_needs_a_value_per_step() {
    let grid = one_year();
    let short = TermSchedule::new(vec![0.01; 99]).unwrap();
    let full = TermSchedule::new(vec![0.01; 100]).unwrap();
    let model = HullWhiteProcess::new(0.02, full.clone(), full, short).unwrap();
    let err = PathIntegrator::new(&grid, ReplayDriver::zeros())
        .run(&model)
        .unwrap_err();
    assert_eq!(
        err,
        Error::InsufficientParameterLength {
            parameter: "sigma".into(),
            required: 100,
            actual: 99,
        }
    );
}

// ─── HJM ──────────────────────────────────────────────────────────────────────

#[test]
fn hjm_shared_draw_gives_identical_columns() {
    let grid = one_year();
    let model = HjmProcess::new(0.1, 0.02, 5).unwrap();
    let mut driver = InverseCumulativeNormalRng::new(3);
    let c = PathIntegrator::new(&grid, &mut driver).run(&model).unwrap();
    assert_eq!(c.len(), 5);
    assert_eq!(
        c.headers(),
        vec!["Time", "ForwardRate1", "ForwardRate2", "ForwardRate3", "ForwardRate4", "ForwardRate5"]
    );
    for (_, row) in c.rows() {
        assert!(row.iter().all(|f| f.to_bits() == row[0].to_bits()));
    }
    assert_eq!(c.row(0), Some(&[0.0; 5][..]));
}

#[test]
fn hjm_independent_draws_give_distinct_columns() {
    let grid = one_year();
    let model = HjmProcess::new(0.1, 0.02, 3)
        .unwrap()
        .with_independent_draws();
    let mut driver = ReplayDriver::new(vec![1.0, 0.0, -1.0]).unwrap();
    let c = PathIntegrator::new(&grid, &mut driver).run(&model).unwrap();
    assert_eq!(driver.position(), 300);

    let last = c.terminal_values();
    assert!(last[0] > last[1] && last[1] > last[2]);
    assert_abs_diff_eq!(last[1], 0.1, epsilon = 1e-12);
}

// ─── CEV / CKLS ───────────────────────────────────────────────────────────────

#[test]
fn cev_pushed_negative_reports_domain_error() {
    let grid = one_year();
    let model = CevProcess::new(0.0, 0.0, 0.5, 1.0, 0.01).unwrap();
    // 0.01 + 1·0.01^0.25·0.1·(−10) < 0, then the next step is undefined.
    let result = PathIntegrator::new(&grid, ReplayDriver::new(vec![-10.0]).unwrap()).run(&model);
    assert!(matches!(result, Err(Error::Domain(_))));
}

#[test]
fn ckls_survives_negative_rates() {
    let grid = one_year();
    let model = CklsProcess::new(0.0, 0.2, 0.5, 1.0, 0.01).unwrap();
    let c = run_with(&model, &grid, vec![-10.0, 3.0, -5.0]);
    assert!(c.rows().all(|(_, v)| v[0].is_finite()));
    assert!(c.rows().any(|(_, v)| v[0] < 0.0));
}
