//! The path integration loop.
//!
//! [`PathIntegrator`] binds a [`TimeGrid`] to a [`RandomDriver`] and runs
//! any [`RateModel`] over the grid: for each interval `k = 1..=N` it draws
//! `model.factors()` normals, lets the model advance its state, and records
//! the values at `t_k`.  A run either completes or fails as a whole; no
//! partial path is ever returned.

use crate::path::{Path, PathCollector};
use irm_core::{ensure, Real, Result, Size, Time, TimeGrid};
use irm_math::random_numbers::RandomDriver;
use irm_processes::{PathState, RateModel};
use tracing::{debug, debug_span};

// ─── PathWalker ───────────────────────────────────────────────────────────────

/// Step-by-step view of one integration run.
///
/// Created by [`PathIntegrator::walk`].  After [`advance`](Self::advance)
/// returns an error the walker must be discarded.
pub struct PathWalker<'a, M: RateModel + ?Sized, D: RandomDriver> {
    model: &'a M,
    grid: &'a TimeGrid,
    driver: &'a mut D,
    state: PathState,
    draws: Vec<Real>,
    step: Size,
}

impl<'a, M: RateModel + ?Sized, D: RandomDriver> PathWalker<'a, M, D> {
    /// Number of intervals already integrated.
    pub fn step(&self) -> Size {
        self.step
    }

    /// Time of the current state.
    pub fn time(&self) -> Time {
        self.grid.time(self.step)
    }

    /// The current state.
    pub fn state(&self) -> &PathState {
        &self.state
    }

    /// Whether the walker has reached the end of the grid.
    pub fn is_finished(&self) -> bool {
        self.step == self.grid.steps()
    }

    /// Integrate the next interval.
    ///
    /// Returns the new time, or `None` once the grid is exhausted.
    pub fn advance(&mut self) -> Result<Option<Time>> {
        if self.is_finished() {
            return Ok(None);
        }
        let k = self.step + 1;
        let t = self.grid.time(self.step);
        self.driver.fill(&mut self.draws);
        self.model
            .evolve(k, t, self.grid.dt(), &mut self.state, &self.draws)?;
        self.step = k;
        Ok(Some(self.grid.time(k)))
    }
}

// ─── PathIntegrator ───────────────────────────────────────────────────────────

/// Runs rate models over a time grid.
///
/// The driver is owned by the integrator and consumed sequentially, so
/// consecutive runs continue the same random stream.  Deterministic given
/// a deterministic driver.
pub struct PathIntegrator<'g, D: RandomDriver> {
    grid: &'g TimeGrid,
    driver: D,
}

impl<'g, D: RandomDriver> PathIntegrator<'g, D> {
    /// Create a new integrator.
    ///
    /// # Arguments
    /// * `grid` — the time grid every run is sampled on
    /// * `driver` — source of standard-normal draws
    pub fn new(grid: &'g TimeGrid, driver: D) -> Self {
        Self { grid, driver }
    }

    /// The grid runs are sampled on.
    pub fn grid(&self) -> &'g TimeGrid {
        self.grid
    }

    /// Give the driver back.
    pub fn into_driver(self) -> D {
        self.driver
    }

    /// Start a step-by-step run of `model`.
    ///
    /// # Errors
    /// Whatever [`RateModel::validate`] reports for this grid.
    pub fn walk<'a, M: RateModel + ?Sized>(
        &'a mut self,
        model: &'a M,
    ) -> Result<PathWalker<'a, M, D>> {
        model.validate(self.grid)?;
        Ok(PathWalker {
            model,
            grid: self.grid,
            driver: &mut self.driver,
            state: model.initial_state(),
            draws: vec![0.0; model.factors()],
            step: 0,
        })
    }

    /// Run `model` over the whole grid.
    ///
    /// The collector holds `model.paths()` columns and `N + 1` rows.
    pub fn run<M: RateModel + ?Sized>(&mut self, model: &M) -> Result<PathCollector> {
        let span = debug_span!("run", model = model.name(), steps = self.grid.steps());
        let _enter = span.enter();

        let grid = self.grid;
        let mut walker = self.walk(model)?;
        let mut collector = PathCollector::new(grid, model.paths(), model.column_label());
        collector.record(walker.time(), walker.state().values());
        while let Some(t) = walker.advance()? {
            collector.record(t, walker.state().values());
        }

        debug!(
            paths = collector.len(),
            points = collector.size(),
            "path integration complete"
        );
        Ok(collector)
    }

    /// Generate one sample path of a single-path model.
    pub fn next_path<M: RateModel + ?Sized>(&mut self, model: &M) -> Result<Path> {
        ensure!(
            model.paths() == 1,
            "{} simulates {} paths; use run() for ensembles",
            model.name(),
            model.paths()
        );
        let mut walker = self.walk(model)?;
        let mut times = Vec::with_capacity(walker.grid.size());
        let mut values = Vec::with_capacity(walker.grid.size());
        times.push(walker.time());
        values.push(walker.state().value());
        while let Some(t) = walker.advance()? {
            times.push(t);
            values.push(walker.state().value());
        }
        Ok(Path { times, values })
    }

    /// Generate `samples` independent paths of a single-path model.
    ///
    /// Each sample consumes fresh draws; column `i` is the `i`-th sample.
    pub fn run_samples<M: RateModel + ?Sized>(
        &mut self,
        model: &M,
        samples: Size,
    ) -> Result<PathCollector> {
        ensure!(samples > 0, "at least one sample is required");
        let span = debug_span!("run_samples", model = model.name(), samples);
        let _enter = span.enter();

        let mut columns = Vec::with_capacity(samples);
        for _ in 0..samples {
            columns.push(self.next_path(model)?.values);
        }
        debug!(points = self.grid.size(), "sample generation complete");
        Ok(PathCollector::from_columns(
            self.grid,
            &columns,
            model.column_label(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use irm_core::Error;
    use irm_math::random_numbers::{InverseCumulativeNormalRng, ReplayDriver};
    use irm_processes::{
        CoxIngersollRossProcess, HjmProcess, HoLeeProcess, HullWhiteProcess, TermSchedule,
        VasicekProcess,
    };

    fn grid() -> TimeGrid {
        TimeGrid::new(1.0, 0.1).unwrap()
    }

    #[test]
    fn run_records_every_grid_point() {
        let g = grid();
        let model = VasicekProcess::new(0.1, 0.2, 0.02, 0.05).unwrap();
        let mut integrator = PathIntegrator::new(&g, InverseCumulativeNormalRng::new(42));
        let c = integrator.run(&model).unwrap();
        assert_eq!(c.len(), 1);
        assert_eq!(c.size(), 11);
        assert_eq!(c.times(), g.times());
        assert_eq!(c.row(0), Some(&[0.05][..]));
    }

    #[test]
    fn walker_steps_one_interval_at_a_time() {
        let g = grid();
        let model = HoLeeProcess::new(0.0, 1.0).unwrap();
        let mut integrator = PathIntegrator::new(&g, ReplayDriver::new(vec![1.0]).unwrap());
        let mut walker = integrator.walk(&model).unwrap();
        assert_eq!(walker.step(), 0);
        assert_eq!(walker.time(), 0.0);

        let t1 = walker.advance().unwrap();
        assert_eq!(t1, Some(g.time(1)));
        assert_eq!(walker.step(), 1);
        assert!((walker.state().value() - 0.1_f64.sqrt()).abs() < 1e-15);

        while walker.advance().unwrap().is_some() {}
        assert!(walker.is_finished());
        assert_eq!(walker.step(), 10);
        assert_eq!(walker.advance().unwrap(), None);
    }

    #[test]
    fn next_path_rejects_ensembles() {
        let g = grid();
        let model = HjmProcess::new(0.1, 0.02, 3).unwrap();
        let mut integrator = PathIntegrator::new(&g, ReplayDriver::zeros());
        assert!(matches!(
            integrator.next_path(&model),
            Err(Error::Precondition(_))
        ));
    }

    #[test]
    fn validation_failure_aborts_before_drawing() {
        let g = grid();
        let short = TermSchedule::new(vec![0.01; 3]).unwrap();
        let model = HullWhiteProcess::new(0.02, short.clone(), short.clone(), short).unwrap();
        let mut integrator = PathIntegrator::new(&g, ReplayDriver::zeros());
        assert!(matches!(
            integrator.run(&model),
            Err(Error::InsufficientParameterLength { required: 10, actual: 3, .. })
        ));
        assert_eq!(integrator.into_driver().position(), 0);
    }

    /// Claims an impossible number of paths and never validates.
    #[derive(Debug)]
    struct UnbuildableEnsemble;

    impl RateModel for UnbuildableEnsemble {
        fn name(&self) -> &'static str {
            "unbuildable"
        }

        fn paths(&self) -> Size {
            Size::MAX / 2
        }

        fn initial_state(&self) -> PathState {
            PathState::new(Vec::new())
        }

        fn validate(&self, _grid: &TimeGrid) -> Result<()> {
            Err(Error::Precondition("grid not supported".into()))
        }

        fn evolve(
            &self,
            _step: Size,
            _t: Time,
            _dt: Time,
            _state: &mut PathState,
            _dw: &[Real],
        ) -> Result<()> {
            unreachable!("validation always fails")
        }
    }

    #[test]
    fn validation_runs_before_output_is_allocated() {
        let g = grid();
        let mut integrator = PathIntegrator::new(&g, ReplayDriver::zeros());
        assert_eq!(
            integrator.run(&UnbuildableEnsemble).unwrap_err(),
            Error::Precondition("grid not supported".into())
        );
    }

    #[test]
    fn model_error_aborts_the_run() {
        use irm_processes::CevProcess;
        let g = grid();
        // Starts at zero with a negative drift power: the first step is infinite.
        let model = CevProcess::new(0.1, 0.2, 0.5, 0.02, 0.0).unwrap();
        let mut integrator = PathIntegrator::new(&g, ReplayDriver::zeros());
        assert!(matches!(integrator.run(&model), Err(Error::Domain(_))));
    }

    #[test]
    fn run_samples_draws_fresh_randomness_per_sample() {
        let g = grid();
        let model = CoxIngersollRossProcess::new(0.1, 0.2, 0.02, 0.05).unwrap();
        let mut integrator = PathIntegrator::new(&g, InverseCumulativeNormalRng::new(7));
        let c = integrator.run_samples(&model, 4).unwrap();
        assert_eq!(c.len(), 4);
        assert_eq!(c.size(), 11);
        assert_eq!(c.headers()[1], "InterestRate1");
        let p0 = c.path(0).unwrap();
        let p1 = c.path(1).unwrap();
        assert_eq!(p0.front(), Some(0.05));
        assert_ne!(p0.values, p1.values);
        assert!(integrator.run_samples(&model, 0).is_err());
    }

    #[test]
    fn dyn_models_run_through_the_same_loop() {
        let g = grid();
        let models: Vec<Box<dyn RateModel>> = vec![
            Box::new(VasicekProcess::new(0.1, 0.2, 0.02, 0.05).unwrap()),
            Box::new(HjmProcess::new(0.1, 0.02, 2).unwrap()),
        ];
        let mut integrator = PathIntegrator::new(&g, ReplayDriver::zeros());
        for model in &models {
            let c = integrator.run(model.as_ref()).unwrap();
            assert_eq!(c.len(), model.paths());
        }
    }
}
