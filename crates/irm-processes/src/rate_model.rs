//! The stepping interface between a process and the path integrator.
//!
//! A model owns its coefficients and knows how to advance a [`PathState`]
//! across one grid interval given that interval's normal draws.  It never
//! draws randomness itself; the integrator hands the draws in.

use irm_core::{Real, Result, Size, Time, TimeGrid};

/// The simulated quantity at a single time point.
///
/// `values` holds one entry per path (a single entry for short-rate
/// models).  `carry` holds scheme accumulators that are not part of the
/// observed path, such as the running integrals of the Hull-White explicit
/// solution.
#[derive(Debug, Clone, PartialEq)]
pub struct PathState {
    values: Vec<Real>,
    carry: Vec<Real>,
}

impl PathState {
    /// A single-path state.
    pub fn scalar(value: Real) -> Self {
        Self::new(vec![value])
    }

    /// A state with one value per path and no carried accumulators.
    pub fn new(values: Vec<Real>) -> Self {
        Self {
            values,
            carry: Vec::new(),
        }
    }

    /// A state with carried accumulators.
    pub fn with_carry(values: Vec<Real>, carry: Vec<Real>) -> Self {
        Self { values, carry }
    }

    /// Observed values, in path-index order.
    pub fn values(&self) -> &[Real] {
        &self.values
    }

    /// Mutable access to the observed values.
    pub fn values_mut(&mut self) -> &mut [Real] {
        &mut self.values
    }

    /// The first observed value (the rate, for single-path models).
    ///
    /// # Panics
    /// Panics if the state holds no values.
    pub fn value(&self) -> Real {
        self.values[0]
    }

    /// Carried scheme accumulators.
    pub fn carry(&self) -> &[Real] {
        &self.carry
    }

    /// Mutable access to the carried accumulators.
    pub fn carry_mut(&mut self) -> &mut [Real] {
        &mut self.carry
    }
}

/// An interest-rate model that can be advanced along a time grid.
///
/// The integrator calls [`validate`](RateModel::validate) once before any
/// state is allocated, then [`evolve`](RateModel::evolve) for
/// `step = 1..=N`, each time with `factors()` fresh standard-normal draws.
pub trait RateModel: std::fmt::Debug + Send + Sync {
    /// Short model name used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Number of paths advanced together (one column each in the output).
    fn paths(&self) -> Size {
        1
    }

    /// Number of normal draws consumed per step.
    fn factors(&self) -> Size {
        1
    }

    /// Column label for the output table.
    fn column_label(&self) -> &'static str {
        "InterestRate"
    }

    /// State at `t_0 = 0`.
    fn initial_state(&self) -> PathState;

    /// Check the model can cover `grid`; called before simulation starts.
    fn validate(&self, grid: &TimeGrid) -> Result<()> {
        let _ = grid;
        Ok(())
    }

    /// Advance `state` from `t` to `t + dt`.
    ///
    /// `step` is the 1-based index of the interval (`t = t_{step-1}`) and
    /// `dw` holds `factors()` standard-normal draws.
    fn evolve(
        &self,
        step: Size,
        t: Time,
        dt: Time,
        state: &mut PathState,
        dw: &[Real],
    ) -> Result<()>;
}
