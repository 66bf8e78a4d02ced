//! Hull-White short-rate process with time-dependent coefficients, stepped
//! through its explicit solution.
//!
//! ```text
//! dr = (θ(t) − α(t)·r) dt + σ(t) dW
//! ```
//!
//! At step `i` the rate is built from running sums over the intervals
//! `j = 0..i-1`:
//!
//! ```text
//! I1 = Σ α_j·Δt
//! I2 = Σ θ_j·exp(−I1_j)
//! I3 = Σ σ_j·exp(−I1_j)·dw_i
//! r_i = r_0·exp(−I1) + I2 + I3
//! ```
//!
//! where `I1_j` is the partial sum up to and including interval `j`.  The
//! single draw of step `i` multiplies the whole stochastic sum.  Because
//! `dw_i` factors out of `I3`, the sums are carried from one step to the
//! next as `(I1, I2, S = Σ σ_j·exp(−I1_j))` and each step costs O(1)
//! instead of re-summing the O(i) terms.

use crate::rate_model::{PathState, RateModel};
use crate::term_schedule::TermSchedule;
use irm_core::errors::check_finite;
use irm_core::{ensure, fail, Error, Rate, Real, Result, Size, Time, TimeGrid};

/// Hull-White process driven by per-interval `θ`, `α` and `σ` schedules.
#[derive(Debug, Clone)]
pub struct HullWhiteProcess {
    r0: Rate,
    theta: TermSchedule,
    alpha: TermSchedule,
    sigma: TermSchedule,
}

impl HullWhiteProcess {
    /// Create a new Hull-White process.
    ///
    /// # Arguments
    /// * `r0` — initial short rate
    /// * `theta` — drift level per interval
    /// * `alpha` — mean-reversion speed per interval
    /// * `sigma` — volatility per interval (every value must be ≥ 0)
    pub fn new(
        r0: Rate,
        theta: TermSchedule,
        alpha: TermSchedule,
        sigma: TermSchedule,
    ) -> Result<Self> {
        check_finite("r0", r0)?;
        let lowest = sigma.values().iter().copied().fold(Real::INFINITY, Real::min);
        ensure!(
            lowest >= 0.0,
            "volatility schedule must be non-negative, got {lowest}"
        );
        Ok(Self {
            r0,
            theta,
            alpha,
            sigma,
        })
    }

    /// Drift schedule `θ`.
    pub fn theta(&self) -> &TermSchedule {
        &self.theta
    }

    /// Mean-reversion schedule `α`.
    pub fn alpha(&self) -> &TermSchedule {
        &self.alpha
    }

    /// Volatility schedule `σ`.
    pub fn sigma(&self) -> &TermSchedule {
        &self.sigma
    }

    fn coefficient(schedule: &TermSchedule, parameter: &str, j: Size) -> Result<Real> {
        schedule
            .value(j)
            .ok_or_else(|| Error::InsufficientParameterLength {
                parameter: parameter.to_string(),
                required: j + 1,
                actual: schedule.len(),
            })
    }
}

impl RateModel for HullWhiteProcess {
    fn name(&self) -> &'static str {
        "hull-white"
    }

    fn initial_state(&self) -> PathState {
        PathState::with_carry(vec![self.r0], vec![0.0; 3])
    }

    fn validate(&self, grid: &TimeGrid) -> Result<()> {
        let steps = grid.steps();
        self.theta.check_covers("theta", steps)?;
        self.alpha.check_covers("alpha", steps)?;
        self.sigma.check_covers("sigma", steps)
    }

    fn evolve(
        &self,
        step: Size,
        _t: Time,
        dt: Time,
        state: &mut PathState,
        dw: &[Real],
    ) -> Result<()> {
        let j = step - 1;
        let alpha = Self::coefficient(&self.alpha, "alpha", j)?;
        let theta = Self::coefficient(&self.theta, "theta", j)?;
        let sigma = Self::coefficient(&self.sigma, "sigma", j)?;

        let [i1, i2, s] = state.carry_mut() else {
            fail!("hull-white state must carry three accumulators");
        };
        *i1 += alpha * dt;
        let decay = (-*i1).exp();
        *i2 += theta * decay;
        *s += sigma * decay;
        let r = self.r0 * decay + *i2 + *s * dw[0];

        if !r.is_finite() {
            return Err(Error::Domain(format!(
                "hull-white rate at step {step} is not finite ({r})"
            )));
        }
        state.values_mut()[0] = r;
        Ok(())
    }
}
