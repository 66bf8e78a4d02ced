//! One-factor short-rate diffusions `dr = μ(t,r) dt + σ(t,r) dW`, advanced
//! by an explicit Euler-Maruyama step.

use crate::rate_model::{PathState, RateModel};
use irm_core::{Error, Rate, Real, Result, Size, Time};

/// A one-factor short-rate process.
///
/// Implementors provide the drift and diffusion coefficients; the default
/// step is
///
/// ```text
/// r(t+Δt) = r + μ(t,r)·Δt + σ(t,r)·√Δt·dw
/// ```
///
/// computed wholly from the previous state.  Processes with a state
/// constraint (e.g. CIR's floor at zero) override
/// [`evolve_1d`](ShortRateProcess::evolve_1d).
pub trait ShortRateProcess: std::fmt::Debug + Send + Sync {
    /// Short process name used in logs and error messages.
    fn label(&self) -> &'static str;

    /// Initial short rate.
    fn x0(&self) -> Rate;

    /// Drift `μ(t, r)`.
    fn drift(&self, t: Time, r: Rate) -> Real;

    /// Diffusion `σ(t, r)`.
    fn diffusion(&self, t: Time, r: Rate) -> Real;

    /// Deterministic part of the step: `r + μ(t,r)·Δt`.
    fn expectation(&self, t: Time, r: Rate, dt: Time) -> Real {
        r + self.drift(t, r) * dt
    }

    /// Stochastic scale of the step: `σ(t,r)·√Δt`.
    fn std_deviation(&self, t: Time, r: Rate, dt: Time) -> Real {
        self.diffusion(t, r) * dt.sqrt()
    }

    /// One Euler-Maruyama step.
    ///
    /// # Errors
    /// [`Error::Domain`] if the step does not produce a finite rate.
    fn evolve_1d(&self, t: Time, r: Rate, dt: Time, dw: Real) -> Result<Rate> {
        let next = self.expectation(t, r, dt) + self.std_deviation(t, r, dt) * dw;
        ensure_finite_rate(self.label(), t, r, next)
    }
}

/// Reject a non-finite step result with a [`Error::Domain`].
pub fn ensure_finite_rate(label: &str, t: Time, r: Rate, next: Real) -> Result<Rate> {
    if next.is_finite() {
        Ok(next)
    } else {
        Err(Error::Domain(format!(
            "{label} step from r = {r} at t = {t} is not finite ({next})"
        )))
    }
}

/// Every one-factor process is a single-path, single-draw rate model.
impl<P: ShortRateProcess> RateModel for P {
    fn name(&self) -> &'static str {
        self.label()
    }

    fn initial_state(&self) -> PathState {
        PathState::scalar(self.x0())
    }

    fn evolve(
        &self,
        _step: Size,
        t: Time,
        dt: Time,
        state: &mut PathState,
        dw: &[Real],
    ) -> Result<()> {
        let r = state.value();
        state.values_mut()[0] = self.evolve_1d(t, r, dt, dw[0])?;
        Ok(())
    }
}
