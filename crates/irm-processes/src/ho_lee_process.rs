//! Ho-Lee short-rate process.
//!
//! ```text
//! dr = θ·t dt + σ dW,   r(0) = 0
//! ```
//!
//! The drift is a deterministic linear trend in time.  Each step evaluates
//! it at the end of the interval, `t + Δt`.

use crate::short_rate_process::ShortRateProcess;
use irm_core::errors::check_finite;
use irm_core::{ensure, Rate, Real, Result, Time, Volatility};

/// The Ho-Lee process, started at zero.
#[derive(Debug, Clone)]
pub struct HoLeeProcess {
    drift: Real,
    volatility: Volatility,
}

impl HoLeeProcess {
    /// Create a new Ho-Lee process with trend coefficient `drift`.
    pub fn new(drift: Real, volatility: Volatility) -> Result<Self> {
        check_finite("drift", drift)?;
        check_finite("volatility", volatility)?;
        ensure!(
            volatility >= 0.0,
            "volatility must be non-negative, got {volatility}"
        );
        Ok(Self { drift, volatility })
    }
}

impl ShortRateProcess for HoLeeProcess {
    fn label(&self) -> &'static str {
        "ho-lee"
    }

    fn x0(&self) -> Rate {
        0.0
    }

    fn drift(&self, t: Time, _r: Rate) -> Real {
        self.drift * t
    }

    fn diffusion(&self, _t: Time, _r: Rate) -> Real {
        self.volatility
    }

    fn expectation(&self, t: Time, r: Rate, dt: Time) -> Real {
        r + self.drift(t + dt, r) * dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn ho_lee_starts_at_zero() {
        let p = HoLeeProcess::new(0.02, 0.01).unwrap();
        assert_eq!(p.x0(), 0.0);
    }

    #[test]
    fn ho_lee_drift_uses_end_of_step() {
        let p = HoLeeProcess::new(0.02, 0.0).unwrap();
        let next = p.evolve_1d(0.0, 0.0, 0.01, 0.0).unwrap();
        // θ·t_1·Δt = 0.02·0.01·0.01
        assert_abs_diff_eq!(next, 2.0e-6, epsilon = 1e-18);
    }

    #[test]
    fn ho_lee_without_forcing_stays_put() {
        let p = HoLeeProcess::new(0.0, 0.0).unwrap();
        let mut r = p.x0();
        for k in 0..10 {
            r = p.evolve_1d(k as Real * 0.1, r, 0.1, 1.7).unwrap();
        }
        assert_eq!(r, 0.0);
    }
}
