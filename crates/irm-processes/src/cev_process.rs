//! Constant-elasticity-of-variance short-rate process.
//!
//! ```text
//! dr = (θ·r^(γ−1) + a·r) dt + σ·r^(γ/2) dW
//! ```
//!
//! Non-integer powers of a negative rate are undefined; such a step fails
//! with a domain error instead of producing `NaN`.

use crate::short_rate_process::{ensure_finite_rate, ShortRateProcess};
use irm_core::errors::check_finite;
use irm_core::{ensure, Error, Rate, Real, Result, Time, Volatility};

/// The CEV process.
///
/// `dr = (drift · r^(elasticity−1) + speed · r) dt + volatility · r^(elasticity/2) · dW`
#[derive(Debug, Clone)]
pub struct CevProcess {
    x0: Rate,
    speed: Real,
    drift: Real,
    elasticity: Real,
    volatility: Volatility,
}

impl CevProcess {
    /// Create a new CEV process.
    ///
    /// # Arguments
    /// * `speed` — linear drift coefficient `a`
    /// * `drift` — power drift coefficient `θ`
    /// * `elasticity` — elasticity exponent `γ`
    /// * `volatility` — volatility `σ` (must be ≥ 0)
    /// * `x0` — initial short rate
    pub fn new(
        speed: Real,
        drift: Real,
        elasticity: Real,
        volatility: Volatility,
        x0: Rate,
    ) -> Result<Self> {
        check_finite("speed", speed)?;
        check_finite("drift", drift)?;
        check_finite("elasticity", elasticity)?;
        check_finite("volatility", volatility)?;
        check_finite("x0", x0)?;
        ensure!(
            volatility >= 0.0,
            "volatility must be non-negative, got {volatility}"
        );
        Ok(Self {
            x0,
            speed,
            drift,
            elasticity,
            volatility,
        })
    }

    /// Elasticity exponent.
    pub fn elasticity(&self) -> Real {
        self.elasticity
    }

    /// Whether `r` is a legal base for both powers of the model.
    fn defined_at(&self, r: Rate) -> bool {
        r >= 0.0 || (self.elasticity / 2.0).fract() == 0.0
    }
}

impl ShortRateProcess for CevProcess {
    fn label(&self) -> &'static str {
        "cev"
    }

    fn x0(&self) -> Rate {
        self.x0
    }

    fn drift(&self, _t: Time, r: Rate) -> Real {
        self.drift * r.powf(self.elasticity - 1.0) + self.speed * r
    }

    fn diffusion(&self, _t: Time, r: Rate) -> Real {
        self.volatility * r.powf(self.elasticity / 2.0)
    }

    fn evolve_1d(&self, t: Time, r: Rate, dt: Time, dw: Real) -> Result<Rate> {
        if !self.defined_at(r) {
            return Err(Error::Domain(format!(
                "cev elasticity {} is undefined for negative rate {r} at t = {t}",
                self.elasticity
            )));
        }
        let next = self.expectation(t, r, dt) + self.std_deviation(t, r, dt) * dw;
        ensure_finite_rate(self.label(), t, r, next)
    }
}
