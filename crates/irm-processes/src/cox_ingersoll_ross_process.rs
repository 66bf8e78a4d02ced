//! Cox-Ingersoll-Ross square-root short-rate process.
//!
//! ```text
//! dr = a(b − r) dt + σ √r dW
//! ```
//!
//! The explicit step can overshoot below zero; the result is floored at
//! zero and the diffusion is evaluated on `max(0, r)`.

use crate::short_rate_process::{ensure_finite_rate, ShortRateProcess};
use irm_core::errors::check_finite;
use irm_core::{ensure, Rate, Real, Result, Time, Volatility};
use tracing::trace;

/// A square-root (CIR) process.
///
/// `dr = speed · (level − r) dt + volatility · √r · dW`
#[derive(Debug, Clone)]
pub struct CoxIngersollRossProcess {
    x0: Rate,
    speed: Real,
    level: Rate,
    volatility: Volatility,
}

impl CoxIngersollRossProcess {
    /// Create a new CIR process.
    ///
    /// # Arguments
    /// * `level` — long-run level `b`
    /// * `speed` — mean-reversion speed `a`
    /// * `volatility` — volatility `σ` (must be ≥ 0)
    /// * `x0` — initial value (must be ≥ 0)
    pub fn new(level: Rate, speed: Real, volatility: Volatility, x0: Rate) -> Result<Self> {
        check_finite("level", level)?;
        check_finite("speed", speed)?;
        check_finite("volatility", volatility)?;
        check_finite("x0", x0)?;
        ensure!(
            volatility >= 0.0,
            "volatility must be non-negative, got {volatility}"
        );
        ensure!(x0 >= 0.0, "initial value must be non-negative, got {x0}");
        Ok(Self {
            x0,
            speed,
            level,
            volatility,
        })
    }

    /// Mean-reversion speed.
    pub fn speed(&self) -> Real {
        self.speed
    }

    /// Long-run mean level.
    pub fn level(&self) -> Rate {
        self.level
    }

    /// Volatility.
    pub fn volatility(&self) -> Volatility {
        self.volatility
    }
}

impl ShortRateProcess for CoxIngersollRossProcess {
    fn label(&self) -> &'static str {
        "cir"
    }

    fn x0(&self) -> Rate {
        self.x0
    }

    fn drift(&self, _t: Time, r: Rate) -> Real {
        self.speed * (self.level - r)
    }

    fn diffusion(&self, _t: Time, r: Rate) -> Real {
        self.volatility * r.max(0.0).sqrt()
    }

    fn evolve_1d(&self, t: Time, r: Rate, dt: Time, dw: Real) -> Result<Rate> {
        let raw = self.expectation(t, r, dt) + self.std_deviation(t, r, dt) * dw;
        let raw = ensure_finite_rate(self.label(), t, r, raw)?;
        if raw < 0.0 {
            trace!(t, raw, "cir step floored at zero");
            return Ok(0.0);
        }
        Ok(raw)
    }
}
