//! Vasicek mean-reverting short-rate process.
//!
//! ```text
//! dr = a(b − r) dt + σ dW
//! ```
//!
//! where `a` is the speed of mean reversion, `b` is the long-run level,
//! and `σ` is the constant volatility.

use crate::short_rate_process::ShortRateProcess;
use irm_core::errors::check_finite;
use irm_core::{ensure, Rate, Real, Result, Time, Volatility};

/// The Vasicek process.
///
/// `dr = speed · (long_run − r) dt + volatility · dW`
#[derive(Debug, Clone)]
pub struct VasicekProcess {
    x0: Rate,
    speed: Real,
    long_run: Rate,
    volatility: Volatility,
}

impl VasicekProcess {
    /// Create a new Vasicek process.
    ///
    /// # Arguments
    /// * `speed` — mean-reversion speed `a`
    /// * `long_run` — long-run level `b`
    /// * `volatility` — diffusion coefficient `σ` (must be ≥ 0)
    /// * `x0` — initial short rate
    pub fn new(speed: Real, long_run: Rate, volatility: Volatility, x0: Rate) -> Result<Self> {
        check_finite("speed", speed)?;
        check_finite("long_run", long_run)?;
        check_finite("volatility", volatility)?;
        check_finite("x0", x0)?;
        ensure!(
            volatility >= 0.0,
            "volatility must be non-negative, got {volatility}"
        );
        Ok(Self {
            x0,
            speed,
            long_run,
            volatility,
        })
    }

    /// Speed of mean reversion.
    pub fn speed(&self) -> Real {
        self.speed
    }

    /// Long-run level.
    pub fn long_run(&self) -> Rate {
        self.long_run
    }

    /// Volatility.
    pub fn volatility(&self) -> Volatility {
        self.volatility
    }
}

impl ShortRateProcess for VasicekProcess {
    fn label(&self) -> &'static str {
        "vasicek"
    }

    fn x0(&self) -> Rate {
        self.x0
    }

    fn drift(&self, _t: Time, r: Rate) -> Real {
        self.speed * (self.long_run - r)
    }

    fn diffusion(&self, _t: Time, _r: Rate) -> Real {
        self.volatility
    }
}
