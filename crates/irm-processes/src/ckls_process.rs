//! Chan-Karolyi-Longstaff-Sanders short-rate process.
//!
//! ```text
//! dr = (θ − a·r) dt + σ·|r|^γ dW
//! ```
//!
//! The diffusion uses `|r|` so the step stays defined for negative rates.

use crate::short_rate_process::ShortRateProcess;
use irm_core::errors::check_finite;
use irm_core::{ensure, Rate, Real, Result, Time, Volatility};

/// The CKLS process.
///
/// `dr = (drift − speed · r) dt + volatility · |r|^elasticity · dW`
#[derive(Debug, Clone)]
pub struct CklsProcess {
    x0: Rate,
    drift: Real,
    speed: Real,
    elasticity: Real,
    volatility: Volatility,
}

impl CklsProcess {
    /// Create a new CKLS process.
    ///
    /// # Arguments
    /// * `drift` — constant drift `θ`
    /// * `speed` — mean-reversion rate `a`
    /// * `elasticity` — elasticity exponent `γ`
    /// * `volatility` — volatility `σ` (must be ≥ 0)
    /// * `x0` — initial short rate
    pub fn new(
        drift: Real,
        speed: Real,
        elasticity: Real,
        volatility: Volatility,
        x0: Rate,
    ) -> Result<Self> {
        check_finite("drift", drift)?;
        check_finite("speed", speed)?;
        check_finite("elasticity", elasticity)?;
        check_finite("volatility", volatility)?;
        check_finite("x0", x0)?;
        ensure!(
            volatility >= 0.0,
            "volatility must be non-negative, got {volatility}"
        );
        Ok(Self {
            x0,
            drift,
            speed,
            elasticity,
            volatility,
        })
    }

    /// Elasticity exponent.
    pub fn elasticity(&self) -> Real {
        self.elasticity
    }
}

impl ShortRateProcess for CklsProcess {
    fn label(&self) -> &'static str {
        "ckls"
    }

    fn x0(&self) -> Rate {
        self.x0
    }

    fn drift(&self, _t: Time, r: Rate) -> Real {
        self.drift - self.speed * r
    }

    fn diffusion(&self, _t: Time, r: Rate) -> Real {
        self.volatility * r.abs().powf(self.elasticity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn ckls_drift() {
        let p = CklsProcess::new(0.1, 0.2, 0.5, 0.02, 0.05).unwrap();
        assert_abs_diff_eq!(p.drift(0.0, 0.05), 0.1 - 0.2 * 0.05, epsilon = 1e-15);
    }

    #[test]
    fn ckls_diffusion_is_symmetric_in_sign() {
        let p = CklsProcess::new(0.1, 0.2, 0.5, 0.02, 0.05).unwrap();
        assert_abs_diff_eq!(p.diffusion(0.0, 0.04), 0.02 * 0.2, epsilon = 1e-15);
        assert_abs_diff_eq!(p.diffusion(0.0, -0.04), 0.02 * 0.2, epsilon = 1e-15);
    }

    #[test]
    fn ckls_steps_through_negative_rates() {
        let p = CklsProcess::new(0.0, 0.2, 0.5, 0.5, -0.05).unwrap();
        let next = p.evolve_1d(0.0, -0.05, 0.01, 1.5).unwrap();
        assert!(next.is_finite());
    }

    #[test]
    fn ckls_zero_elasticity_has_constant_diffusion() {
        let p = CklsProcess::new(0.1, 0.2, 0.0, 0.02, 0.05).unwrap();
        assert_abs_diff_eq!(p.diffusion(0.0, 3.0), 0.02, epsilon = 1e-15);
    }
}
