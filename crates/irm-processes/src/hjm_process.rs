//! Heath-Jarrow-Morton forward-rate ensemble.
//!
//! ```text
//! df = μ dt + σ dW
//! ```
//!
//! `P` forward-rate paths start at zero and advance together.  By default
//! all of them consume the **same** draw at each step, so an ensemble
//! started from a flat zero curve produces `P` identical columns.
//! [`HjmProcess::with_independent_draws`] gives each path its own draw.

use crate::rate_model::{PathState, RateModel};
use irm_core::errors::check_finite;
use irm_core::{ensure, Real, Result, Size, Time, Volatility};

/// An ensemble of HJM forward-rate paths.
#[derive(Debug, Clone)]
pub struct HjmProcess {
    drift: Real,
    volatility: Volatility,
    paths: Size,
    independent: bool,
}

impl HjmProcess {
    /// Create an ensemble of `paths` forward-rate paths sharing one draw
    /// per step.
    pub fn new(drift: Real, volatility: Volatility, paths: Size) -> Result<Self> {
        check_finite("drift", drift)?;
        check_finite("volatility", volatility)?;
        ensure!(
            volatility >= 0.0,
            "volatility must be non-negative, got {volatility}"
        );
        ensure!(paths > 0, "ensemble needs at least one path");
        Ok(Self {
            drift,
            volatility,
            paths,
            independent: false,
        })
    }

    /// Draw a separate normal for every path at every step.
    pub fn with_independent_draws(mut self) -> Self {
        self.independent = true;
        self
    }

    /// Whether every path consumes its own draw.
    pub fn independent_draws(&self) -> bool {
        self.independent
    }
}

impl RateModel for HjmProcess {
    fn name(&self) -> &'static str {
        "hjm"
    }

    fn paths(&self) -> Size {
        self.paths
    }

    fn factors(&self) -> Size {
        if self.independent {
            self.paths
        } else {
            1
        }
    }

    fn column_label(&self) -> &'static str {
        "ForwardRate"
    }

    fn initial_state(&self) -> PathState {
        PathState::new(vec![0.0; self.paths])
    }

    fn evolve(
        &self,
        _step: Size,
        _t: Time,
        dt: Time,
        state: &mut PathState,
        dw: &[Real],
    ) -> Result<()> {
        let deterministic = self.drift * dt;
        let scale = self.volatility * dt.sqrt();
        let independent = self.independent;
        for (p, f) in state.values_mut().iter_mut().enumerate() {
            let d = if independent { dw[p] } else { dw[0] };
            *f = *f + deterministic + scale * d;
        }
        Ok(())
    }
}
