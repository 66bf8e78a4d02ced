//! Uniform simulation time grid.
//!
//! A [`TimeGrid`] is the ordered sequence `t_0 = 0, t_1, …, t_N` with a
//! fixed spacing `Δt`, where `N = ⌊horizon / Δt⌋`.  Every path produced by
//! the engine is sampled on exactly these points.

use crate::errors::{Error, Result};
use crate::{Size, Time};

/// Largest number of intervals a grid may hold.
pub const MAX_STEPS: Size = 100_000_000;

/// A grid of equally spaced time points starting at zero.
///
/// Immutable once constructed.  Points are computed as `t_k = k·Δt` rather
/// than by accumulation, so rounding errors do not build up along the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    times: Vec<Time>,
    dt: Time,
}

impl TimeGrid {
    /// Build the grid for a horizon and a step size.
    ///
    /// Produces `N = ⌊horizon / step⌋` intervals and `N + 1` points.
    ///
    /// # Errors
    /// [`Error::InvalidGrid`] if `horizon ≤ 0`, `step ≤ 0`, `step > horizon`,
    /// either value is not finite, or the grid would exceed [`MAX_STEPS`]
    /// intervals.
    pub fn new(horizon: Time, step: Time) -> Result<Self> {
        if !horizon.is_finite() || !step.is_finite() {
            return Err(Error::InvalidGrid(format!(
                "horizon ({horizon}) and step ({step}) must be finite"
            )));
        }
        if horizon <= 0.0 {
            return Err(Error::InvalidGrid(format!(
                "horizon must be positive, got {horizon}"
            )));
        }
        if step <= 0.0 {
            return Err(Error::InvalidGrid(format!(
                "step must be positive, got {step}"
            )));
        }
        if step > horizon {
            return Err(Error::InvalidGrid(format!(
                "step ({step}) exceeds horizon ({horizon}); no usable steps"
            )));
        }

        let ratio = (horizon / step).floor();
        if !ratio.is_finite() || ratio > MAX_STEPS as Time {
            return Err(Error::InvalidGrid(format!(
                "horizon {horizon} / step {step} exceeds {MAX_STEPS} intervals"
            )));
        }
        Ok(Self::build(ratio as Size, step))
    }

    /// Create a uniform grid from 0 to `horizon` with `steps` intervals.
    ///
    /// # Errors
    /// [`Error::InvalidGrid`] if `steps` is zero or above [`MAX_STEPS`], or
    /// `horizon` is not a positive finite number.
    pub fn uniform(horizon: Time, steps: Size) -> Result<Self> {
        if steps == 0 || steps > MAX_STEPS {
            return Err(Error::InvalidGrid(format!(
                "steps must be in 1..={MAX_STEPS}, got {steps}"
            )));
        }
        if !horizon.is_finite() || horizon <= 0.0 {
            return Err(Error::InvalidGrid(format!(
                "horizon must be positive, got {horizon}"
            )));
        }
        Ok(Self::build(steps, horizon / steps as Time))
    }

    fn build(steps: Size, dt: Time) -> Self {
        let times = (0..=steps).map(|k| k as Time * dt).collect();
        Self { times, dt }
    }

    /// Number of time points (= steps + 1).
    pub fn size(&self) -> Size {
        self.times.len()
    }

    /// Number of intervals `N`.
    pub fn steps(&self) -> Size {
        self.times.len() - 1
    }

    /// The fixed spacing `Δt`.
    pub fn dt(&self) -> Time {
        self.dt
    }

    /// Time of the `k`-th point.
    ///
    /// # Panics
    /// Panics if `k > steps()`.
    pub fn time(&self, k: Size) -> Time {
        self.times[k]
    }

    /// The last grid point `t_N` (≤ the requested horizon).
    pub fn horizon(&self) -> Time {
        self.times[self.times.len() - 1]
    }

    /// All time points in increasing order.
    pub fn times(&self) -> &[Time] {
        &self.times
    }

    /// Iterate over the time points in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = Time> + '_ {
        self.times.iter().copied()
    }
}
