//! Time-indexed coefficient schedules for time-inhomogeneous models.
//!
//! A [`TermSchedule`] stores one coefficient per grid interval, addressed by
//! the interval index `0..N-1` in grid order.  What happens past the last
//! supplied value is decided by its [`Extension`] policy.

use irm_core::errors::check_finite;
use irm_core::{Error, Real, Result, Size};

/// How a schedule answers for indices beyond its last value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Extension {
    /// The schedule must cover every interval of the grid.
    #[default]
    Strict,
    /// Repeat the last value.
    Clamp,
    /// Wrap around to the start of the schedule.
    Cycle,
}

/// A sequence of coefficients indexed by grid interval.
#[derive(Debug, Clone, PartialEq)]
pub struct TermSchedule {
    values: Vec<Real>,
    extension: Extension,
}

impl TermSchedule {
    /// Create a strict schedule from `values`.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `values` is empty or holds a
    /// non-finite number.
    pub fn new(values: Vec<Real>) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::InvalidArgument(
                "schedule must contain at least one value".into(),
            ));
        }
        for v in &values {
            check_finite("schedule value", *v)?;
        }
        Ok(Self {
            values,
            extension: Extension::Strict,
        })
    }

    /// A schedule holding `value` for every interval.
    pub fn flat(value: Real) -> Result<Self> {
        Ok(Self::new(vec![value])?.with_extension(Extension::Clamp))
    }

    /// Replace the extension policy.
    pub fn with_extension(mut self, extension: Extension) -> Self {
        self.extension = extension;
        self
    }

    /// The extension policy.
    pub fn extension(&self) -> Extension {
        self.extension
    }

    /// The supplied values.
    pub fn values(&self) -> &[Real] {
        &self.values
    }

    /// Number of supplied values.
    pub fn len(&self) -> Size {
        self.values.len()
    }

    /// Always `false`; schedules hold at least one value.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Coefficient for interval `j`, or `None` past the end of a strict
    /// schedule.
    pub fn value(&self, j: Size) -> Option<Real> {
        match self.extension {
            Extension::Strict => self.values.get(j).copied(),
            Extension::Clamp => self.values.get(j).or(self.values.last()).copied(),
            Extension::Cycle => Some(self.values[j % self.values.len()]),
        }
    }

    /// Check the schedule answers for every interval `0..steps`.
    ///
    /// # Errors
    /// [`Error::InsufficientParameterLength`] for a strict schedule shorter
    /// than `steps`.
    pub fn check_covers(&self, parameter: &str, steps: Size) -> Result<()> {
        if self.extension == Extension::Strict && self.values.len() < steps {
            return Err(Error::InsufficientParameterLength {
                parameter: parameter.to_string(),
                required: steps,
                actual: self.values.len(),
            });
        }
        Ok(())
    }
}
