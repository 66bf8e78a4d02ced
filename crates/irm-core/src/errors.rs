//! Error types for irmodels.
//!
//! Every failure the simulation engine can report is a variant of the single
//! `thiserror`-derived [`Error`] enum.  Parameter checks use the
//! [`ensure!`](crate::ensure) and [`fail!`](crate::fail) macros defined here.

use thiserror::Error;

/// The top-level error type used throughout irmodels.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Horizon or step size cannot produce a usable time grid.
    #[error("invalid time grid: {0}")]
    InvalidGrid(String),

    /// A time-indexed parameter sequence does not cover the grid.
    #[error("parameter `{parameter}` has {actual} values but the grid needs {required}")]
    InsufficientParameterLength {
        /// Name of the offending parameter sequence.
        parameter: String,
        /// Number of values the grid requires.
        required: usize,
        /// Number of values supplied.
        actual: usize,
    },

    /// Drift, diffusion or state evaluated outside its domain.
    #[error("domain error: {0}")]
    Domain(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout irmodels.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use irm_core::{ensure, errors::Error};
/// fn positive(x: f64) -> irm_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use irm_core::{fail, errors::Error};
/// fn always_err() -> irm_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

/// Check that a model coefficient is a finite number.
///
/// Returns `Err(Error::InvalidArgument(...))` naming the coefficient
/// otherwise.
pub fn check_finite(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidArgument(format!(
            "{name} must be finite, got {value}"
        )))
    }
}
