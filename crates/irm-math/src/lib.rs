//! # irm-math
//!
//! Mathematical utilities for the simulation engine: the inverse normal
//! distribution function and the random driver sources that feed every path.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Inverse standard normal distribution function.
pub mod distributions;

/// Random driver sources.
pub mod random_numbers;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use distributions::normal_cdf_inverse;
pub use random_numbers::{
    InverseCumulativeNormalRng, MersenneTwisterUniformRng, PseudoRandomNormal, RandomDriver,
    ReplayDriver,
};
