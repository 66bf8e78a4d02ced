//! # irm-core
//!
//! Core types, traits, and error definitions for irmodels.
//!
//! This crate provides the building blocks shared by every other crate in
//! the workspace – scalar type aliases, the error hierarchy with its
//! `ensure!` / `fail!` macros, and the uniform [`TimeGrid`] on which all
//! paths are simulated.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Uniform simulation time grid.
pub mod time_grid;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for array sizes / indices.
pub type Size = usize;

/// A rate expressed as a decimal (e.g. 0.05 = 5 %).
pub type Rate = Real;

/// A volatility level expressed as a decimal.
pub type Volatility = Real;

/// A time measurement in years.
pub type Time = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use time_grid::TimeGrid;
