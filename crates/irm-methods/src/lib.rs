//! # irm-methods
//!
//! Path simulation: the discretization loop that advances a
//! [`RateModel`](irm_processes::RateModel) along a
//! [`TimeGrid`](irm_core::TimeGrid), and the containers that hold the
//! resulting sample paths.
//!
//! # Overview
//!
//! * [`PathIntegrator`] — runs a model over a grid with an injected driver
//! * [`PathWalker`] — the same loop, one step at a time
//! * [`Path`] — a single realisation (times + values)
//! * [`PathCollector`] — one or more paths sharing a grid, row by row

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Sample paths and path collections.
pub mod path;

/// The path integration loop.
pub mod path_integrator;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use path::{Path, PathCollector};
pub use path_integrator::{PathIntegrator, PathWalker};
