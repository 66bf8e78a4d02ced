//! # irmodels
//!
//! Path simulation for classical interest-rate models: Vasicek,
//! Cox-Ingersoll-Ross, CEV, CKLS, Ho-Lee, Hull-White and a
//! Heath-Jarrow-Morton forward-rate ensemble.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `irm-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use irmodels::core::TimeGrid;
//! use irmodels::math::InverseCumulativeNormalRng;
//! use irmodels::methods::PathIntegrator;
//! use irmodels::processes::VasicekProcess;
//!
//! let grid = TimeGrid::new(1.0, 0.01).unwrap();
//! let model = VasicekProcess::new(0.1, 0.2, 0.02, 0.05).unwrap();
//! let mut integrator = PathIntegrator::new(&grid, InverseCumulativeNormalRng::new(42));
//! let paths = integrator.run(&model).unwrap();
//!
//! assert_eq!(paths.size(), 101);
//! assert_eq!(paths.row(0), Some(&[0.05][..]));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, the time grid, and error definitions.
pub use irm_core as core;

/// Normal distribution and random driver sources.
pub use irm_math as math;

/// Interest-rate process definitions.
pub use irm_processes as processes;

/// Path integration and path collections.
pub use irm_methods as methods;
