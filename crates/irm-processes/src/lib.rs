//! # irm-processes
//!
//! Interest-rate process definitions (Vasicek, CIR, CEV, CKLS, Ho-Lee,
//! Hull-White, HJM forward-curve ensemble).
//!
//! Every process implements [`RateModel`], the stepping interface driven by
//! the path integrator in `irm-methods`.  Single-factor diffusions are
//! written against [`ShortRateProcess`], which supplies the explicit
//! Euler-Maruyama step and picks up `RateModel` through a blanket
//! implementation.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cev_process;
pub mod ckls_process;
pub mod cox_ingersoll_ross_process;
pub mod hjm_process;
pub mod ho_lee_process;
pub mod hull_white_process;
pub mod rate_model;
pub mod short_rate_process;
pub mod term_schedule;
pub mod vasicek_process;

pub use cev_process::CevProcess;
pub use ckls_process::CklsProcess;
pub use cox_ingersoll_ross_process::CoxIngersollRossProcess;
pub use hjm_process::HjmProcess;
pub use ho_lee_process::HoLeeProcess;
pub use hull_white_process::HullWhiteProcess;
pub use rate_model::{PathState, RateModel};
pub use short_rate_process::ShortRateProcess;
pub use term_schedule::{Extension, TermSchedule};
pub use vasicek_process::VasicekProcess;
