//! Simulation configuration loading
//!
//! A simulation is described by a TOML file:
//!
//! ```toml
//! [grid]
//! horizon = 1.0
//! step = 0.01
//!
//! [model]
//! kind = "vasicek"
//! speed = 0.1
//! long_run = 0.2
//! volatility = 0.02
//! x0 = 0.05
//!
//! [random]
//! generator = "mersenne-twister"
//! seed = 42
//!
//! [output]
//! path = "vasicek_simulation.csv"
//! ```
//!
//! Every section and every field may be omitted.  Missing values fall back
//! to the reference parameters of the chosen model.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use irm_core::{Rate, Real, Size, Time, TimeGrid, Volatility};
use irm_math::random_numbers::{InverseCumulativeNormalRng, PseudoRandomNormal, RandomDriver};
use irm_processes::{
    CevProcess, CklsProcess, CoxIngersollRossProcess, Extension, HjmProcess, HoLeeProcess,
    HullWhiteProcess, RateModel, TermSchedule, VasicekProcess,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{CliError, Result};

// ─── Model kinds ──────────────────────────────────────────────────────────────

/// The supported model families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelKind {
    /// Vasicek mean-reverting Gaussian short rate
    Vasicek,
    /// Cox-Ingersoll-Ross square-root short rate
    Cir,
    /// Constant elasticity of variance short rate
    Cev,
    /// Chan-Karolyi-Longstaff-Sanders short rate
    Ckls,
    /// Ho-Lee trending short rate
    HoLee,
    /// Hull-White with per-interval coefficients
    HullWhite,
    /// Heath-Jarrow-Morton forward-rate ensemble
    Hjm,
}

impl ModelKind {
    /// Name used in configuration files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Vasicek => "vasicek",
            Self::Cir => "cir",
            Self::Cev => "cev",
            Self::Ckls => "ckls",
            Self::HoLee => "ho-lee",
            Self::HullWhite => "hull-white",
            Self::Hjm => "hjm",
        }
    }

    /// One-line description of the dynamics.
    pub fn description(self) -> &'static str {
        match self {
            Self::Vasicek => "dr = a(b - r) dt + sigma dW",
            Self::Cir => "dr = k(theta - r) dt + sigma sqrt(r) dW, floored at zero",
            Self::Cev => "dr = (theta r^(g-1) + a r) dt + sigma r^(g/2) dW",
            Self::Ckls => "dr = (theta - a r) dt + sigma |r|^g dW",
            Self::HoLee => "dr = theta t dt + sigma dW, starting at zero",
            Self::HullWhite => "dr = (theta(t) - alpha(t) r) dt + sigma(t) dW, explicit solution",
            Self::Hjm => "df = mu dt + sigma dW for an ensemble of forward-rate paths",
        }
    }

    /// Reference parameters for this model.
    pub fn default_model(self) -> ModelConfig {
        match self {
            Self::Vasicek => ModelConfig::Vasicek(VasicekConfig::default()),
            Self::Cir => ModelConfig::Cir(CirConfig::default()),
            Self::Cev => ModelConfig::Cev(CevConfig::default()),
            Self::Ckls => ModelConfig::Ckls(CklsConfig::default()),
            Self::HoLee => ModelConfig::HoLee(HoLeeConfig::default()),
            Self::HullWhite => ModelConfig::HullWhite(HullWhiteConfig::default()),
            Self::Hjm => ModelConfig::Hjm(HjmConfig::default()),
        }
    }

    /// File the reference run writes to.
    pub fn default_output(self) -> PathBuf {
        let stem = match self {
            Self::HoLee => "ho_and_lee",
            Self::HullWhite => "hull_and_white",
            other => other.name(),
        };
        PathBuf::from(format!("{stem}_simulation.csv"))
    }
}

// ─── Model parameters ─────────────────────────────────────────────────────────

/// `[model]` section, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ModelConfig {
    /// Vasicek parameters
    Vasicek(VasicekConfig),
    /// CIR parameters
    Cir(CirConfig),
    /// CEV parameters
    Cev(CevConfig),
    /// CKLS parameters
    Ckls(CklsConfig),
    /// Ho-Lee parameters
    HoLee(HoLeeConfig),
    /// Hull-White parameters
    HullWhite(HullWhiteConfig),
    /// HJM parameters
    Hjm(HjmConfig),
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::Vasicek(VasicekConfig::default())
    }
}

impl ModelConfig {
    /// The model family.
    pub fn kind(&self) -> ModelKind {
        match self {
            Self::Vasicek(_) => ModelKind::Vasicek,
            Self::Cir(_) => ModelKind::Cir,
            Self::Cev(_) => ModelKind::Cev,
            Self::Ckls(_) => ModelKind::Ckls,
            Self::HoLee(_) => ModelKind::HoLee,
            Self::HullWhite(_) => ModelKind::HullWhite,
            Self::Hjm(_) => ModelKind::Hjm,
        }
    }

    /// Construct the configured model.
    pub fn build(&self) -> irm_core::Result<Box<dyn RateModel>> {
        let model: Box<dyn RateModel> = match self {
            Self::Vasicek(c) => Box::new(VasicekProcess::new(
                c.speed,
                c.long_run,
                c.volatility,
                c.x0,
            )?),
            Self::Cir(c) => Box::new(CoxIngersollRossProcess::new(
                c.level,
                c.speed,
                c.volatility,
                c.x0,
            )?),
            Self::Cev(c) => Box::new(CevProcess::new(
                c.speed,
                c.drift,
                c.elasticity,
                c.volatility,
                c.x0,
            )?),
            Self::Ckls(c) => Box::new(CklsProcess::new(
                c.drift,
                c.speed,
                c.elasticity,
                c.volatility,
                c.x0,
            )?),
            Self::HoLee(c) => Box::new(HoLeeProcess::new(c.drift, c.volatility)?),
            Self::HullWhite(c) => {
                let schedule = |values: &[Real]| {
                    TermSchedule::new(values.to_vec()).map(|s| s.with_extension(c.extension))
                };
                Box::new(HullWhiteProcess::new(
                    c.r0,
                    schedule(&c.theta)?,
                    schedule(&c.alpha)?,
                    schedule(&c.sigma)?,
                )?)
            }
            Self::Hjm(c) => {
                let hjm = HjmProcess::new(c.drift, c.volatility, c.paths)?;
                Box::new(if c.independent_draws {
                    hjm.with_independent_draws()
                } else {
                    hjm
                })
            }
        };
        Ok(model)
    }
}

/// Vasicek: `dr = a(b − r) dt + σ dW`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VasicekConfig {
    /// Mean-reversion speed `a`
    pub speed: Real,
    /// Long-run level `b`
    pub long_run: Rate,
    /// Volatility `σ`
    pub volatility: Volatility,
    /// Initial rate
    pub x0: Rate,
}

impl Default for VasicekConfig {
    fn default() -> Self {
        Self {
            speed: 0.1,
            long_run: 0.2,
            volatility: 0.02,
            x0: 0.05,
        }
    }
}

/// Cox-Ingersoll-Ross: `dr = k(θ − r) dt + σ√r dW`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CirConfig {
    /// Mean-reversion level `θ`
    pub level: Rate,
    /// Mean-reversion speed `k`
    pub speed: Real,
    /// Volatility `σ`
    pub volatility: Volatility,
    /// Initial rate (non-negative)
    pub x0: Rate,
}

impl Default for CirConfig {
    fn default() -> Self {
        Self {
            level: 0.1,
            speed: 0.2,
            volatility: 0.02,
            x0: 0.05,
        }
    }
}

/// Constant elasticity of variance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CevConfig {
    /// Linear drift coefficient `a`
    pub speed: Real,
    /// Power drift coefficient `θ`
    pub drift: Real,
    /// Elasticity `γ`
    pub elasticity: Real,
    /// Volatility `σ`
    pub volatility: Volatility,
    /// Initial rate
    pub x0: Rate,
}

impl Default for CevConfig {
    fn default() -> Self {
        Self {
            speed: 0.1,
            drift: 0.2,
            elasticity: 0.5,
            volatility: 0.02,
            x0: 0.05,
        }
    }
}

/// Chan-Karolyi-Longstaff-Sanders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CklsConfig {
    /// Constant drift `θ`
    pub drift: Real,
    /// Mean-reversion speed `a`
    pub speed: Real,
    /// Elasticity `γ`
    pub elasticity: Real,
    /// Volatility `σ`
    pub volatility: Volatility,
    /// Initial rate
    pub x0: Rate,
}

impl Default for CklsConfig {
    fn default() -> Self {
        Self {
            drift: 0.1,
            speed: 0.2,
            elasticity: 0.5,
            volatility: 0.02,
            x0: 0.05,
        }
    }
}

/// Ho-Lee: `dr = θ·t dt + σ dW` from `r₀ = 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoLeeConfig {
    /// Trend coefficient `θ`
    pub drift: Real,
    /// Volatility `σ`
    pub volatility: Volatility,
}

impl Default for HoLeeConfig {
    fn default() -> Self {
        Self {
            drift: 0.02,
            volatility: 0.01,
        }
    }
}

/// Hull-White with per-interval schedules.
///
/// The reference schedules hold three values each, so the default
/// extension repeats the last one to cover longer grids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HullWhiteConfig {
    /// Initial rate
    pub r0: Rate,
    /// Drift level per interval
    pub theta: Vec<Real>,
    /// Mean-reversion speed per interval
    pub alpha: Vec<Real>,
    /// Volatility per interval
    pub sigma: Vec<Real>,
    /// Behaviour past the end of a schedule
    pub extension: Extension,
}

impl Default for HullWhiteConfig {
    fn default() -> Self {
        Self {
            r0: 0.02,
            theta: vec![0.03, 0.02, 0.025],
            alpha: vec![0.01, 0.015, 0.012],
            sigma: vec![0.01, 0.015, 0.02],
            extension: Extension::Clamp,
        }
    }
}

/// Heath-Jarrow-Morton forward-rate ensemble.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HjmConfig {
    /// Drift `μ`
    pub drift: Real,
    /// Volatility `σ`
    pub volatility: Volatility,
    /// Number of forward-rate paths
    pub paths: Size,
    /// Give every path its own draw instead of one shared draw per step
    pub independent_draws: bool,
}

impl Default for HjmConfig {
    fn default() -> Self {
        Self {
            drift: 0.1,
            volatility: 0.02,
            paths: 5,
            independent_draws: false,
        }
    }
}

// ─── Grid, randomness, output ─────────────────────────────────────────────────

/// `[grid]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Simulation horizon in years
    pub horizon: Time,
    /// Nominal step size in years
    pub step: Time,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            horizon: 1.0,
            step: 0.01,
        }
    }
}

impl GridConfig {
    /// Build the time grid.
    pub fn build(&self) -> irm_core::Result<TimeGrid> {
        TimeGrid::new(self.horizon, self.step)
    }
}

/// Pseudo-random generator backing the normal draws.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Generator {
    /// MT19937-64 with inverse-CDF normals
    #[default]
    MersenneTwister,
    /// `rand`'s standard generator with Ziggurat normals
    Standard,
}

/// `[random]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    /// Generator family
    pub generator: Generator,
    /// Seed; drawn from OS entropy when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl RandomConfig {
    /// Create the random driver.
    pub fn driver(&self) -> Box<dyn RandomDriver> {
        let seed = self.seed.unwrap_or_else(|| {
            let seed = rand::random();
            info!(seed, "no seed configured, drew one from entropy");
            seed
        });
        match self.generator {
            Generator::MersenneTwister => Box::new(InverseCumulativeNormalRng::new(seed)),
            Generator::Standard => Box::new(PseudoRandomNormal::new(seed)),
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// CSV destination
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

// ─── SimulationConfig ─────────────────────────────────────────────────────────

/// A complete simulation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Time grid
    #[serde(default)]
    pub grid: GridConfig,
    /// Model and parameters
    #[serde(default)]
    pub model: ModelConfig,
    /// Random driver
    #[serde(default)]
    pub random: RandomConfig,
    /// Output destination
    #[serde(default)]
    pub output: OutputConfig,
}

impl SimulationConfig {
    /// The reference run of `kind`.
    pub fn for_model(kind: ModelKind) -> Self {
        Self {
            grid: GridConfig::default(),
            model: kind.default_model(),
            random: RandomConfig::default(),
            output: OutputConfig {
                path: Some(kind.default_output()),
            },
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Switch to `kind`, resetting the parameters if the family changes.
    pub fn with_model_kind(mut self, kind: ModelKind) -> Self {
        if self.model.kind() != kind {
            self.model = kind.default_model();
        }
        self
    }

    /// Where the CSV goes.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .path
            .clone()
            .unwrap_or_else(|| self.model.kind().default_output())
    }
}
