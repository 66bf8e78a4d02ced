//! Run a simulation and write the paths as CSV.

use std::path::{Path, PathBuf};

use irm_methods::{PathCollector, PathIntegrator};
use tracing::{debug, info};

use crate::config::{ModelKind, SimulationConfig};
use crate::writer::write_csv_file;
use crate::Result;

/// Command-line overrides applied on top of the configuration file.
#[derive(Debug, Default)]
pub struct Overrides {
    /// Model family; replaces the file's parameters when it differs
    pub model: Option<ModelKind>,
    /// Random seed
    pub seed: Option<u64>,
    /// CSV destination
    pub output: Option<PathBuf>,
}

/// Merge the optional configuration file with the command-line overrides.
pub fn resolve(config: Option<&Path>, overrides: Overrides) -> Result<SimulationConfig> {
    let mut cfg = match (config, overrides.model) {
        (Some(path), _) => SimulationConfig::from_file(path)?,
        (None, Some(kind)) => SimulationConfig::for_model(kind),
        (None, None) => SimulationConfig::default(),
    };
    if let Some(kind) = overrides.model {
        cfg = cfg.with_model_kind(kind);
    }
    if let Some(seed) = overrides.seed {
        cfg.random.seed = Some(seed);
    }
    if let Some(output) = overrides.output {
        cfg.output.path = Some(output);
    }
    Ok(cfg)
}

/// Simulate `cfg` in memory.
pub fn execute(cfg: &SimulationConfig) -> Result<PathCollector> {
    let grid = cfg.grid.build()?;
    let model = cfg.model.build()?;
    debug!(
        model = model.name(),
        steps = grid.steps(),
        dt = grid.dt(),
        "simulation configured"
    );
    let mut integrator = PathIntegrator::new(&grid, cfg.random.driver());
    Ok(integrator.run(model.as_ref())?)
}

/// Run the `simulate` command.
pub fn run(config: Option<&Path>, overrides: Overrides) -> Result<()> {
    let cfg = resolve(config, overrides)?;
    let collector = execute(&cfg)?;
    let output = cfg.output_path();
    write_csv_file(&collector, &output)?;
    info!(
        model = cfg.model.kind().name(),
        rows = collector.size(),
        "Simulation completed. Results saved to {}",
        output.display()
    );
    Ok(())
}
