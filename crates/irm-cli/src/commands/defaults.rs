//! Print a model's reference configuration.

use crate::config::{ModelKind, SimulationConfig};
use crate::Result;

/// The reference configuration of `kind` as TOML.
pub fn render(kind: ModelKind) -> Result<String> {
    SimulationConfig::for_model(kind).to_toml()
}

/// Print the reference configuration of `kind` to stdout.
pub fn run(kind: ModelKind) -> Result<()> {
    print!("{}", render(kind)?);
    Ok(())
}
