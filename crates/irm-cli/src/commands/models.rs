//! List the supported models.

use clap::ValueEnum;

use crate::config::ModelKind;
use crate::Result;

/// Print every model kind with a one-line description.
pub fn run() -> Result<()> {
    for kind in ModelKind::value_variants() {
        println!("{:<12} {}", kind.name(), kind.description());
    }
    Ok(())
}
