//! CLI error types

use thiserror::Error;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Model construction or simulation failure
    #[error("Simulation error: {0}")]
    Simulation(#[from] irm_core::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV output error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed configuration file
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration could not be rendered
    #[error("Serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Configuration file missing or unreadable
    #[error("Configuration error: {0}")]
    Config(String),
}
