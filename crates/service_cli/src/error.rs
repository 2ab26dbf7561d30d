//! CLI error types.

use pricer_core::types::PricingError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `pricer` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file or environment override could not be used
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A pricing precondition was violated
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// Input file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Instrument file or output could not be (de)serialised
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
