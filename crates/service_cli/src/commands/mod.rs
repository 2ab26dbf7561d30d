//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

use clap::ValueEnum;

pub mod check;
pub mod price;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain-text lines
    Table,
    /// One JSON document on stdout
    Json,
}
