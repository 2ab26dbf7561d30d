//! CLI configuration.
//!
//! Loaded from an optional TOML file, then overridden from `PRICER_*`
//! environment variables:
//!
//! ```toml
//! log_level = "info"
//!
//! [pricing]
//! degenerate_vol = "intrinsic"      # or "reject"
//! enforce_correlation_bounds = true
//! ```

use std::path::Path;

use pricer_models::config::{DegenerateVolPolicy, PricingConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Analytical pricing policy
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Default tracing level when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            pricing: PricingConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or the defaults if the file does not exist.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply `PRICER_*` environment variable overrides.
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut errors = Vec::new();
        let mut builder = self.pricing.to_builder();

        if let Some(policy) = lookup("PRICER_DEGENERATE_VOL") {
            match policy.parse::<DegenerateVolPolicy>() {
                Ok(policy) => builder = builder.degenerate_vol(policy),
                Err(e) => errors.push(format!("PRICER_DEGENERATE_VOL: {}", e)),
            }
        }

        if let Some(enforce) = lookup("PRICER_ENFORCE_CORRELATION_BOUNDS") {
            match parse_flag(&enforce) {
                Some(enforce) => builder = builder.enforce_correlation_bounds(enforce),
                None => errors.push(format!(
                    "PRICER_ENFORCE_CORRELATION_BOUNDS: expected true or false, got '{}'",
                    enforce
                )),
            }
        }

        if let Some(log_level) = lookup("PRICER_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if !errors.is_empty() {
            return Err(ConfigError::Validation(errors));
        }

        self.pricing = builder.build();
        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            Ok(())
        } else {
            Err(ConfigError::Validation(vec![format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            )]))
        }
    }

    /// Load from file (or defaults), apply environment overrides and validate.
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override()?;
        config.validate()?;
        Ok(config)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration error type
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),

    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
