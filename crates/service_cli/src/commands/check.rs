//! Check command implementation
//!
//! Prints the effective configuration, the library version and the result
//! of a standard normal CDF self-test.

use pricer_core::math::norm_cdf;
use serde_json::json;
use tracing::{info, warn};

use super::OutputFormat;
use crate::config::CliConfig;
use crate::Result;

/// Φ reference points and their values.
const CDF_REFERENCE: [(f64, f64); 4] = [
    (0.0, 0.5),
    (1.0, 0.8413447460685429),
    (-1.0, 0.15865525393145707),
    (1.96, 0.9750021048517795),
];

const CDF_TOLERANCE: f64 = 1e-12;

/// Largest absolute deviation of `norm_cdf` from the reference points.
pub fn cdf_self_test() -> f64 {
    CDF_REFERENCE
        .iter()
        .map(|&(x, expected)| (norm_cdf(x) - expected).abs())
        .fold(0.0, f64::max)
}

/// Run the check command
pub fn run(config: &CliConfig, format: OutputFormat) -> Result<()> {
    info!("Checking configuration...");

    let max_error = cdf_self_test();
    let passed = max_error <= CDF_TOLERANCE;
    if !passed {
        warn!(max_error, "Normal CDF self-test exceeded tolerance");
    }
    let status = if passed { "ok" } else { "failed" };

    match format {
        OutputFormat::Table => {
            println!("pricer_models version       {}", pricer_models::VERSION);
            println!(
                "degenerate_vol              {}",
                config.pricing.degenerate_vol()
            );
            println!(
                "enforce_correlation_bounds  {}",
                config.pricing.enforce_correlation_bounds()
            );
            println!("log_level                   {}", config.log_level);
            println!("normal_cdf self-test        {} (max error {:e})", status, max_error);
        }
        OutputFormat::Json => {
            let report = json!({
                "version": pricer_models::VERSION,
                "config": config,
                "normal_cdf_self_test": {
                    "status": status,
                    "max_error": max_error,
                },
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cdf_self_test_passes() {
        assert!(cdf_self_test() <= CDF_TOLERANCE);
    }

    #[test]
    fn test_run_both_formats() {
        let config = CliConfig::default();
        assert!(run(&config, OutputFormat::Table).is_ok());
        assert!(run(&config, OutputFormat::Json).is_ok());
    }
}
