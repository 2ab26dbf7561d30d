//! Price command implementation
//!
//! Prices a single instrument given on the command line, or a batch read
//! from a JSON file.

use std::path::Path;

use pricer_core::types::PricingError;
use pricer_models::analytical::BlackScholesPricer;
use pricer_models::instruments::Instrument;
use serde::Serialize;
use tracing::{info, warn};

use super::OutputFormat;
use crate::Result;

/// One line of pricing output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRecord {
    /// Instrument kind
    pub instrument: &'static str,
    /// Time to expiration in years
    pub expiry: f64,
    /// Price, absent when the instrument was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Rejection reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Run the single-instrument price command.
///
/// A rejected instrument is an error.
pub fn run(instrument: &Instrument, pricer: &BlackScholesPricer, format: OutputFormat) -> Result<()> {
    let price = evaluate(instrument, pricer)?;
    let record = PriceRecord {
        instrument: instrument.name(),
        expiry: instrument.expiry(),
        price: Some(price),
        error: None,
    };

    let output = match format {
        OutputFormat::Table => render_line(&record),
        OutputFormat::Json => serde_json::to_string(&record)?,
    };
    println!("{}", output);
    Ok(())
}

/// Run the batch price command over a JSON array of instruments.
///
/// Rejected instruments are reported alongside the priced ones.
pub fn run_file(path: &Path, pricer: &BlackScholesPricer, format: OutputFormat) -> Result<()> {
    info!(path = %path.display(), "Loading instruments");
    let content = std::fs::read_to_string(path)?;
    let instruments: Vec<Instrument> = serde_json::from_str(&content)?;

    let records = price_all(&instruments, pricer);
    let rejected = records.iter().filter(|r| r.error.is_some()).count();
    info!(total = records.len(), rejected, "Pricing complete");

    match format {
        OutputFormat::Table => {
            for record in &records {
                println!("{}", render_line(record));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
    }
    Ok(())
}

/// Prices every instrument, keeping going past rejected ones.
pub fn price_all(instruments: &[Instrument], pricer: &BlackScholesPricer) -> Vec<PriceRecord> {
    instruments
        .iter()
        .map(|instrument| match evaluate(instrument, pricer) {
            Ok(price) => PriceRecord {
                instrument: instrument.name(),
                expiry: instrument.expiry(),
                price: Some(price),
                error: None,
            },
            Err(e) => PriceRecord {
                instrument: instrument.name(),
                expiry: instrument.expiry(),
                price: None,
                error: Some(e.to_string()),
            },
        })
        .collect()
}

fn evaluate(instrument: &Instrument, pricer: &BlackScholesPricer) -> std::result::Result<f64, PricingError> {
    instrument.price(pricer).map_err(|e| {
        warn!(instrument = instrument.name(), error = %e, "Instrument rejected");
        PricingError::from(e)
    })
}

fn render_line(record: &PriceRecord) -> String {
    let head = format!("{:<18}{:>8.4}", record.instrument, record.expiry);
    match (&record.price, &record.error) {
        (Some(price), _) => format!("{}{:>20.10}", head, price),
        (None, Some(error)) => format!("{}  error: {}", head, error),
        (None, None) => head,
    }
}
