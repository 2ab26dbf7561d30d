//! # Pricer Models (L2: Business Logic)
//!
//! Closed-form pricers under lognormal (Black-Scholes) dynamics.
//!
//! This crate provides:
//! - Forward and quanto-adjusted forward prices
//! - European cash-or-nothing digital options
//! - European vanilla options
//! - Knockout forwards
//! - A typed call/put selector and an instrument enum for batch pricing
//! - Pricing configuration (degenerate-volatility policy, correlation bounds)
//!
//! ## Design Principles
//!
//! - **Pure functions** over plain `f64` inputs; no shared state
//! - **Enum-based instruments** for static dispatch
//! - **Builder pattern** for configuration with sensible defaults
//!
//! ## Quick Start
//!
//! ```
//! use pricer_models::analytical::{european_option_bs, fwd_price};
//!
//! let fwd = fwd_price(100.0, 1.0, 0.05, 0.02).unwrap();
//! assert!((fwd - 103.0455).abs() < 1e-4);
//!
//! let call = european_option_bs(1, 100.0, 100.0, 1.0, 0.05, 0.0, 0.2).unwrap();
//! assert!((call - 10.4506).abs() < 1e-4);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod config;
pub mod instruments;

/// Crate version, as published in the package manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
