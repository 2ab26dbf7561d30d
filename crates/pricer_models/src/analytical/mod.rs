//! Analytical pricing formulas under lognormal (Black-Scholes) dynamics.
//!
//! This module provides closed-form prices for:
//! - Forwards and quanto-adjusted forwards (`forward`)
//! - European cash-or-nothing digital options (`digital`)
//! - European vanilla options (`black_scholes`)
//! - Knockout forwards, built from the vanilla and digital prices (`knockout`)
//!
//! ## Design Principles
//!
//! - **Pure functions**: no state between calls; every entry point is reentrant
//! - **Validate first**: preconditions are checked before any arithmetic and
//!   reported as `AnalyticalError::InvalidArgument`
//! - **Injected CDF**: formulas go through [`BlackScholesPricer`], which is generic
//!   over the `NormalCdf` implementation; the free functions use the default pricer

pub mod black_scholes;
pub mod digital;
pub mod error;
pub mod forward;
pub mod knockout;
pub mod pricer;

// Re-export main types at module level
pub use black_scholes::european_option_bs;
pub use digital::digital_option_bs;
pub use error::AnalyticalError;
pub use forward::{fwd_price, quanto_fwd_price};
pub use knockout::knockout_fwd;
pub use pricer::BlackScholesPricer;
