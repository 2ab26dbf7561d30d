//! Instrument definitions for the closed-form pricers.
//!
//! # Architecture
//!
//! Uses enum dispatch (NOT trait objects) for static dispatch:
//! - [`Instrument`] wraps the contract terms and market inputs of each
//!   supported product as plain `f64` fields
//! - [`PayoffType`] is the typed call/put selector
//!
//! # Examples
//!
//! ```
//! use pricer_models::analytical::BlackScholesPricer;
//! use pricer_models::config::PricingConfig;
//! use pricer_models::instruments::{Instrument, PayoffType};
//!
//! let pricer = BlackScholesPricer::new(PricingConfig::default());
//! let call = Instrument::European {
//!     payoff_type: PayoffType::Call,
//!     spot: 100.0,
//!     strike: 100.0,
//!     time_to_exp: 1.0,
//!     int_rate: 0.05,
//!     div_yield: 0.0,
//!     volatility: 0.2,
//! };
//!
//! let price = call.price(&pricer).unwrap();
//! assert!((price - 10.4506).abs() < 1e-4);
//! ```

mod payoff;

pub use payoff::{ParsePayoffTypeError, PayoffType};

use pricer_core::math::NormalCdf;

use crate::analytical::{AnalyticalError, BlackScholesPricer};

/// Unified instrument enum for static dispatch.
///
/// Each variant carries everything its pricing formula needs. With the
/// `serde` feature the enum is internally tagged by `instrument`
/// (`forward`, `quanto-forward`, `digital`, `european`, `knockout-forward`).
///
/// # Variants
/// - `Forward`: Plain forward price
/// - `QuantoForward`: Quanto-adjusted forward price
/// - `Digital`: Cash-or-nothing European digital option
/// - `European`: European vanilla option
/// - `KnockoutForward`: Forward extinguished at a barrier before expiry
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "instrument", rename_all = "kebab-case", deny_unknown_fields)
)]
pub enum Instrument {
    /// Forward contract
    Forward {
        /// Current asset price
        spot: f64,
        /// Time to delivery in years
        time_to_exp: f64,
        /// Continuously-compounded interest rate
        int_rate: f64,
        /// Continuously-compounded dividend yield
        #[cfg_attr(feature = "serde", serde(default))]
        div_yield: f64,
    },

    /// Quanto-adjusted forward
    QuantoForward {
        /// Current asset price
        spot: f64,
        /// Time to delivery in years
        time_to_exp: f64,
        /// Continuously-compounded interest rate
        int_rate: f64,
        /// Continuously-compounded dividend yield
        #[cfg_attr(feature = "serde", serde(default))]
        div_yield: f64,
        /// Asset volatility
        asset_vol: f64,
        /// FX volatility
        fx_vol: f64,
        /// Correlation between asset and FX returns
        corr: f64,
    },

    /// European cash-or-nothing digital option
    Digital {
        /// Call or put
        payoff_type: PayoffType,
        /// Current asset price
        spot: f64,
        /// Strike price
        strike: f64,
        /// Time to expiration in years
        time_to_exp: f64,
        /// Continuously-compounded interest rate
        int_rate: f64,
        /// Continuously-compounded dividend yield
        #[cfg_attr(feature = "serde", serde(default))]
        div_yield: f64,
        /// Lognormal volatility
        volatility: f64,
    },

    /// European vanilla option
    European {
        /// Call or put
        payoff_type: PayoffType,
        /// Current asset price
        spot: f64,
        /// Strike price
        strike: f64,
        /// Time to expiration in years
        time_to_exp: f64,
        /// Continuously-compounded interest rate
        int_rate: f64,
        /// Continuously-compounded dividend yield
        #[cfg_attr(feature = "serde", serde(default))]
        div_yield: f64,
        /// Lognormal volatility
        volatility: f64,
    },

    /// Knockout forward
    KnockoutForward {
        /// Current asset price
        spot: f64,
        /// Forward delivery price
        strike: f64,
        /// Knockout barrier level
        ko_level: f64,
        /// Time to expiration of the forward in years
        time_to_exp: f64,
        /// Time to the knockout observation in years
        time_to_ko: f64,
        /// Continuously-compounded interest rate
        int_rate: f64,
        /// Continuously-compounded dividend yield
        #[cfg_attr(feature = "serde", serde(default))]
        div_yield: f64,
        /// Lognormal volatility
        vol: f64,
    },
}

impl Instrument {
    /// Returns the instrument kind as used in the serialised tag.
    pub fn name(&self) -> &'static str {
        match self {
            Instrument::Forward { .. } => "forward",
            Instrument::QuantoForward { .. } => "quanto-forward",
            Instrument::Digital { .. } => "digital",
            Instrument::European { .. } => "european",
            Instrument::KnockoutForward { .. } => "knockout-forward",
        }
    }

    /// Returns the time to expiration in years.
    pub fn expiry(&self) -> f64 {
        match *self {
            Instrument::Forward { time_to_exp, .. }
            | Instrument::QuantoForward { time_to_exp, .. }
            | Instrument::Digital { time_to_exp, .. }
            | Instrument::European { time_to_exp, .. }
            | Instrument::KnockoutForward { time_to_exp, .. } => time_to_exp,
        }
    }

    /// Prices the instrument with the given pricer.
    ///
    /// Static dispatch to the matching closed-form formula.
    pub fn price<N: NormalCdf>(&self, pricer: &BlackScholesPricer<N>) -> Result<f64, AnalyticalError> {
        match *self {
            Instrument::Forward {
                spot,
                time_to_exp,
                int_rate,
                div_yield,
            } => pricer.fwd_price(spot, time_to_exp, int_rate, div_yield),
            Instrument::QuantoForward {
                spot,
                time_to_exp,
                int_rate,
                div_yield,
                asset_vol,
                fx_vol,
                corr,
            } => pricer.quanto_fwd_price(
                spot,
                time_to_exp,
                int_rate,
                div_yield,
                asset_vol,
                fx_vol,
                corr,
            ),
            Instrument::Digital {
                payoff_type,
                spot,
                strike,
                time_to_exp,
                int_rate,
                div_yield,
                volatility,
            } => pricer.digital_option_bs(
                payoff_type,
                spot,
                strike,
                time_to_exp,
                int_rate,
                div_yield,
                volatility,
            ),
            Instrument::European {
                payoff_type,
                spot,
                strike,
                time_to_exp,
                int_rate,
                div_yield,
                volatility,
            } => pricer.european_option_bs(
                payoff_type,
                spot,
                strike,
                time_to_exp,
                int_rate,
                div_yield,
                volatility,
            ),
            Instrument::KnockoutForward {
                spot,
                strike,
                ko_level,
                time_to_exp,
                time_to_ko,
                int_rate,
                div_yield,
                vol,
            } => pricer.knockout_fwd(
                spot,
                strike,
                ko_level,
                time_to_exp,
                time_to_ko,
                int_rate,
                div_yield,
                vol,
            ),
        }
    }
}
