//! Cash-or-nothing European digital options in the Black-Scholes model.
//!
//! **Price**: V = e^(-rT)·N(φ·d₂), paying one unit of cash when the asset
//! finishes above (call, φ = +1) or below (put, φ = −1) the strike.

use pricer_core::math::NormalCdf;

use super::error::{ensure_non_negative, AnalyticalError};
use super::pricer::{d1_d2, default_pricer, deterministic_digital, BlackScholesPricer, Regime};
use crate::instruments::PayoffType;

impl<N: NormalCdf> BlackScholesPricer<N> {
    /// Price of a European cash-or-nothing digital option.
    ///
    /// Call and put prices always sum to the discount factor e^(-rT).
    ///
    /// # Errors
    /// `InvalidArgument` if `strike`, `div_yield` or `volatility` is negative,
    /// for any forward-price precondition, or when `σ√T = 0` under
    /// [`DegenerateVolPolicy::Reject`](crate::config::DegenerateVolPolicy::Reject).
    #[allow(clippy::too_many_arguments)]
    pub fn digital_option_bs(
        &self,
        payoff_type: PayoffType,
        spot: f64,
        strike: f64,
        time_to_exp: f64,
        int_rate: f64,
        div_yield: f64,
        volatility: f64,
    ) -> Result<f64, AnalyticalError> {
        ensure_non_negative("strike", strike)?;
        ensure_non_negative("div_yield", div_yield)?;
        ensure_non_negative("volatility", volatility)?;

        let phi = payoff_type.phi();
        let fwd = self.fwd_price(spot, time_to_exp, int_rate, div_yield)?;
        let sig_t = volatility * time_to_exp.sqrt();
        let df = (-int_rate * time_to_exp).exp();

        match self.regime(fwd, strike, sig_t)? {
            Regime::Deterministic => Ok(df * deterministic_digital(phi, fwd, strike)),
            Regime::Lognormal => {
                let (_, d2) = d1_d2(fwd, strike, sig_t);
                Ok(df * self.cdf(phi * d2))
            }
        }
    }
}

/// Price of a European cash-or-nothing digital option.
///
/// `payoff_type` is `1` for a call-digital, `-1` for a put-digital.
///
/// # Examples
/// ```
/// use pricer_models::analytical::digital_option_bs;
///
/// let call = digital_option_bs(1, 100.0, 100.0, 1.0, 0.05, 0.0, 0.2).unwrap();
/// let put = digital_option_bs(-1, 100.0, 100.0, 1.0, 0.05, 0.0, 0.2).unwrap();
/// assert!((call + put - (-0.05_f64).exp()).abs() < 1e-12);
/// ```
pub fn digital_option_bs(
    payoff_type: i32,
    spot: f64,
    strike: f64,
    time_to_exp: f64,
    int_rate: f64,
    div_yield: f64,
    volatility: f64,
) -> Result<f64, AnalyticalError> {
    let payoff_type = PayoffType::try_from(payoff_type)?;
    default_pricer().digital_option_bs(
        payoff_type,
        spot,
        strike,
        time_to_exp,
        int_rate,
        div_yield,
        volatility,
    )
}
