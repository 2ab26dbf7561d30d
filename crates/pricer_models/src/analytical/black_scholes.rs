//! Black-Scholes pricing of European call and put options.
//!
//! The formula is written in forward terms so the dividend yield is folded
//! into the forward instead of appearing as a separate discount factor.
//!
//! ## Mathematical Formulas
//!
//! **Price**: V = φ·e^(-rT)·(F·N(φd₁) − K·N(φd₂))
//!
//! Where:
//! - F = S·e^((r − q)T)
//! - d₁ = ln(F/K)/(σ√T) + σ√T/2
//! - d₂ = d₁ − σ√T
//! - φ = +1 for calls, −1 for puts

use pricer_core::math::NormalCdf;

use super::error::{ensure_non_negative, AnalyticalError};
use super::pricer::{d1_d2, default_pricer, deterministic_vanilla, BlackScholesPricer, Regime};
use crate::instruments::PayoffType;

impl<N: NormalCdf> BlackScholesPricer<N> {
    /// Price of a European option in the Black-Scholes model.
    ///
    /// # Arguments
    /// * `payoff_type` - Call or put
    /// * `spot` - Current asset price (S ≥ 0)
    /// * `strike` - Strike price (K ≥ 0)
    /// * `time_to_exp` - Time to expiration in years (T ≥ 0)
    /// * `int_rate` - Continuously-compounded interest rate (r ≥ 0)
    /// * `div_yield` - Continuously-compounded dividend yield (q ≥ 0)
    /// * `volatility` - Lognormal volatility (σ ≥ 0)
    ///
    /// # Errors
    /// `InvalidArgument` if `strike` or `volatility` is negative, for any
    /// forward-price precondition, or when `σ√T = 0` under
    /// [`DegenerateVolPolicy::Reject`](crate::config::DegenerateVolPolicy::Reject).
    #[allow(clippy::too_many_arguments)]
    pub fn european_option_bs(
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
        ensure_non_negative("volatility", volatility)?;

        let phi = payoff_type.phi();
        let fwd = self.fwd_price(spot, time_to_exp, int_rate, div_yield)?;
        let sig_t = volatility * time_to_exp.sqrt();
        let df = (-int_rate * time_to_exp).exp();

        match self.regime(fwd, strike, sig_t)? {
            Regime::Deterministic => Ok(df * deterministic_vanilla(phi, fwd, strike)),
            Regime::Lognormal => {
                let (d1, d2) = d1_d2(fwd, strike, sig_t);
                let price = fwd * self.cdf(phi * d1) - strike * self.cdf(phi * d2);
                Ok(phi * df * price)
            }
        }
    }
}

/// Price of a European option in the Black-Scholes model.
///
/// `payoff_type` is the integer selector `1` (call) or `-1` (put); any other
/// value is rejected with `InvalidArgument`.
///
/// # Examples
/// ```
/// use pricer_models::analytical::european_option_bs;
///
/// let call = european_option_bs(1, 100.0, 100.0, 1.0, 0.05, 0.0, 0.2).unwrap();
/// assert!((call - 10.4506).abs() < 1e-4);
///
/// assert!(european_option_bs(0, 100.0, 100.0, 1.0, 0.05, 0.0, 0.2).is_err());
/// ```
pub fn european_option_bs(
    payoff_type: i32,
    spot: f64,
    strike: f64,
    time_to_exp: f64,
    int_rate: f64,
    div_yield: f64,
    volatility: f64,
) -> Result<f64, AnalyticalError> {
    let payoff_type = PayoffType::try_from(payoff_type)?;
    default_pricer().european_option_bs(
        payoff_type,
        spot,
        strike,
        time_to_exp,
        int_rate,
        div_yield,
        volatility,
    )
}
