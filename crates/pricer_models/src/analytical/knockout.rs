//! Knockout forward: a forward contract extinguished if the asset reaches a
//! barrier by an observation date before expiry.
//!
//! The contract is replicated at the knockout date `T_ko` by a call struck at
//! the barrier and a digital on the barrier, both rolled to expiry over
//! `Δt = T − T_ko`:
//!
//! **Price**: V = e^(−qΔt)·C(K_o, T_ko) + e^(−rΔt)·(K_o·e^((r−q)Δt) − K)·D(K_o, T_ko)

use pricer_core::math::NormalCdf;

use super::error::{ensure, ensure_non_negative, AnalyticalError};
use super::pricer::{default_pricer, BlackScholesPricer};
use crate::instruments::PayoffType;

impl<N: NormalCdf> BlackScholesPricer<N> {
    /// Price of a knockout forward.
    ///
    /// # Arguments
    /// * `spot` - Current asset price
    /// * `strike` - Forward delivery price (K ≥ 0)
    /// * `ko_level` - Knockout barrier (K_o ≥ 0)
    /// * `time_to_exp` - Time to expiration of the forward (T ≥ 0)
    /// * `time_to_ko` - Time to the knockout observation (0 ≤ T_ko ≤ T)
    /// * `int_rate` - Continuously-compounded interest rate (r ≥ 0)
    /// * `div_yield` - Continuously-compounded dividend yield (q ≥ 0)
    /// * `vol` - Lognormal volatility (σ ≥ 0)
    ///
    /// # Errors
    /// `InvalidArgument` for the first violated precondition, or any error
    /// raised by the component call and digital prices.
    #[allow(clippy::too_many_arguments)]
    pub fn knockout_fwd(
        &self,
        spot: f64,
        strike: f64,
        ko_level: f64,
        time_to_exp: f64,
        time_to_ko: f64,
        int_rate: f64,
        div_yield: f64,
        vol: f64,
    ) -> Result<f64, AnalyticalError> {
        ensure_non_negative("strike", strike)?;
        ensure_non_negative("vol", vol)?;
        ensure_non_negative("ko_level", ko_level)?;
        // A NaN expiry fails the ordering test below; name the real culprit.
        if time_to_exp.is_nan() {
            return Err(AnalyticalError::non_negative("time_to_exp", time_to_exp));
        }
        ensure(
            time_to_ko <= time_to_exp,
            "time_to_ko",
            "no later than time_to_exp",
            time_to_ko,
        )?;
        ensure_non_negative("time_to_exp", time_to_exp)?;
        ensure_non_negative("int_rate", int_rate)?;
        ensure_non_negative("div_yield", div_yield)?;
        ensure_non_negative("time_to_ko", time_to_ko)?;

        let call = self.european_option_bs(
            PayoffType::Call,
            spot,
            ko_level,
            time_to_ko,
            int_rate,
            div_yield,
            vol,
        )?;
        let digital = self.digital_option_bs(
            PayoffType::Call,
            spot,
            ko_level,
            time_to_ko,
            int_rate,
            div_yield,
            vol,
        )?;

        let dt = time_to_exp - time_to_ko;
        let carried_call = (-div_yield * dt).exp() * call;
        let carried_forward =
            (-int_rate * dt).exp() * (ko_level * ((int_rate - div_yield) * dt).exp() - strike);

        Ok(carried_call + carried_forward * digital)
    }
}

/// Price of a knockout forward with the default configuration.
///
/// # Examples
/// ```
/// use pricer_models::analytical::knockout_fwd;
///
/// let price = knockout_fwd(100.0, 95.0, 120.0, 1.0, 0.5, 0.03, 0.01, 0.25).unwrap();
/// assert!((price - 5.3213).abs() < 1e-4);
///
/// // Knockout observation after expiry is rejected
/// assert!(knockout_fwd(100.0, 95.0, 120.0, 1.0, 2.0, 0.03, 0.01, 0.25).is_err());
/// ```
#[allow(clippy::too_many_arguments)]
pub fn knockout_fwd(
    spot: f64,
    strike: f64,
    ko_level: f64,
    time_to_exp: f64,
    time_to_ko: f64,
    int_rate: f64,
    div_yield: f64,
    vol: f64,
) -> Result<f64, AnalyticalError> {
    default_pricer().knockout_fwd(
        spot,
        strike,
        ko_level,
        time_to_exp,
        time_to_ko,
        int_rate,
        div_yield,
        vol,
    )
}
