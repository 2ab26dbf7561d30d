//! Forward prices under continuous compounding.
//!
//! ## Formulas
//!
//! **Forward**: F = S·e^((r − q)T)
//! **Quanto forward**: F_Q = F·e^(ρ·σ_S·σ_X·T)

use super::error::{ensure, ensure_non_negative, AnalyticalError};
use super::pricer::{default_pricer, BlackScholesPricer};

impl<N> BlackScholesPricer<N> {
    /// Risk-neutral forward price of an asset paying a continuous yield.
    ///
    /// # Arguments
    /// * `spot` - Current asset price (S ≥ 0)
    /// * `time_to_exp` - Time to delivery in years (T ≥ 0)
    /// * `int_rate` - Continuously-compounded interest rate (r ≥ 0)
    /// * `div_yield` - Continuously-compounded dividend yield (q ≥ 0)
    ///
    /// # Errors
    /// `InvalidArgument` naming the first negative (or NaN) parameter, checked
    /// in argument order.
    pub fn fwd_price(
        &self,
        spot: f64,
        time_to_exp: f64,
        int_rate: f64,
        div_yield: f64,
    ) -> Result<f64, AnalyticalError> {
        ensure_non_negative("spot", spot)?;
        ensure_non_negative("time_to_exp", time_to_exp)?;
        ensure_non_negative("int_rate", int_rate)?;
        ensure_non_negative("div_yield", div_yield)?;

        Ok(spot * ((int_rate - div_yield) * time_to_exp).exp())
    }

    /// Quanto-adjusted forward price.
    ///
    /// Scales the plain forward by the covariance drift correction between
    /// the asset and the exchange rate, e^(ρ·σ_S·σ_X·T).
    ///
    /// # Errors
    /// `InvalidArgument` if `asset_vol` or `fx_vol` is negative, if `corr`
    /// lies outside `[-1, 1]` while the configuration enforces correlation
    /// bounds, or for any [`fwd_price`](Self::fwd_price) precondition.
    #[allow(clippy::too_many_arguments)]
    pub fn quanto_fwd_price(
        &self,
        spot: f64,
        time_to_exp: f64,
        int_rate: f64,
        div_yield: f64,
        asset_vol: f64,
        fx_vol: f64,
        corr: f64,
    ) -> Result<f64, AnalyticalError> {
        ensure_non_negative("asset_vol", asset_vol)?;
        ensure_non_negative("fx_vol", fx_vol)?;
        if self.config().enforce_correlation_bounds() {
            ensure((-1.0..=1.0).contains(&corr), "corr", "within [-1, 1]", corr)?;
        }

        let fwd = self.fwd_price(spot, time_to_exp, int_rate, div_yield)?;
        Ok(fwd * (corr * asset_vol * fx_vol * time_to_exp).exp())
    }
}

/// Forward price of an asset: `spot · exp((int_rate − div_yield) · time_to_exp)`.
///
/// # Examples
/// ```
/// use pricer_models::analytical::fwd_price;
///
/// let fwd = fwd_price(100.0, 1.0, 0.05, 0.02).unwrap();
/// assert!((fwd - 103.0455).abs() < 1e-4);
///
/// assert!(fwd_price(-1.0, 1.0, 0.01, 0.0).is_err());
/// ```
pub fn fwd_price(
    spot: f64,
    time_to_exp: f64,
    int_rate: f64,
    div_yield: f64,
) -> Result<f64, AnalyticalError> {
    default_pricer().fwd_price(spot, time_to_exp, int_rate, div_yield)
}

/// Quanto-adjusted forward price: `fwd_price(..) · exp(corr · asset_vol · fx_vol · time_to_exp)`.
///
/// Uses the default configuration, which rejects `corr` outside `[-1, 1]`.
///
/// # Examples
/// ```
/// use pricer_models::analytical::{fwd_price, quanto_fwd_price};
///
/// let plain = fwd_price(100.0, 2.0, 0.05, 0.02).unwrap();
/// let quanto = quanto_fwd_price(100.0, 2.0, 0.05, 0.02, 0.2, 0.1, 0.0).unwrap();
/// assert_eq!(plain, quanto);
/// ```
pub fn quanto_fwd_price(
    spot: f64,
    time_to_exp: f64,
    int_rate: f64,
    div_yield: f64,
    asset_vol: f64,
    fx_vol: f64,
    corr: f64,
) -> Result<f64, AnalyticalError> {
    default_pricer().quanto_fwd_price(spot, time_to_exp, int_rate, div_yield, asset_vol, fx_vol, corr)
}
