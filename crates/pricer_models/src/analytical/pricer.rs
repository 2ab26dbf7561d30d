//! The Black-Scholes pricer handle shared by all closed-form formulas.
//!
//! `BlackScholesPricer` carries the pricing policy and the normal CDF used by
//! the formulas. It holds no market state: every pricing method is a pure
//! function of its arguments, so one pricer can be shared freely between
//! threads.

use pricer_core::math::{NormalCdf, StandardNormal};
use tracing::debug;

use super::error::AnalyticalError;
use crate::config::{DegenerateVolPolicy, PricingConfig};

/// Closed-form pricer under lognormal (Black-Scholes) dynamics.
///
/// # Type Parameters
/// * `N` - Standard normal CDF implementation (defaults to [`StandardNormal`])
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholesPricer;
/// use pricer_models::config::PricingConfig;
/// use pricer_models::instruments::PayoffType;
///
/// let pricer = BlackScholesPricer::new(PricingConfig::default());
/// let call = pricer
///     .european_option_bs(PayoffType::Call, 100.0, 100.0, 1.0, 0.05, 0.0, 0.2)
///     .unwrap();
/// assert!((call - 10.4506).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlackScholesPricer<N = StandardNormal> {
    config: PricingConfig,
    normal: N,
}

impl BlackScholesPricer<StandardNormal> {
    /// Creates a pricer using the `libm`-backed standard normal CDF.
    pub fn new(config: PricingConfig) -> Self {
        Self {
            config,
            normal: StandardNormal,
        }
    }
}

impl<N> BlackScholesPricer<N> {
    /// Creates a pricer with an injected normal CDF implementation.
    pub fn with_cdf(config: PricingConfig, normal: N) -> Self {
        Self { config, normal }
    }

    /// Returns the pricing configuration.
    #[inline]
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Returns the normal CDF implementation.
    #[inline]
    pub fn normal(&self) -> &N {
        &self.normal
    }
}

/// Evaluation regime of a lognormal payoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Regime {
    /// `σ√T > 0` and both forward and strike positive: closed form applies.
    Lognormal,
    /// Terminal value is known (or `ln(F/K)` is infinite): use the limit.
    Deterministic,
}

impl<N: NormalCdf> BlackScholesPricer<N> {
    #[inline]
    pub(crate) fn cdf(&self, x: f64) -> f64 {
        self.normal.cdf(x)
    }

    /// Selects between the closed form and its deterministic limit.
    ///
    /// A zero total volatility is subject to the configured
    /// [`DegenerateVolPolicy`]; a zero forward or strike always takes the
    /// limit, which is exact there.
    pub(crate) fn regime(&self, fwd: f64, strike: f64, sig_t: f64) -> Result<Regime, AnalyticalError> {
        if sig_t > 0.0 {
            if fwd > 0.0 && strike > 0.0 {
                return Ok(Regime::Lognormal);
            }
            return Ok(Regime::Deterministic);
        }

        match self.config.degenerate_vol() {
            DegenerateVolPolicy::Intrinsic => {
                debug!(fwd, strike, "zero total volatility, pricing deterministic limit");
                Ok(Regime::Deterministic)
            }
            DegenerateVolPolicy::Reject => Err(AnalyticalError::invalid(
                "volatility * sqrt(time)",
                "positive",
                sig_t,
            )),
        }
    }
}

/// d₁ = ln(F/K)/(σ√T) + ½σ√T and d₂ = d₁ − σ√T.
#[inline]
pub(crate) fn d1_d2(fwd: f64, strike: f64, sig_t: f64) -> (f64, f64) {
    let d1 = (fwd / strike).ln() / sig_t + 0.5 * sig_t;
    (d1, d1 - sig_t)
}

/// Undiscounted vanilla payoff on a known terminal forward: max(φ(F − K), 0).
#[inline]
pub(crate) fn deterministic_vanilla(phi: f64, fwd: f64, strike: f64) -> f64 {
    (phi * (fwd - strike)).max(0.0)
}

/// Undiscounted digital payoff on a known terminal forward.
///
/// At the money this is ½, the limit of Φ(−½σ√T) as σ√T → 0. A zero
/// forward is absorbed at zero, so at a zero strike neither side pays.
#[inline]
pub(crate) fn deterministic_digital(phi: f64, fwd: f64, strike: f64) -> f64 {
    let moneyness = phi * (fwd - strike);
    if moneyness > 0.0 {
        1.0
    } else if moneyness < 0.0 || fwd == 0.0 {
        0.0
    } else {
        0.5
    }
}

/// The pricer the free-function entry points delegate to.
#[inline]
pub(crate) fn default_pricer() -> BlackScholesPricer {
    BlackScholesPricer::new(PricingConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regime_lognormal() {
        let pricer = default_pricer();
        assert_eq!(pricer.regime(100.0, 90.0, 0.2), Ok(Regime::Lognormal));
    }

    #[test]
    fn test_regime_zero_forward_or_strike() {
        let pricer = default_pricer();
        assert_eq!(pricer.regime(0.0, 90.0, 0.2), Ok(Regime::Deterministic));
        assert_eq!(pricer.regime(100.0, 0.0, 0.2), Ok(Regime::Deterministic));
    }

    #[test]
    fn test_regime_zero_total_vol_by_policy() {
        let intrinsic = default_pricer();
        assert_eq!(intrinsic.regime(100.0, 90.0, 0.0), Ok(Regime::Deterministic));

        let reject = BlackScholesPricer::new(
            PricingConfig::builder()
                .degenerate_vol(DegenerateVolPolicy::Reject)
                .build(),
        );
        let err = reject.regime(100.0, 90.0, 0.0).unwrap_err();
        assert_eq!(err.parameter(), "volatility * sqrt(time)");

        // Zero strike is exact even under the rejecting policy
        assert_eq!(reject.regime(100.0, 0.0, 0.2), Ok(Regime::Deterministic));
    }

    #[test]
    fn test_d1_d2_at_the_money_forward() {
        let (d1, d2) = d1_d2(100.0, 100.0, 0.2);
        assert!((d1 - 0.1).abs() < 1e-15);
        assert!((d2 + 0.1).abs() < 1e-15);
    }

    #[test]
    fn test_deterministic_payoffs() {
        assert_eq!(deterministic_vanilla(1.0, 110.0, 100.0), 10.0);
        assert_eq!(deterministic_vanilla(-1.0, 110.0, 100.0), 0.0);
        assert_eq!(deterministic_vanilla(-1.0, 90.0, 100.0), 10.0);

        assert_eq!(deterministic_digital(1.0, 110.0, 100.0), 1.0);
        assert_eq!(deterministic_digital(-1.0, 110.0, 100.0), 0.0);
        assert_eq!(deterministic_digital(1.0, 100.0, 100.0), 0.5);
        assert_eq!(deterministic_digital(-1.0, 100.0, 100.0), 0.5);

        // Absorbed at zero
        assert_eq!(deterministic_digital(1.0, 0.0, 0.0), 0.0);
        assert_eq!(deterministic_digital(-1.0, 0.0, 0.0), 0.0);
        assert_eq!(deterministic_digital(-1.0, 0.0, 50.0), 1.0);
    }

    #[test]
    fn test_with_cdf_injection() {
        #[derive(Debug, Clone, Copy)]
        struct Half;
        impl NormalCdf for Half {
            fn cdf(&self, _x: f64) -> f64 {
                0.5
            }
        }

        let pricer = BlackScholesPricer::with_cdf(PricingConfig::default(), Half);
        assert_eq!(pricer.cdf(3.0), 0.5);
        assert!(pricer.config().enforce_correlation_bounds());
    }
}
