//! Cross-formula properties of the analytical pricers.
//!
//! # Test Categories
//!
//! 1. **Forwards**: boundary values and monotonicity in rates
//! 2. **Parity**: put-call parity for vanillas and digitals
//! 3. **Composition**: knockout forward against its building blocks
//! 4. **Rejection**: invalid inputs raise `InvalidArgument`
//! 5. **Property-based**: parity and bounds over random market inputs

use approx::{assert_abs_diff_eq, assert_relative_eq};
use pricer_core::math::NormalCdf;
use pricer_core::types::PricingError;
use pricer_models::analytical::{
    digital_option_bs, european_option_bs, fwd_price, knockout_fwd, quanto_fwd_price,
    AnalyticalError, BlackScholesPricer,
};
use pricer_models::config::{DegenerateVolPolicy, PricingConfig};
use pricer_models::instruments::PayoffType;
use proptest::prelude::*;

// ============================================================================
// Forward Tests
// ============================================================================

#[test]
fn test_forward_at_zero_time_is_spot() {
    for spot in [0.0, 1.0, 42.5, 1.0e6] {
        assert_eq!(fwd_price(spot, 0.0, 0.07, 0.03).unwrap(), spot);
    }
}

#[test]
fn test_forward_reference_value() {
    let fwd = fwd_price(100.0, 1.0, 0.05, 0.02).unwrap();
    assert_relative_eq!(fwd, 103.0455, epsilon = 1e-4);
    assert_relative_eq!(fwd, 103.0454533953517, epsilon = 1e-10);
}

#[test]
fn test_forward_monotone_in_rates() {
    let base = fwd_price(100.0, 2.0, 0.03, 0.01).unwrap();
    assert!(fwd_price(100.0, 2.0, 0.04, 0.01).unwrap() > base);
    assert!(fwd_price(100.0, 2.0, 0.03, 0.02).unwrap() < base);
}

#[test]
fn test_quanto_with_zero_correlation_is_plain_forward() {
    let quanto = quanto_fwd_price(100.0, 1.5, 0.04, 0.01, 0.3, 0.12, 0.0).unwrap();
    assert_eq!(quanto, fwd_price(100.0, 1.5, 0.04, 0.01).unwrap());
}

#[test]
fn test_quanto_sign_follows_correlation() {
    let fwd = fwd_price(100.0, 1.0, 0.04, 0.01).unwrap();
    assert!(quanto_fwd_price(100.0, 1.0, 0.04, 0.01, 0.2, 0.1, 0.5).unwrap() > fwd);
    assert!(quanto_fwd_price(100.0, 1.0, 0.04, 0.01, 0.2, 0.1, -0.5).unwrap() < fwd);
}

// ============================================================================
// Parity Tests
// ============================================================================

#[test]
fn test_vanilla_reference_value() {
    let call = european_option_bs(1, 100.0, 100.0, 1.0, 0.05, 0.0, 0.2).unwrap();
    assert_relative_eq!(call, 10.4506, epsilon = 1e-4);
}

#[test]
fn test_put_call_parity_grid() {
    for (s, k, t, r, q, v) in [
        (100.0_f64, 100.0, 1.0_f64, 0.05_f64, 0.0, 0.2),
        (50.0, 80.0, 0.25, 0.01, 0.02, 0.6),
        (120.0, 90.0, 5.0, 0.03, 0.0, 0.15),
    ] {
        let call = european_option_bs(1, s, k, t, r, q, v).unwrap();
        let put = european_option_bs(-1, s, k, t, r, q, v).unwrap();
        let df = (-r * t).exp();
        let expected = df * (fwd_price(s, t, r, q).unwrap() - k);
        assert_relative_eq!(call - put, expected, max_relative = 1e-9);
    }
}

#[test]
fn test_digital_parity() {
    let call = digital_option_bs(1, 95.0, 100.0, 2.0, 0.03, 0.01, 0.35).unwrap();
    let put = digital_option_bs(-1, 95.0, 100.0, 2.0, 0.03, 0.01, 0.35).unwrap();
    assert_abs_diff_eq!(call + put, (-0.06_f64).exp(), epsilon = 1e-12);
}

#[test]
fn test_call_spread_approaches_digital() {
    // (C(K − h) − C(K + h)) / 2h → D(K) as h → 0
    let (s, k, t, r, q, v) = (100.0, 105.0_f64, 1.0, 0.02, 0.01, 0.25);
    let h = 1e-3_f64;
    let spread = (european_option_bs(1, s, k - h, t, r, q, v).unwrap()
        - european_option_bs(1, s, k + h, t, r, q, v).unwrap())
        / (2.0 * h);
    let digital = digital_option_bs(1, s, k, t, r, q, v).unwrap();
    assert_abs_diff_eq!(spread, digital, epsilon = 1e-6);
}

// ============================================================================
// Knockout Composition Tests
// ============================================================================

#[test]
fn test_knockout_at_expiry_decomposes() {
    let (s, k, ko, t, r, q, v) = (100.0, 90.0_f64, 110.0_f64, 0.75, 0.02, 0.0, 0.3);
    let price = knockout_fwd(s, k, ko, t, t, r, q, v).unwrap();
    let call = european_option_bs(1, s, ko, t, r, q, v).unwrap();
    let digital = digital_option_bs(1, s, ko, t, r, q, v).unwrap();
    assert_relative_eq!(price, call + (ko - k) * digital, epsilon = 1e-12);
}

#[test]
fn test_knockout_matches_pricer_method() {
    let pricer = BlackScholesPricer::new(PricingConfig::default());
    let free = knockout_fwd(100.0, 95.0, 120.0, 1.0, 0.5, 0.03, 0.01, 0.25).unwrap();
    let method = pricer
        .knockout_fwd(100.0, 95.0, 120.0, 1.0, 0.5, 0.03, 0.01, 0.25)
        .unwrap();
    assert_eq!(free, method);
}

// ============================================================================
// Rejection Tests
// ============================================================================

#[test]
fn test_invalid_inputs_are_rejected() {
    let err = fwd_price(-1.0, 1.0, 0.01, 0.0).unwrap_err();
    assert!(matches!(
        err,
        AnalyticalError::InvalidArgument {
            parameter: "spot",
            ..
        }
    ));

    assert!(european_option_bs(0, 100.0, 100.0, 1.0, 0.05, 0.0, 0.2).is_err());
    assert!(knockout_fwd(100.0, 95.0, 120.0, 1.0, 2.0, 0.03, 0.01, 0.25).is_err());
}

#[test]
fn test_nan_inputs_are_rejected() {
    assert!(fwd_price(f64::NAN, 1.0, 0.01, 0.0).is_err());
    assert!(european_option_bs(1, 100.0, 100.0, 1.0, 0.05, 0.0, f64::NAN).is_err());
    assert!(quanto_fwd_price(100.0, 1.0, 0.01, 0.0, 0.2, 0.1, f64::NAN).is_err());
}

#[test]
fn test_error_converts_to_pricing_error() {
    let err: PricingError = fwd_price(1.0, -1.0, 0.01, 0.0).unwrap_err().into();
    let PricingError::InvalidInput(message) = err;
    assert!(message.contains("time_to_exp"));
}

#[test]
fn test_relaxed_correlation_bounds() {
    let pricer = BlackScholesPricer::new(
        PricingConfig::builder()
            .enforce_correlation_bounds(false)
            .build(),
    );
    let quanto = pricer
        .quanto_fwd_price(100.0, 1.0, 0.0, 0.0, 0.2, 0.1, 2.0)
        .unwrap();
    assert_relative_eq!(quanto, 100.0 * 0.04_f64.exp(), epsilon = 1e-12);
}

#[test]
fn test_reject_policy_covers_every_option_formula() {
    let pricer = BlackScholesPricer::new(
        PricingConfig::builder()
            .degenerate_vol(DegenerateVolPolicy::Reject)
            .build(),
    );
    for payoff in [PayoffType::Call, PayoffType::Put] {
        let err = pricer
            .digital_option_bs(payoff, 100.0, 100.0, 0.0, 0.05, 0.0, 0.2)
            .unwrap_err();
        assert_eq!(err.parameter(), "volatility * sqrt(time)");
        let err = pricer
            .european_option_bs(payoff, 100.0, 100.0, 1.0, 0.05, 0.0, 0.0)
            .unwrap_err();
        assert_eq!(err.parameter(), "volatility * sqrt(time)");
    }
    assert!(pricer
        .knockout_fwd(100.0, 95.0, 120.0, 1.0, 0.0, 0.03, 0.01, 0.25)
        .is_err());
}

// ============================================================================
// Injected CDF Tests
// ============================================================================

/// Tanh-based approximation of Φ, accurate to a few parts in 1e4.
struct TanhNormal;

impl NormalCdf for TanhNormal {
    fn cdf(&self, x: f64) -> f64 {
        0.5 * (1.0 + (0.7978845608 * (x + 0.044715 * x * x * x)).tanh())
    }
}

#[test]
fn test_injected_cdf_is_used() {
    let pricer = BlackScholesPricer::with_cdf(PricingConfig::default(), TanhNormal);
    let approx_call = pricer
        .european_option_bs(PayoffType::Call, 100.0, 100.0, 1.0, 0.05, 0.0, 0.2)
        .unwrap();
    let exact_call = european_option_bs(1, 100.0, 100.0, 1.0, 0.05, 0.0, 0.2).unwrap();
    assert_ne!(approx_call, exact_call);
    assert_abs_diff_eq!(approx_call, exact_call, epsilon = 0.05);
}

// ============================================================================
// Property-Based Tests
// ============================================================================

proptest! {
    #[test]
    fn prop_put_call_parity(
        spot in 1.0f64..500.0,
        strike in 1.0f64..500.0,
        time in 0.01f64..10.0,
        rate in 0.0f64..0.15,
        div in 0.0f64..0.1,
        vol in 0.01f64..1.5,
    ) {
        let call = european_option_bs(1, spot, strike, time, rate, div, vol).unwrap();
        let put = european_option_bs(-1, spot, strike, time, rate, div, vol).unwrap();
        let df = (-rate * time).exp();
        let fwd = fwd_price(spot, time, rate, div).unwrap();
        let scale = 1.0 + fwd + strike;
        prop_assert!((call - put - df * (fwd - strike)).abs() <= 1e-9 * scale);
    }

    #[test]
    fn prop_option_prices_bounded(
        spot in 0.0f64..500.0,
        strike in 0.0f64..500.0,
        time in 0.0f64..10.0,
        rate in 0.0f64..0.15,
        div in 0.0f64..0.1,
        vol in 0.0f64..1.5,
    ) {
        let df = (-rate * time).exp();
        let tol = 1e-12 * (1.0 + spot + strike);
        for payoff in [1, -1] {
            let digital = digital_option_bs(payoff, spot, strike, time, rate, div, vol).unwrap();
            prop_assert!(digital >= 0.0);
            prop_assert!(digital <= df);

            let vanilla = european_option_bs(payoff, spot, strike, time, rate, div, vol).unwrap();
            prop_assert!(vanilla >= -tol);
        }
    }

    #[test]
    fn prop_digital_parity(
        spot in 1.0f64..500.0,
        strike in 1.0f64..500.0,
        time in 0.01f64..10.0,
        rate in 0.0f64..0.15,
        vol in 0.01f64..1.5,
    ) {
        let call = digital_option_bs(1, spot, strike, time, rate, 0.0, vol).unwrap();
        let put = digital_option_bs(-1, spot, strike, time, rate, 0.0, vol).unwrap();
        prop_assert!((call + put - (-rate * time).exp()).abs() < 1e-12);
    }

    #[test]
    fn prop_call_below_discounted_forward(
        spot in 1.0f64..500.0,
        strike in 1.0f64..500.0,
        time in 0.01f64..10.0,
        rate in 0.0f64..0.15,
        div in 0.0f64..0.1,
        vol in 0.01f64..1.5,
    ) {
        let call = european_option_bs(1, spot, strike, time, rate, div, vol).unwrap();
        let df = (-rate * time).exp();
        let fwd = fwd_price(spot, time, rate, div).unwrap();
        prop_assert!(call <= df * fwd * (1.0 + 1e-12));
    }
}
