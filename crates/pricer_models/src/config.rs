//! Pricing policy configuration.
//!
//! This module provides configuration types and a builder for the
//! analytical pricers. Configuration is immutable once built and is carried
//! by value inside [`BlackScholesPricer`](crate::analytical::BlackScholesPricer).

use thiserror::Error;

/// Treatment of a vanishing total volatility `σ√T`.
///
/// When `σ√T = 0` the lognormal terminal distribution collapses to the
/// forward and `d1`/`d2` divide by zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DegenerateVolPolicy {
    /// Price the deterministic limit: the discounted intrinsic value of the
    /// forward against the strike (digitals pay half at the money).
    #[default]
    Intrinsic,

    /// Reject the call with `InvalidArgument`.
    Reject,
}

/// Error returned when parsing an unknown [`DegenerateVolPolicy`] name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown degenerate volatility policy '{0}'. Valid values: intrinsic, reject")]
pub struct UnknownPolicyError(pub String);

impl std::fmt::Display for DegenerateVolPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DegenerateVolPolicy::Intrinsic => write!(f, "intrinsic"),
            DegenerateVolPolicy::Reject => write!(f, "reject"),
        }
    }
}

impl std::str::FromStr for DegenerateVolPolicy {
    type Err = UnknownPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "intrinsic" => Ok(DegenerateVolPolicy::Intrinsic),
            "reject" => Ok(DegenerateVolPolicy::Reject),
            other => Err(UnknownPolicyError(other.to_string())),
        }
    }
}

/// Analytical pricing configuration.
///
/// # Fields
/// - `degenerate_vol`: what to do when `σ√T = 0` (default: `Intrinsic`)
/// - `enforce_correlation_bounds`: whether `quanto_fwd_price` rejects a
///   correlation outside `[-1, 1]` (default: `true`)
///
/// # Examples
///
/// ```rust
/// use pricer_models::config::{DegenerateVolPolicy, PricingConfig};
///
/// let config = PricingConfig::builder()
///     .degenerate_vol(DegenerateVolPolicy::Reject)
///     .enforce_correlation_bounds(false)
///     .build();
///
/// assert_eq!(config.degenerate_vol(), DegenerateVolPolicy::Reject);
/// assert!(!config.enforce_correlation_bounds());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct PricingConfig {
    degenerate_vol: DegenerateVolPolicy,
    enforce_correlation_bounds: bool,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            degenerate_vol: DegenerateVolPolicy::default(),
            enforce_correlation_bounds: true,
        }
    }
}

impl PricingConfig {
    /// Creates a new configuration builder starting from the defaults.
    #[inline]
    pub fn builder() -> PricingConfigBuilder {
        PricingConfigBuilder::default()
    }

    /// Creates a builder seeded with this configuration.
    #[inline]
    pub fn to_builder(&self) -> PricingConfigBuilder {
        PricingConfigBuilder { config: *self }
    }

    /// Returns the degenerate-volatility policy.
    #[inline]
    pub fn degenerate_vol(&self) -> DegenerateVolPolicy {
        self.degenerate_vol
    }

    /// Returns whether correlations outside `[-1, 1]` are rejected.
    #[inline]
    pub fn enforce_correlation_bounds(&self) -> bool {
        self.enforce_correlation_bounds
    }
}

/// Builder for [`PricingConfig`].
#[derive(Clone, Debug, Default)]
pub struct PricingConfigBuilder {
    config: PricingConfig,
}

impl PricingConfigBuilder {
    /// Sets the degenerate-volatility policy.
    #[inline]
    pub fn degenerate_vol(mut self, policy: DegenerateVolPolicy) -> Self {
        self.config.degenerate_vol = policy;
        self
    }

    /// Sets whether correlations outside `[-1, 1]` are rejected.
    #[inline]
    pub fn enforce_correlation_bounds(mut self, enforce: bool) -> Self {
        self.config.enforce_correlation_bounds = enforce;
        self
    }

    /// Builds the configuration.
    #[inline]
    pub fn build(self) -> PricingConfig {
        self.config
    }
}
