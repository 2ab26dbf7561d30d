//! Payoff direction for European-style claims.
//!
//! The closed-form pricers select between the call and put branch by
//! multiplying with a sign `φ ∈ {+1, -1}`. `PayoffType` is the typed form of
//! that selector; the integer encoding used by external callers is converted
//! with `TryFrom<i32>`.

use thiserror::Error;

use crate::analytical::AnalyticalError;

/// Error returned when parsing an unknown [`PayoffType`] name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown payoff type '{0}'. Valid values: call, put, 1, -1")]
pub struct ParsePayoffTypeError(pub String);

/// Type of option payoff.
///
/// # Variants
/// - `Call`: pays on the upside, `φ = +1`
/// - `Put`: pays on the downside, `φ = -1`
///
/// # Examples
/// ```
/// use pricer_models::instruments::PayoffType;
///
/// assert_eq!(PayoffType::try_from(1).unwrap(), PayoffType::Call);
/// assert_eq!(PayoffType::Put.phi(), -1.0);
/// assert!(PayoffType::try_from(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PayoffType {
    /// Call option: max(S - K, 0), or 1{S > K} for a digital
    Call,
    /// Put option: max(K - S, 0), or 1{S < K} for a digital
    Put,
}

impl PayoffType {
    /// Returns the sign selector `φ`: `+1.0` for calls, `-1.0` for puts.
    #[inline]
    pub fn phi(self) -> f64 {
        match self {
            PayoffType::Call => 1.0,
            PayoffType::Put => -1.0,
        }
    }
}

impl TryFrom<i32> for PayoffType {
    type Error = AnalyticalError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PayoffType::Call),
            -1 => Ok(PayoffType::Put),
            other => Err(AnalyticalError::invalid(
                "payoff_type",
                "1 or -1",
                f64::from(other),
            )),
        }
    }
}

impl std::str::FromStr for PayoffType {
    type Err = ParsePayoffTypeError;

    /// Parses `call`/`put` (case-insensitive) or the integer encodings `1`/`-1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" | "c" | "1" | "+1" => Ok(PayoffType::Call),
            "put" | "p" | "-1" => Ok(PayoffType::Put),
            _ => Err(ParsePayoffTypeError(s.to_string())),
        }
    }
}

impl std::fmt::Display for PayoffType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayoffType::Call => write!(f, "call"),
            PayoffType::Put => write!(f, "put"),
        }
    }
}
