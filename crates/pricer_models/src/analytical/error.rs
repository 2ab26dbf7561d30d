//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Precondition violations raised by the closed-form pricers
//! - `ensure_non_negative` / `ensure`: The validation helpers every pricer runs first

use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// Every pricer validates its arguments before computing anything; the first
/// violated precondition is reported with the parameter name, the constraint
/// it failed and the offending value. There is no partial result.
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::non_negative("spot", -1.0);
/// assert_eq!(
///     format!("{}", err),
///     "Invalid argument: spot must be non-negative (got -1)"
/// );
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// A parameter violated its precondition.
    #[error("Invalid argument: {parameter} must be {constraint} (got {value})")]
    InvalidArgument {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Human-readable description of the violated constraint
        constraint: &'static str,
        /// The rejected value
        value: f64,
    },
}

impl AnalyticalError {
    /// Creates an `InvalidArgument` error for an arbitrary constraint.
    pub fn invalid(parameter: &'static str, constraint: &'static str, value: f64) -> Self {
        AnalyticalError::InvalidArgument {
            parameter,
            constraint,
            value,
        }
    }

    /// Creates an `InvalidArgument` error for a value that must be `>= 0`.
    pub fn non_negative(parameter: &'static str, value: f64) -> Self {
        Self::invalid(parameter, "non-negative", value)
    }

    /// Returns the name of the offending parameter.
    pub fn parameter(&self) -> &'static str {
        match self {
            AnalyticalError::InvalidArgument { parameter, .. } => parameter,
        }
    }
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

/// Rejects negative values and NaN.
#[inline]
pub(crate) fn ensure_non_negative(parameter: &'static str, value: f64) -> Result<(), AnalyticalError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(AnalyticalError::non_negative(parameter, value))
    }
}

/// Fails with `InvalidArgument` unless `holds` is true.
#[inline]
pub(crate) fn ensure(
    holds: bool,
    parameter: &'static str,
    constraint: &'static str,
    value: f64,
) -> Result<(), AnalyticalError> {
    if holds {
        Ok(())
    } else {
        Err(AnalyticalError::invalid(parameter, constraint, value))
    }
}
