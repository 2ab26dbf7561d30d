//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors surfaced by pricing operations to their callers

use std::fmt;

/// Categorised pricing errors.
///
/// Model-specific errors (for example the analytical pricers' argument
/// errors) convert into this type so that service layers handle a single
/// error surface.
///
/// # Variants
/// - `InvalidInput`: A precondition on market data or contract parameters was violated
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("spot must be non-negative".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: spot must be non-negative");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    InvalidInput(String),
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for PricingError {}
