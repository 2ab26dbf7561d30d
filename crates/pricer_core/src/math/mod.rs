//! Mathematical building blocks shared by the pricing formulas.
//!
//! This module provides:
//! - `distributions`: The standard normal distribution (CDF capability)

pub mod distributions;

pub use distributions::{norm_cdf, NormalCdf, StandardNormal};
