//! # pricer_core: Numerical Foundation for the Lognormal Pricers
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - The standard normal distribution as an injectable capability (`math::distributions`)
//! - The crate-wide error type `PricingError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - libm: complementary error function used by the normal CDF
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::distributions::{NormalCdf, StandardNormal};
//!
//! let normal = StandardNormal;
//! assert!((normal.cdf(0.0) - 0.5).abs() < 1e-15);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
