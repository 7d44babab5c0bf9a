//! # moneta-math
//!
//! The rounding engine: scale, round under a policy, descale.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Rounding policies.
pub mod rounding;

pub use rounding::{round, RoundingPolicy};
