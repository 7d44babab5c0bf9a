//! # moneta-core
//!
//! Core types and error definitions for moneta.
//!
//! This crate holds the pieces shared by every other crate in the
//! workspace: the numeric type aliases, the [`DigitGrouping`] convention
//! and the error hierarchy used by the reference-data layer.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types.
pub mod errors;

/// Digit grouping conventions (`TWO` / `THREE`).
pub mod grouping;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used for monetary amounts.
pub type Real = f64;

/// Number of decimal places a value is rounded or padded to.
pub type DecimalPlaces = u32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use grouping::DigitGrouping;
