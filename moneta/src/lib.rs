//! # moneta
//!
//! Rounding, digit grouping and symbol display of monetary amounts, driven
//! by per-currency metadata.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.
//!
//! ## Quick start
//!
//! ```rust
//! use moneta::currencies::lookup_currency;
//! use moneta::format::{display_for_currency, DisplayOptions};
//!
//! let bdt = lookup_currency("BDT");
//! assert_eq!(display_for_currency(1234567.0, bdt, &DisplayOptions::new()), "Tk 12,34,567");
//!
//! let standard = DisplayOptions::new().standard_symbol(true).standard_decimals(true);
//! assert_eq!(display_for_currency(1234567.0, bdt, &standard), "৳ 12,34,567.00");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use moneta_core as core;

/// The rounding engine.
pub use moneta_math as math;

/// Currency and country reference data.
pub use moneta_currencies as currencies;

/// Currency-aware rounding, formatting and display.
pub use moneta_format as format;
