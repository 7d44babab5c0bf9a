//! # moneta-format
//!
//! The amount pipeline: currency-aware rounding, digit grouping and
//! symbol composition.
//!
//! ```
//! use moneta_currencies::lookup_currency;
//! use moneta_format::{display_for_currency, DisplayOptions};
//!
//! let usd = lookup_currency("USD");
//! assert_eq!(display_for_currency(1234.12, usd, &DisplayOptions::new()), "$ 1,234.12");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Currency-aware rounding, formatting and display.
pub mod amount;

/// Digit grouping and fraction normalisation.
pub mod grouping;

/// Display by currency code through a reference-data source.
pub mod lookup;

/// Amount paired with its currency.
pub mod money;

/// Option records for each layer.
pub mod options;

pub use amount::{display_for_currency, format_for_currency, round_for_currency};
pub use grouping::{format_grouped, group_digits, plain_string};
pub use lookup::{display_for_builtin_code, display_for_currency_code};
pub use money::Money;
pub use options::{DisplayOptions, FormatOptions, RoundOptions, DEFAULT_SEPARATOR};
