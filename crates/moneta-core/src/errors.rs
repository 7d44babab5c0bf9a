//! Error types for moneta.
//!
//! The amount pipeline itself is total and never returns an error; these
//! types belong to the reference-data layer (lookups, table validation and
//! pluggable data sources).

use thiserror::Error;

/// The top-level error type used throughout moneta.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No currency is registered under the given code.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),

    /// No country is registered under the given code.
    #[error("unknown country code: {0}")]
    UnknownCountry(String),

    /// A country references a currency code that has no record.
    #[error("country {country} references unknown currency {currency}")]
    DanglingCurrency {
        /// The offending country code.
        country: String,
        /// The currency code it points to.
        currency: String,
    },

    /// The same code appears twice in one table.
    #[error("duplicate {table} code: {code}")]
    DuplicateCode {
        /// Which table ("currency" or "country").
        table: &'static str,
        /// The repeated code.
        code: String,
    },

    /// A reference-data backend failed to answer a lookup.
    #[error("reference data source failed: {0}")]
    Source(String),
}

/// Shorthand `Result` type used throughout moneta.
pub type Result<T, E = Error> = std::result::Result<T, E>;
