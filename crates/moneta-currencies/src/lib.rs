//! # moneta-currencies
//!
//! Currency and country reference data: per-currency display metadata,
//! the country-to-currency table, a code-indexed registry with integrity
//! validation, and the asynchronous [`ReferenceDataSource`] seam.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Currency metadata and symbol variants.
pub mod currency;

/// Country metadata.
pub mod country;

/// Pre-defined currencies.
pub mod currencies;

/// Pre-defined countries.
pub mod countries;

/// Code-indexed lookups over the tables.
pub mod registry;

/// Asynchronous reference-data lookups.
pub mod source;

pub use country::CountryMetadata;
pub use currency::{CurrencyMetadata, SymbolVariant};
pub use registry::{
    all_countries, all_currencies, currency_for_country, lookup_country, lookup_currencies,
    lookup_currency, StaticRegistry,
};
pub use source::ReferenceDataSource;
