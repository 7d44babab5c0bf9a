//! Oceanian currencies.

use crate::currency::CurrencyMetadata;
use moneta_core::DigitGrouping;

/// Australian Dollar.
pub static AUD: CurrencyMetadata = CurrencyMetadata {
    code: "AUD",
    name: "Australian Dollar",
    decimals: 2,
    decimals_compact: 2,
    digit_grouping: DigitGrouping::Three,
    symbol: "A$",
    symbol_native: "$",
    symbol_preferred: "A$",
};

/// New Zealand Dollar.
pub static NZD: CurrencyMetadata = CurrencyMetadata {
    code: "NZD",
    name: "New Zealand Dollar",
    decimals: 2,
    decimals_compact: 2,
    digit_grouping: DigitGrouping::Three,
    symbol: "NZ$",
    symbol_native: "$",
    symbol_preferred: "NZ$",
};
