//! African currencies.

use crate::currency::CurrencyMetadata;
use moneta_core::DigitGrouping;

/// South African Rand.
pub static ZAR: CurrencyMetadata = CurrencyMetadata {
    code: "ZAR",
    name: "South African Rand",
    decimals: 2,
    decimals_compact: 2,
    digit_grouping: DigitGrouping::Three,
    symbol: "ZAR",
    symbol_native: "R",
    symbol_preferred: "R",
};

/// Nigerian Naira.
pub static NGN: CurrencyMetadata = CurrencyMetadata {
    code: "NGN",
    name: "Nigerian Naira",
    decimals: 2,
    decimals_compact: 2,
    digit_grouping: DigitGrouping::Three,
    symbol: "NGN",
    symbol_native: "₦",
    symbol_preferred: "₦",
};

/// Egyptian Pound.
pub static EGP: CurrencyMetadata = CurrencyMetadata {
    code: "EGP",
    name: "Egyptian Pound",
    decimals: 2,
    decimals_compact: 2,
    digit_grouping: DigitGrouping::Three,
    symbol: "EGP",
    symbol_native: "ج.م.‏",
    symbol_preferred: "E£",
};

/// Kenyan Shilling.
pub static KES: CurrencyMetadata = CurrencyMetadata {
    code: "KES",
    name: "Kenyan Shilling",
    decimals: 2,
    decimals_compact: 2,
    digit_grouping: DigitGrouping::Three,
    symbol: "KES",
    symbol_native: "Ksh",
    symbol_preferred: "Ksh",
};

/// Moroccan Dirham.
pub static MAD: CurrencyMetadata = CurrencyMetadata {
    code: "MAD",
    name: "Moroccan Dirham",
    decimals: 2,
    decimals_compact: 2,
    digit_grouping: DigitGrouping::Three,
    symbol: "MAD",
    symbol_native: "د.م.‏",
    symbol_preferred: "MAD",
};

/// Ghanaian Cedi.
pub static GHS: CurrencyMetadata = CurrencyMetadata {
    code: "GHS",
    name: "Ghanaian Cedi",
    decimals: 2,
    decimals_compact: 2,
    digit_grouping: DigitGrouping::Three,
    symbol: "GHS",
    symbol_native: "GH₵",
    symbol_preferred: "GH₵",
};
