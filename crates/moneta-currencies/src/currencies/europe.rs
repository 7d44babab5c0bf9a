//! European currencies.

use crate::currency::CurrencyMetadata;
use moneta_core::DigitGrouping;

/// Euro.
pub static EUR: CurrencyMetadata = CurrencyMetadata {
    code: "EUR",
    name: "Euro",
    decimals: 2,
    decimals_compact: 2,
    digit_grouping: DigitGrouping::Three,
    symbol: "€",
    symbol_native: "€",
    symbol_preferred: "€",
};

/// British Pound.
pub static GBP: CurrencyMetadata = CurrencyMetadata {
    code: "GBP",
    name: "British Pound",
    decimals: 2,
    decimals_compact: 2,
    digit_grouping: DigitGrouping::Three,
    symbol: "£",
    symbol_native: "£",
    symbol_preferred: "£",
};

/// Swiss Franc.
pub static CHF: CurrencyMetadata = CurrencyMetadata {
    code: "CHF",
    name: "Swiss Franc",
    decimals: 2,
    decimals_compact: 2,
    digit_grouping: DigitGrouping::Three,
    symbol: "CHF",
    symbol_native: "CHF",
    symbol_preferred: "CHF",
};

/// Swedish Krona.
pub static SEK: CurrencyMetadata = CurrencyMetadata {
    code: "SEK",
    name: "Swedish Krona",
    decimals: 2,
    decimals_compact: 2,
    digit_grouping: DigitGrouping::Three,
    symbol: "SEK",
    symbol_native: "kr",
    symbol_preferred: "kr",
};

/// Norwegian Krone.
pub static NOK: CurrencyMetadata = CurrencyMetadata {
    code: "NOK",
    name: "Norwegian Krone",
    decimals: 2,
    decimals_compact: 2,
    digit_grouping: DigitGrouping::Three,
    symbol: "NOK",
    symbol_native: "kr",
    symbol_preferred: "kr",
};

/// Danish Krone.
pub static DKK: CurrencyMetadata = CurrencyMetadata {
    code: "DKK",
    name: "Danish Krone",
    decimals: 2,
    decimals_compact: 2,
    digit_grouping: DigitGrouping::Three,
    symbol: "DKK",
    symbol_native: "kr.",
    symbol_preferred: "kr.",
};

/// Polish Zloty.
pub static PLN: CurrencyMetadata = CurrencyMetadata {
    code: "PLN",
    name: "Polish Zloty",
    decimals: 2,
    decimals_compact: 2,
    digit_grouping: DigitGrouping::Three,
    symbol: "PLN",
    symbol_native: "zł",
    symbol_preferred: "zł",
};

/// Czech Koruna.
pub static CZK: CurrencyMetadata = CurrencyMetadata {
    code: "CZK",
    name: "Czech Koruna",
    decimals: 2,
    decimals_compact: 2,
    digit_grouping: DigitGrouping::Three,
    symbol: "CZK",
    symbol_native: "Kč",
    symbol_preferred: "Kč",
};

/// Hungarian Forint.
pub static HUF: CurrencyMetadata = CurrencyMetadata {
    code: "HUF",
    name: "Hungarian Forint",
    decimals: 2,
    decimals_compact: 0,
    digit_grouping: DigitGrouping::Three,
    symbol: "HUF",
    symbol_native: "Ft",
    symbol_preferred: "Ft",
};

/// Turkish Lira.
pub static TRY: CurrencyMetadata = CurrencyMetadata {
    code: "TRY",
    name: "Turkish Lira",
    decimals: 2,
    decimals_compact: 2,
    digit_grouping: DigitGrouping::Three,
    symbol: "TRY",
    symbol_native: "₺",
    symbol_preferred: "₺",
};

/// Russian Ruble.
pub static RUB: CurrencyMetadata = CurrencyMetadata {
    code: "RUB",
    name: "Russian Ruble",
    decimals: 2,
    decimals_compact: 2,
    digit_grouping: DigitGrouping::Three,
    symbol: "RUB",
    symbol_native: "₽",
    symbol_preferred: "₽",
};
