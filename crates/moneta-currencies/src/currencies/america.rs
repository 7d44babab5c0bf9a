//! American currencies.

use crate::currency::CurrencyMetadata;
use moneta_core::DigitGrouping;

/// U.S. Dollar.
pub static USD: CurrencyMetadata = CurrencyMetadata {
    code: "USD",
    name: "U.S. Dollar",
    decimals: 2,
    decimals_compact: 2,
    digit_grouping: DigitGrouping::Three,
    symbol: "$",
    symbol_native: "$",
    symbol_preferred: "$",
};

/// Canadian Dollar.
pub static CAD: CurrencyMetadata = CurrencyMetadata {
    code: "CAD",
    name: "Canadian Dollar",
    decimals: 2,
    decimals_compact: 2,
    digit_grouping: DigitGrouping::Three,
    symbol: "CA$",
    symbol_native: "$",
    symbol_preferred: "$",
};

/// Mexican Peso.
pub static MXN: CurrencyMetadata = CurrencyMetadata {
    code: "MXN",
    name: "Mexican Peso",
    decimals: 2,
    decimals_compact: 2,
    digit_grouping: DigitGrouping::Three,
    symbol: "MX$",
    symbol_native: "$",
    symbol_preferred: "$",
};

/// Brazilian Real.
pub static BRL: CurrencyMetadata = CurrencyMetadata {
    code: "BRL",
    name: "Brazilian Real",
    decimals: 2,
    decimals_compact: 2,
    digit_grouping: DigitGrouping::Three,
    symbol: "R$",
    symbol_native: "R$",
    symbol_preferred: "R$",
};

/// Argentine Peso.
pub static ARS: CurrencyMetadata = CurrencyMetadata {
    code: "ARS",
    name: "Argentine Peso",
    decimals: 2,
    decimals_compact: 2,
    digit_grouping: DigitGrouping::Three,
    symbol: "AR$",
    symbol_native: "$",
    symbol_preferred: "$",
};

/// Chilean Peso.
pub static CLP: CurrencyMetadata = CurrencyMetadata {
    code: "CLP",
    name: "Chilean Peso",
    decimals: 0,
    decimals_compact: 0,
    digit_grouping: DigitGrouping::Three,
    symbol: "CL$",
    symbol_native: "$",
    symbol_preferred: "$",
};

/// Colombian Peso.
pub static COP: CurrencyMetadata = CurrencyMetadata {
    code: "COP",
    name: "Colombian Peso",
    decimals: 2,
    decimals_compact: 0,
    digit_grouping: DigitGrouping::Three,
    symbol: "CO$",
    symbol_native: "$",
    symbol_preferred: "$",
};
