//! Asian currencies.

use crate::currency::CurrencyMetadata;
use moneta_core::DigitGrouping;

/// Bangladeshi Taka.
pub static BDT: CurrencyMetadata = CurrencyMetadata {
    code: "BDT",
    name: "Bangladeshi Taka",
    decimals: 2,
    decimals_compact: 0,
    digit_grouping: DigitGrouping::Two,
    symbol: "৳",
    symbol_native: "Tk",
    symbol_preferred: "Tk",
};

/// Indian Rupee.
pub static INR: CurrencyMetadata = CurrencyMetadata {
    code: "INR",
    name: "Indian Rupee",
    decimals: 2,
    decimals_compact: 2,
    digit_grouping: DigitGrouping::Two,
    symbol: "₹",
    symbol_native: "₹",
    symbol_preferred: "₹",
};

/// Pakistani Rupee.
pub static PKR: CurrencyMetadata = CurrencyMetadata {
    code: "PKR",
    name: "Pakistani Rupee",
    decimals: 2,
    decimals_compact: 0,
    digit_grouping: DigitGrouping::Two,
    symbol: "PKR",
    symbol_native: "Rs",
    symbol_preferred: "Rs",
};

/// Nepalese Rupee.
pub static NPR: CurrencyMetadata = CurrencyMetadata {
    code: "NPR",
    name: "Nepalese Rupee",
    decimals: 2,
    decimals_compact: 2,
    digit_grouping: DigitGrouping::Two,
    symbol: "NPR",
    symbol_native: "रु",
    symbol_preferred: "Rs",
};

/// Sri Lankan Rupee.
pub static LKR: CurrencyMetadata = CurrencyMetadata {
    code: "LKR",
    name: "Sri Lankan Rupee",
    decimals: 2,
    decimals_compact: 2,
    digit_grouping: DigitGrouping::Three,
    symbol: "LKR",
    symbol_native: "Rs.",
    symbol_preferred: "Rs",
};

/// Japanese Yen.
pub static JPY: CurrencyMetadata = CurrencyMetadata {
    code: "JPY",
    name: "Japanese Yen",
    decimals: 0,
    decimals_compact: 0,
    digit_grouping: DigitGrouping::Three,
    symbol: "¥",
    symbol_native: "￥",
    symbol_preferred: "¥",
};

/// Chinese Yuan.
pub static CNY: CurrencyMetadata = CurrencyMetadata {
    code: "CNY",
    name: "Chinese Yuan",
    decimals: 2,
    decimals_compact: 2,
    digit_grouping: DigitGrouping::Three,
    symbol: "CN¥",
    symbol_native: "¥",
    symbol_preferred: "¥",
};

/// South Korean Won.
pub static KRW: CurrencyMetadata = CurrencyMetadata {
    code: "KRW",
    name: "South Korean Won",
    decimals: 0,
    decimals_compact: 0,
    digit_grouping: DigitGrouping::Three,
    symbol: "₩",
    symbol_native: "₩",
    symbol_preferred: "₩",
};

/// Hong Kong Dollar.
pub static HKD: CurrencyMetadata = CurrencyMetadata {
    code: "HKD",
    name: "Hong Kong Dollar",
    decimals: 2,
    decimals_compact: 2,
    digit_grouping: DigitGrouping::Three,
    symbol: "HK$",
    symbol_native: "$",
    symbol_preferred: "HK$",
};

/// Singapore Dollar.
pub static SGD: CurrencyMetadata = CurrencyMetadata {
    code: "SGD",
    name: "Singapore Dollar",
    decimals: 2,
    decimals_compact: 2,
    digit_grouping: DigitGrouping::Three,
    symbol: "SGD",
    symbol_native: "$",
    symbol_preferred: "S$",
};

/// Thai Baht.
pub static THB: CurrencyMetadata = CurrencyMetadata {
    code: "THB",
    name: "Thai Baht",
    decimals: 2,
    decimals_compact: 2,
    digit_grouping: DigitGrouping::Three,
    symbol: "THB",
    symbol_native: "฿",
    symbol_preferred: "฿",
};

/// Indonesian Rupiah.
pub static IDR: CurrencyMetadata = CurrencyMetadata {
    code: "IDR",
    name: "Indonesian Rupiah",
    decimals: 2,
    decimals_compact: 0,
    digit_grouping: DigitGrouping::Three,
    symbol: "IDR",
    symbol_native: "Rp",
    symbol_preferred: "Rp",
};

/// Malaysian Ringgit.
pub static MYR: CurrencyMetadata = CurrencyMetadata {
    code: "MYR",
    name: "Malaysian Ringgit",
    decimals: 2,
    decimals_compact: 2,
    digit_grouping: DigitGrouping::Three,
    symbol: "MYR",
    symbol_native: "RM",
    symbol_preferred: "RM",
};

/// Philippine Peso.
pub static PHP: CurrencyMetadata = CurrencyMetadata {
    code: "PHP",
    name: "Philippine Peso",
    decimals: 2,
    decimals_compact: 2,
    digit_grouping: DigitGrouping::Three,
    symbol: "₱",
    symbol_native: "₱",
    symbol_preferred: "₱",
};

/// Vietnamese Dong.
pub static VND: CurrencyMetadata = CurrencyMetadata {
    code: "VND",
    name: "Vietnamese Dong",
    decimals: 0,
    decimals_compact: 0,
    digit_grouping: DigitGrouping::Three,
    symbol: "₫",
    symbol_native: "₫",
    symbol_preferred: "₫",
};

/// UAE Dirham.
pub static AED: CurrencyMetadata = CurrencyMetadata {
    code: "AED",
    name: "UAE Dirham",
    decimals: 2,
    decimals_compact: 2,
    digit_grouping: DigitGrouping::Three,
    symbol: "AED",
    symbol_native: "د.إ.‏",
    symbol_preferred: "AED",
};

/// Saudi Riyal.
pub static SAR: CurrencyMetadata = CurrencyMetadata {
    code: "SAR",
    name: "Saudi Riyal",
    decimals: 2,
    decimals_compact: 2,
    digit_grouping: DigitGrouping::Three,
    symbol: "SAR",
    symbol_native: "ر.س.‏",
    symbol_preferred: "SAR",
};

/// Israeli New Shekel.
pub static ILS: CurrencyMetadata = CurrencyMetadata {
    code: "ILS",
    name: "Israeli New Shekel",
    decimals: 2,
    decimals_compact: 2,
    digit_grouping: DigitGrouping::Three,
    symbol: "₪",
    symbol_native: "₪",
    symbol_preferred: "₪",
};
