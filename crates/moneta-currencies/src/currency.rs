//! `CurrencyMetadata` — the per-currency record driving rounding,
//! grouping and symbol selection.

use moneta_core::{DecimalPlaces, DigitGrouping};

/// Which of a currency's three signs to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SymbolVariant {
    /// The general-purpose default chosen by the data source.
    #[default]
    Preferred,
    /// The script-native rendering.
    Native,
    /// The standard, ISO-adjacent rendering.
    Standard,
}

/// Immutable display metadata for one currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CurrencyMetadata {
    /// ISO 4217 alphabetic code (e.g. "USD").
    pub code: &'static str,
    /// Full name (e.g. "U.S. Dollar").
    pub name: &'static str,
    /// Standard (accounting) decimal precision.
    pub decimals: DecimalPlaces,
    /// Default precision used unless standard decimals are requested.
    pub decimals_compact: DecimalPlaces,
    /// Grouping convention for the integer part.
    pub digit_grouping: DigitGrouping,
    /// Standard sign (e.g. "৳").
    pub symbol: &'static str,
    /// Script-native sign.
    pub symbol_native: &'static str,
    /// Default sign for general display (e.g. "Tk").
    pub symbol_preferred: &'static str,
}

impl CurrencyMetadata {
    /// Precision to round and pad to: `decimals` when standard decimals are
    /// requested, `decimals_compact` otherwise.
    pub fn decimal_places(&self, use_standard_decimals: bool) -> DecimalPlaces {
        if use_standard_decimals {
            self.decimals
        } else {
            self.decimals_compact
        }
    }

    /// The sign for the given variant.
    pub fn symbol_for(&self, variant: SymbolVariant) -> &'static str {
        match variant {
            SymbolVariant::Standard => self.symbol,
            SymbolVariant::Native => self.symbol_native,
            SymbolVariant::Preferred => self.symbol_preferred,
        }
    }
}

impl std::fmt::Display for CurrencyMetadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

#[cfg(test)]
mod tests {
    use crate::currencies::{BDT, USD};

    use super::*;

    #[test]
    fn decimal_places_selection() {
        assert_eq!(BDT.decimal_places(false), 0);
        assert_eq!(BDT.decimal_places(true), 2);
        assert_eq!(USD.decimal_places(false), 2);
    }

    #[test]
    fn symbol_variants() {
        assert_eq!(BDT.symbol_for(SymbolVariant::Standard), "৳");
        assert_eq!(BDT.symbol_for(SymbolVariant::Native), "Tk");
        assert_eq!(BDT.symbol_for(SymbolVariant::Preferred), "Tk");
    }

    #[test]
    fn display_is_code() {
        assert_eq!(format!("{}", &USD), "USD");
    }
}
