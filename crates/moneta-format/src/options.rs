//! Option records for the three currency-aware layers.
//!
//! Each layer embeds the options of the layer below it:
//! [`RoundOptions`] ⊂ [`FormatOptions`] ⊂ [`DisplayOptions`].  Every flag
//! defaults to `false` and the separator defaults to a single space.  With
//! the `serde` feature the records deserialise from flat maps in which any
//! field may be omitted.

use moneta_core::DecimalPlaces;
use moneta_currencies::{CurrencyMetadata, SymbolVariant};
use moneta_math::RoundingPolicy;

/// Separator placed between symbol and amount when none is configured.
pub const DEFAULT_SEPARATOR: &str = " ";

/// Options for currency-aware rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RoundOptions {
    /// Round to nearest (ties up) instead of taking the ceiling.
    pub use_nearest_rounding: bool,
    /// Use the currency's standard `decimals` instead of `decimals_compact`.
    pub use_standard_decimals: bool,
}

impl RoundOptions {
    /// All defaults: ceiling rounding to compact decimals.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set [`use_nearest_rounding`](Self::use_nearest_rounding).
    pub fn nearest_rounding(mut self, on: bool) -> Self {
        self.use_nearest_rounding = on;
        self
    }

    /// Set [`use_standard_decimals`](Self::use_standard_decimals).
    pub fn standard_decimals(mut self, on: bool) -> Self {
        self.use_standard_decimals = on;
        self
    }

    /// The rounding policy these options select.
    pub fn policy(&self) -> RoundingPolicy {
        RoundingPolicy::from_nearest(self.use_nearest_rounding)
    }

    /// The precision these options select for `currency`.
    pub fn decimal_places(&self, currency: &CurrencyMetadata) -> DecimalPlaces {
        currency.decimal_places(self.use_standard_decimals)
    }
}

/// Options for currency-aware formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormatOptions {
    /// Rounding options, used unless `skip_rounding` is set.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub round: RoundOptions,
    /// Format the raw amount without rounding it first.
    pub skip_rounding: bool,
    /// Keep the natural decimal expansion instead of padding or truncating
    /// to the currency precision.
    pub skip_fixed_decimals: bool,
}

impl FormatOptions {
    /// All defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set [`RoundOptions::use_nearest_rounding`].
    pub fn nearest_rounding(mut self, on: bool) -> Self {
        self.round = self.round.nearest_rounding(on);
        self
    }

    /// Set [`RoundOptions::use_standard_decimals`].
    pub fn standard_decimals(mut self, on: bool) -> Self {
        self.round = self.round.standard_decimals(on);
        self
    }

    /// Set [`skip_rounding`](Self::skip_rounding).
    pub fn skip_rounding(mut self, on: bool) -> Self {
        self.skip_rounding = on;
        self
    }

    /// Set [`skip_fixed_decimals`](Self::skip_fixed_decimals).
    pub fn skip_fixed_decimals(mut self, on: bool) -> Self {
        self.skip_fixed_decimals = on;
        self
    }

    /// The fixed precision handed to the grouping formatter, if any.
    pub fn fixed_decimal_places(&self, currency: &CurrencyMetadata) -> Option<DecimalPlaces> {
        if self.skip_fixed_decimals {
            None
        } else {
            Some(self.round.decimal_places(currency))
        }
    }
}

impl From<RoundOptions> for FormatOptions {
    fn from(round: RoundOptions) -> Self {
        Self {
            round,
            ..Self::default()
        }
    }
}

/// Options for currency-aware display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayOptions {
    /// Rounding and formatting options.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub format: FormatOptions,
    /// Use the plain (rounded) amount instead of the grouped form.
    pub skip_formatting: bool,
    /// Prefer the script-native symbol.
    pub use_native_symbol: bool,
    /// Prefer the standard symbol; wins over `use_native_symbol`.
    pub use_standard_symbol: bool,
    /// Text between symbol and amount; `None` means [`DEFAULT_SEPARATOR`]
    /// while `Some("")` means no separator at all.
    pub separator: Option<String>,
}

impl DisplayOptions {
    /// All defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set [`RoundOptions::use_nearest_rounding`].
    pub fn nearest_rounding(mut self, on: bool) -> Self {
        self.format = self.format.nearest_rounding(on);
        self
    }

    /// Set [`RoundOptions::use_standard_decimals`].
    pub fn standard_decimals(mut self, on: bool) -> Self {
        self.format = self.format.standard_decimals(on);
        self
    }

    /// Set [`FormatOptions::skip_rounding`].
    pub fn skip_rounding(mut self, on: bool) -> Self {
        self.format = self.format.skip_rounding(on);
        self
    }

    /// Set [`FormatOptions::skip_fixed_decimals`].
    pub fn skip_fixed_decimals(mut self, on: bool) -> Self {
        self.format = self.format.skip_fixed_decimals(on);
        self
    }

    /// Set [`skip_formatting`](Self::skip_formatting).
    pub fn skip_formatting(mut self, on: bool) -> Self {
        self.skip_formatting = on;
        self
    }

    /// Set [`use_native_symbol`](Self::use_native_symbol).
    pub fn native_symbol(mut self, on: bool) -> Self {
        self.use_native_symbol = on;
        self
    }

    /// Set [`use_standard_symbol`](Self::use_standard_symbol).
    pub fn standard_symbol(mut self, on: bool) -> Self {
        self.use_standard_symbol = on;
        self
    }

    /// Set an explicit separator (the empty string is honoured).
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// Which symbol to render: standard, then native, then preferred.
    pub fn symbol_variant(&self) -> SymbolVariant {
        if self.use_standard_symbol {
            SymbolVariant::Standard
        } else if self.use_native_symbol {
            SymbolVariant::Native
        } else {
            SymbolVariant::Preferred
        }
    }

    /// The separator to place between symbol and amount.
    pub fn resolved_separator(&self) -> &str {
        self.separator.as_deref().unwrap_or(DEFAULT_SEPARATOR)
    }
}

impl From<FormatOptions> for DisplayOptions {
    fn from(format: FormatOptions) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }
}

impl From<RoundOptions> for DisplayOptions {
    fn from(round: RoundOptions) -> Self {
        FormatOptions::from(round).into()
    }
}
