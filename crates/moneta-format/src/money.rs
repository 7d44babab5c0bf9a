//! A monetary amount tied to its currency record.

use crate::amount::{display_for_currency, format_for_currency, round_for_currency};
use crate::options::{DisplayOptions, FormatOptions, RoundOptions};
use moneta_core::errors::{Error, Result};
use moneta_core::Real;
use moneta_currencies::{lookup_currency, CurrencyMetadata};

/// A monetary amount with an associated currency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Money {
    /// Numeric value.
    pub value: Real,
    /// The currency.
    pub currency: &'static CurrencyMetadata,
}

impl Money {
    /// Create a new monetary amount.
    pub fn new(value: Real, currency: &'static CurrencyMetadata) -> Self {
        Self { value, currency }
    }

    /// Create a monetary amount in a built-in currency.
    ///
    /// # Errors
    /// [`Error::UnknownCurrency`] when no built-in currency has `code`.
    pub fn from_code(value: Real, code: &str) -> Result<Self> {
        lookup_currency(code)
            .map(|currency| Self::new(value, currency))
            .ok_or_else(|| Error::UnknownCurrency(code.to_string()))
    }

    /// The amount rounded to its currency's precision.
    ///
    /// [`format`](Self::format), [`display`](Self::display) and `Display`
    /// round again unless `skip_rounding` is set, so a ceiling policy can
    /// add one more unit to an already rounded value (`1.12 * 100` is
    /// `112.00000000000001` in `f64`).
    pub fn rounded(&self, options: &RoundOptions) -> Self {
        Self::new(
            round_for_currency(self.value, Some(self.currency), options),
            self.currency,
        )
    }

    /// Grouped string form, without symbol.
    pub fn format(&self, options: &FormatOptions) -> String {
        format_for_currency(self.value, Some(self.currency), options)
    }

    /// Symbol and grouped amount.
    pub fn display(&self, options: &DisplayOptions) -> String {
        display_for_currency(self.value, Some(self.currency), options)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display(&DisplayOptions::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moneta_currencies::currencies::{BDT, USD};

    #[test]
    fn display_uses_default_options() {
        assert_eq!(Money::new(1234.1, &USD).to_string(), "$ 1,234.10");
        assert_eq!(Money::new(1.123, &BDT).to_string(), "Tk 2");
    }

    #[test]
    fn from_code() {
        let money = Money::from_code(12.5, "bdt").unwrap();
        assert_eq!(money.currency, &BDT);
        assert_eq!(
            Money::from_code(1.0, "QQQ"),
            Err(Error::UnknownCurrency("QQQ".into()))
        );
    }

    #[test]
    fn rounded_keeps_currency() {
        let money = Money::new(1.123, &USD).rounded(&RoundOptions::new().nearest_rounding(true));
        assert_eq!(money, Money::new(1.12, &USD));
        assert_eq!(money.format(&FormatOptions::new().skip_rounding(true)), "1.12");
    }

    #[test]
    fn formatting_a_rounded_amount_rounds_again() {
        let money = Money::new(1.123, &USD).rounded(&RoundOptions::new().nearest_rounding(true));
        assert_eq!(money.format(&FormatOptions::new()), "1.13");
        assert_eq!(money.to_string(), "$ 1.13");
        assert_eq!(
            money.display(&DisplayOptions::new().skip_rounding(true)),
            "$ 1.12"
        );
    }
}
