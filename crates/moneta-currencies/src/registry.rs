//! Code-indexed registry over currency and country tables.
//!
//! [`StaticRegistry`] indexes two `'static` tables by upper-cased code.
//! The built-in registry is created once on first use and shared for the
//! rest of the process; lookups never mutate it.

use crate::country::CountryMetadata;
use crate::currency::CurrencyMetadata;
use crate::{countries, currencies};
use moneta_core::errors::{Error, Result};
use std::collections::HashMap;
use std::sync::LazyLock;

static BUILTIN: LazyLock<StaticRegistry> =
    LazyLock::new(|| StaticRegistry::new(currencies::ALL, countries::ALL));

/// Lookup tables for currencies and countries.
///
/// Codes are matched case-insensitively and surrounding whitespace is
/// ignored.  When a table repeats a code the first record wins;
/// [`validate`](Self::validate) reports the repetition.
#[derive(Debug, Clone)]
pub struct StaticRegistry {
    currencies: &'static [&'static CurrencyMetadata],
    countries: &'static [&'static CountryMetadata],
    currency_index: HashMap<String, &'static CurrencyMetadata>,
    country_index: HashMap<String, &'static CountryMetadata>,
}

impl StaticRegistry {
    /// Build a registry over the given tables.
    pub fn new(
        currencies: &'static [&'static CurrencyMetadata],
        countries: &'static [&'static CountryMetadata],
    ) -> Self {
        let mut currency_index = HashMap::with_capacity(currencies.len());
        for &c in currencies {
            currency_index.entry(normalize(c.code)).or_insert(c);
        }
        let mut country_index = HashMap::with_capacity(countries.len());
        for &c in countries {
            country_index.entry(normalize(c.code)).or_insert(c);
        }
        Self {
            currencies,
            countries,
            currency_index,
            country_index,
        }
    }

    /// The registry over the built-in tables.
    pub fn builtin() -> &'static StaticRegistry {
        &BUILTIN
    }

    /// Look up a currency by ISO 4217 code.
    pub fn currency(&self, code: &str) -> Option<&'static CurrencyMetadata> {
        let found = self.currency_index.get(&normalize(code)).copied();
        if found.is_none() {
            log::debug!("no currency registered under {code:?}");
        }
        found
    }

    /// Look up several currencies at once, preserving the order of `codes`.
    pub fn currencies<I>(&self, codes: I) -> Vec<Option<&'static CurrencyMetadata>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        codes
            .into_iter()
            .map(|code| self.currency(code.as_ref()))
            .collect()
    }

    /// Look up a country by ISO 3166-1 alpha-2 code.
    pub fn country(&self, code: &str) -> Option<&'static CountryMetadata> {
        let found = self.country_index.get(&normalize(code)).copied();
        if found.is_none() {
            log::debug!("no country registered under {code:?}");
        }
        found
    }

    /// The currency used by a country.
    ///
    /// # Errors
    /// [`Error::UnknownCountry`] when the country is missing and
    /// [`Error::DanglingCurrency`] when its currency code has no record.
    pub fn currency_for_country(&self, country_code: &str) -> Result<&'static CurrencyMetadata> {
        let country = self
            .country(country_code)
            .ok_or_else(|| Error::UnknownCountry(country_code.to_string()))?;
        self.currency(country.currency_code)
            .ok_or_else(|| Error::DanglingCurrency {
                country: country.code.to_string(),
                currency: country.currency_code.to_string(),
            })
    }

    /// Every currency record, in table order.
    pub fn all_currencies(&self) -> &'static [&'static CurrencyMetadata] {
        self.currencies
    }

    /// Every country record, in table order.
    pub fn all_countries(&self) -> &'static [&'static CountryMetadata] {
        self.countries
    }

    /// Check the cross-table invariants: codes are unique within each table
    /// and every country's currency code resolves to a currency record.
    ///
    /// # Errors
    /// The first violation found, as [`Error::DuplicateCode`] or
    /// [`Error::DanglingCurrency`].
    pub fn validate(&self) -> Result<()> {
        if self.currency_index.len() != self.currencies.len() {
            let code = first_duplicate(self.currencies.iter().map(|c| c.code));
            log::warn!("currency table repeats code {code}");
            return Err(Error::DuplicateCode {
                table: "currency",
                code,
            });
        }
        if self.country_index.len() != self.countries.len() {
            let code = first_duplicate(self.countries.iter().map(|c| c.code));
            log::warn!("country table repeats code {code}");
            return Err(Error::DuplicateCode {
                table: "country",
                code,
            });
        }
        for country in self.countries {
            if !self.currency_index.contains_key(&normalize(country.currency_code)) {
                log::warn!(
                    "country {} references unknown currency {}",
                    country.code,
                    country.currency_code
                );
                return Err(Error::DanglingCurrency {
                    country: country.code.to_string(),
                    currency: country.currency_code.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Default for StaticRegistry {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

fn normalize(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

fn first_duplicate<'a>(codes: impl Iterator<Item = &'a str>) -> String {
    let mut seen = std::collections::HashSet::new();
    codes
        .map(normalize)
        .find(|code| !seen.insert(code.clone()))
        .unwrap_or_default()
}

// ── Built-in registry shortcuts ───────────────────────────────────────────────

/// Look up a built-in currency by code.
pub fn lookup_currency(code: &str) -> Option<&'static CurrencyMetadata> {
    StaticRegistry::builtin().currency(code)
}

/// Look up several built-in currencies, preserving order.
pub fn lookup_currencies<I>(codes: I) -> Vec<Option<&'static CurrencyMetadata>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    StaticRegistry::builtin().currencies(codes)
}

/// Look up a built-in country by code.
pub fn lookup_country(code: &str) -> Option<&'static CountryMetadata> {
    StaticRegistry::builtin().country(code)
}

/// The built-in currency of a country.
pub fn currency_for_country(country_code: &str) -> Result<&'static CurrencyMetadata> {
    StaticRegistry::builtin().currency_for_country(country_code)
}

/// Every built-in currency.
pub fn all_currencies() -> &'static [&'static CurrencyMetadata] {
    StaticRegistry::builtin().all_currencies()
}

/// Every built-in country.
pub fn all_countries() -> &'static [&'static CountryMetadata] {
    StaticRegistry::builtin().all_countries()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currencies::{BDT, USD};
    use moneta_core::DigitGrouping;

    static XTS: CurrencyMetadata = CurrencyMetadata {
        code: "XTS",
        name: "Test Currency",
        decimals: 2,
        decimals_compact: 2,
        digit_grouping: DigitGrouping::Three,
        symbol: "¤",
        symbol_native: "¤",
        symbol_preferred: "¤",
    };

    static ATLANTIS: CountryMetadata = CountryMetadata {
        code: "XA",
        name: "Atlantis",
        currency_code: "XTS",
    };

    static LEMURIA: CountryMetadata = CountryMetadata {
        code: "XL",
        name: "Lemuria",
        currency_code: "XLM",
    };

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup_currency("usd"), Some(&USD));
        assert_eq!(lookup_currency(" BDT "), Some(&BDT));
        assert_eq!(lookup_currency("ZZZ"), None);
    }

    #[test]
    fn batch_lookup_preserves_order() {
        let found = lookup_currencies(["USD", "nope", "BDT"]);
        assert_eq!(found, vec![Some(&USD), None, Some(&BDT)]);
    }

    #[test]
    fn country_currency() {
        assert_eq!(currency_for_country("bd"), Ok(&BDT));
        assert_eq!(
            currency_for_country("QQ"),
            Err(Error::UnknownCountry("QQ".into()))
        );
    }

    #[test]
    fn builtin_tables_are_consistent() {
        assert_eq!(StaticRegistry::builtin().validate(), Ok(()));
    }

    #[test]
    fn custom_tables_validate() {
        static CURRENCIES: [&CurrencyMetadata; 1] = [&XTS];
        static COUNTRIES: [&CountryMetadata; 1] = [&ATLANTIS];
        let registry = StaticRegistry::new(&CURRENCIES, &COUNTRIES);
        assert_eq!(registry.validate(), Ok(()));
        assert_eq!(registry.currency_for_country("xa"), Ok(&XTS));
        assert_eq!(registry.currency("USD"), None);
    }

    #[test]
    fn dangling_currency_is_reported() {
        static CURRENCIES: [&CurrencyMetadata; 1] = [&XTS];
        static COUNTRIES: [&CountryMetadata; 2] = [&ATLANTIS, &LEMURIA];
        let registry = StaticRegistry::new(&CURRENCIES, &COUNTRIES);
        let expected = Error::DanglingCurrency {
            country: "XL".into(),
            currency: "XLM".into(),
        };
        assert_eq!(registry.validate(), Err(expected.clone()));
        assert_eq!(registry.currency_for_country("XL"), Err(expected));
    }

    #[test]
    fn duplicate_codes_are_reported() {
        static CURRENCIES: [&CurrencyMetadata; 2] = [&XTS, &XTS];
        static COUNTRIES: [&CountryMetadata; 1] = [&ATLANTIS];
        let registry = StaticRegistry::new(&CURRENCIES, &COUNTRIES);
        assert_eq!(
            registry.validate(),
            Err(Error::DuplicateCode {
                table: "currency",
                code: "XTS".into(),
            })
        );
    }
}
