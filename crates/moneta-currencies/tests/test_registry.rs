//! Integration tests over the built-in reference tables.

use std::collections::HashSet;

use moneta_currencies::{
    all_countries, all_currencies, currency_for_country, lookup_country, lookup_currency,
    StaticRegistry,
};

// ─── Cross-table invariant ────────────────────────────────────────────────────

#[test]
fn every_country_currency_resolves() {
    let left_out: Vec<&str> = all_countries()
        .iter()
        .filter(|country| lookup_currency(country.currency_code).is_none())
        .map(|country| country.code)
        .collect();
    assert!(left_out.is_empty(), "countries with unknown currency: {left_out:?}");
}

#[test]
fn builtin_registry_validates() {
    StaticRegistry::builtin()
        .validate()
        .expect("built-in tables must be consistent");
}

// ─── Table shape ──────────────────────────────────────────────────────────────

#[test]
fn codes_are_unique() {
    let currency_codes: HashSet<_> = all_currencies().iter().map(|c| c.code).collect();
    assert_eq!(currency_codes.len(), all_currencies().len());

    let country_codes: HashSet<_> = all_countries().iter().map(|c| c.code).collect();
    assert_eq!(country_codes.len(), all_countries().len());
}

#[test]
fn every_record_is_reachable_by_code() {
    for currency in all_currencies() {
        assert_eq!(lookup_currency(currency.code), Some(*currency));
        assert_eq!(lookup_currency(&currency.code.to_lowercase()), Some(*currency));
    }
    for country in all_countries() {
        assert_eq!(lookup_country(country.code), Some(*country));
    }
}

#[test]
fn south_asian_countries_group_by_two() {
    use moneta_core::DigitGrouping;

    for code in ["BD", "IN", "PK", "NP"] {
        let currency = currency_for_country(code).unwrap();
        assert_eq!(
            currency.digit_grouping,
            DigitGrouping::Two,
            "{code} should use two-digit grouping"
        );
    }
    assert_eq!(
        currency_for_country("US").unwrap().digit_grouping,
        DigitGrouping::Three
    );
}

#[cfg(feature = "serde")]
#[test]
fn currency_serializes_with_numeric_grouping() {
    let json = serde_json::to_value(lookup_currency("BDT").unwrap()).unwrap();
    assert_eq!(json["code"], "BDT");
    assert_eq!(json["decimals_compact"], 0);
    assert_eq!(json["digit_grouping"], 2);
    assert_eq!(json["symbol"], "৳");
}
