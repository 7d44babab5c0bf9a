//! Oceanian countries.

use crate::country::CountryMetadata;

/// Australia.
pub static AU: CountryMetadata = CountryMetadata {
    code: "AU",
    name: "Australia",
    currency_code: "AUD",
};

/// Kiribati.
pub static KI: CountryMetadata = CountryMetadata {
    code: "KI",
    name: "Kiribati",
    currency_code: "AUD",
};

/// Tuvalu.
pub static TV: CountryMetadata = CountryMetadata {
    code: "TV",
    name: "Tuvalu",
    currency_code: "AUD",
};

/// New Zealand.
pub static NZ: CountryMetadata = CountryMetadata {
    code: "NZ",
    name: "New Zealand",
    currency_code: "NZD",
};
