//! European countries.

use crate::country::CountryMetadata;

/// Germany.
pub static DE: CountryMetadata = CountryMetadata {
    code: "DE",
    name: "Germany",
    currency_code: "EUR",
};

/// France.
pub static FR: CountryMetadata = CountryMetadata {
    code: "FR",
    name: "France",
    currency_code: "EUR",
};

/// Italy.
pub static IT: CountryMetadata = CountryMetadata {
    code: "IT",
    name: "Italy",
    currency_code: "EUR",
};

/// Spain.
pub static ES: CountryMetadata = CountryMetadata {
    code: "ES",
    name: "Spain",
    currency_code: "EUR",
};

/// Netherlands.
pub static NL: CountryMetadata = CountryMetadata {
    code: "NL",
    name: "Netherlands",
    currency_code: "EUR",
};

/// Belgium.
pub static BE: CountryMetadata = CountryMetadata {
    code: "BE",
    name: "Belgium",
    currency_code: "EUR",
};

/// Austria.
pub static AT: CountryMetadata = CountryMetadata {
    code: "AT",
    name: "Austria",
    currency_code: "EUR",
};

/// Ireland.
pub static IE: CountryMetadata = CountryMetadata {
    code: "IE",
    name: "Ireland",
    currency_code: "EUR",
};

/// Portugal.
pub static PT: CountryMetadata = CountryMetadata {
    code: "PT",
    name: "Portugal",
    currency_code: "EUR",
};

/// Finland.
pub static FI: CountryMetadata = CountryMetadata {
    code: "FI",
    name: "Finland",
    currency_code: "EUR",
};

/// Greece.
pub static GR: CountryMetadata = CountryMetadata {
    code: "GR",
    name: "Greece",
    currency_code: "EUR",
};

/// United Kingdom.
pub static GB: CountryMetadata = CountryMetadata {
    code: "GB",
    name: "United Kingdom",
    currency_code: "GBP",
};

/// Switzerland.
pub static CH: CountryMetadata = CountryMetadata {
    code: "CH",
    name: "Switzerland",
    currency_code: "CHF",
};

/// Liechtenstein.
pub static LI: CountryMetadata = CountryMetadata {
    code: "LI",
    name: "Liechtenstein",
    currency_code: "CHF",
};

/// Sweden.
pub static SE: CountryMetadata = CountryMetadata {
    code: "SE",
    name: "Sweden",
    currency_code: "SEK",
};

/// Norway.
pub static NO: CountryMetadata = CountryMetadata {
    code: "NO",
    name: "Norway",
    currency_code: "NOK",
};

/// Denmark.
pub static DK: CountryMetadata = CountryMetadata {
    code: "DK",
    name: "Denmark",
    currency_code: "DKK",
};

/// Poland.
pub static PL: CountryMetadata = CountryMetadata {
    code: "PL",
    name: "Poland",
    currency_code: "PLN",
};

/// Czechia.
pub static CZ: CountryMetadata = CountryMetadata {
    code: "CZ",
    name: "Czechia",
    currency_code: "CZK",
};

/// Hungary.
pub static HU: CountryMetadata = CountryMetadata {
    code: "HU",
    name: "Hungary",
    currency_code: "HUF",
};

/// Turkey.
pub static TR: CountryMetadata = CountryMetadata {
    code: "TR",
    name: "Turkey",
    currency_code: "TRY",
};

/// Russia.
pub static RU: CountryMetadata = CountryMetadata {
    code: "RU",
    name: "Russia",
    currency_code: "RUB",
};
