//! African countries.

use crate::country::CountryMetadata;

/// South Africa.
pub static ZA: CountryMetadata = CountryMetadata {
    code: "ZA",
    name: "South Africa",
    currency_code: "ZAR",
};

/// Namibia.
pub static NA: CountryMetadata = CountryMetadata {
    code: "NA",
    name: "Namibia",
    currency_code: "ZAR",
};

/// Nigeria.
pub static NG: CountryMetadata = CountryMetadata {
    code: "NG",
    name: "Nigeria",
    currency_code: "NGN",
};

/// Egypt.
pub static EG: CountryMetadata = CountryMetadata {
    code: "EG",
    name: "Egypt",
    currency_code: "EGP",
};

/// Kenya.
pub static KE: CountryMetadata = CountryMetadata {
    code: "KE",
    name: "Kenya",
    currency_code: "KES",
};

/// Morocco.
pub static MA: CountryMetadata = CountryMetadata {
    code: "MA",
    name: "Morocco",
    currency_code: "MAD",
};

/// Ghana.
pub static GH: CountryMetadata = CountryMetadata {
    code: "GH",
    name: "Ghana",
    currency_code: "GHS",
};
