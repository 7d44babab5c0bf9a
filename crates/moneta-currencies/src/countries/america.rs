//! Countries of the Americas.

use crate::country::CountryMetadata;

/// United States.
pub static US: CountryMetadata = CountryMetadata {
    code: "US",
    name: "United States",
    currency_code: "USD",
};

/// Canada.
pub static CA: CountryMetadata = CountryMetadata {
    code: "CA",
    name: "Canada",
    currency_code: "CAD",
};

/// Mexico.
pub static MX: CountryMetadata = CountryMetadata {
    code: "MX",
    name: "Mexico",
    currency_code: "MXN",
};

/// Brazil.
pub static BR: CountryMetadata = CountryMetadata {
    code: "BR",
    name: "Brazil",
    currency_code: "BRL",
};

/// Argentina.
pub static AR: CountryMetadata = CountryMetadata {
    code: "AR",
    name: "Argentina",
    currency_code: "ARS",
};

/// Chile.
pub static CL: CountryMetadata = CountryMetadata {
    code: "CL",
    name: "Chile",
    currency_code: "CLP",
};

/// Colombia.
pub static CO: CountryMetadata = CountryMetadata {
    code: "CO",
    name: "Colombia",
    currency_code: "COP",
};

/// Ecuador.
pub static EC: CountryMetadata = CountryMetadata {
    code: "EC",
    name: "Ecuador",
    currency_code: "USD",
};

/// El Salvador.
pub static SV: CountryMetadata = CountryMetadata {
    code: "SV",
    name: "El Salvador",
    currency_code: "USD",
};
