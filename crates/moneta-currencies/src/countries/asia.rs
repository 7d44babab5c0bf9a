//! Asian countries.

use crate::country::CountryMetadata;

/// Bangladesh.
pub static BD: CountryMetadata = CountryMetadata {
    code: "BD",
    name: "Bangladesh",
    currency_code: "BDT",
};

/// India.
pub static IN: CountryMetadata = CountryMetadata {
    code: "IN",
    name: "India",
    currency_code: "INR",
};

/// Pakistan.
pub static PK: CountryMetadata = CountryMetadata {
    code: "PK",
    name: "Pakistan",
    currency_code: "PKR",
};

/// Nepal.
pub static NP: CountryMetadata = CountryMetadata {
    code: "NP",
    name: "Nepal",
    currency_code: "NPR",
};

/// Sri Lanka.
pub static LK: CountryMetadata = CountryMetadata {
    code: "LK",
    name: "Sri Lanka",
    currency_code: "LKR",
};

/// Japan.
pub static JP: CountryMetadata = CountryMetadata {
    code: "JP",
    name: "Japan",
    currency_code: "JPY",
};

/// China.
pub static CN: CountryMetadata = CountryMetadata {
    code: "CN",
    name: "China",
    currency_code: "CNY",
};

/// South Korea.
pub static KR: CountryMetadata = CountryMetadata {
    code: "KR",
    name: "South Korea",
    currency_code: "KRW",
};

/// Hong Kong.
pub static HK: CountryMetadata = CountryMetadata {
    code: "HK",
    name: "Hong Kong",
    currency_code: "HKD",
};

/// Singapore.
pub static SG: CountryMetadata = CountryMetadata {
    code: "SG",
    name: "Singapore",
    currency_code: "SGD",
};

/// Thailand.
pub static TH: CountryMetadata = CountryMetadata {
    code: "TH",
    name: "Thailand",
    currency_code: "THB",
};

/// Indonesia.
pub static ID: CountryMetadata = CountryMetadata {
    code: "ID",
    name: "Indonesia",
    currency_code: "IDR",
};

/// Malaysia.
pub static MY: CountryMetadata = CountryMetadata {
    code: "MY",
    name: "Malaysia",
    currency_code: "MYR",
};

/// Philippines.
pub static PH: CountryMetadata = CountryMetadata {
    code: "PH",
    name: "Philippines",
    currency_code: "PHP",
};

/// Vietnam.
pub static VN: CountryMetadata = CountryMetadata {
    code: "VN",
    name: "Vietnam",
    currency_code: "VND",
};

/// United Arab Emirates.
pub static AE: CountryMetadata = CountryMetadata {
    code: "AE",
    name: "United Arab Emirates",
    currency_code: "AED",
};

/// Saudi Arabia.
pub static SA: CountryMetadata = CountryMetadata {
    code: "SA",
    name: "Saudi Arabia",
    currency_code: "SAR",
};

/// Israel.
pub static IL: CountryMetadata = CountryMetadata {
    code: "IL",
    name: "Israel",
    currency_code: "ILS",
};
