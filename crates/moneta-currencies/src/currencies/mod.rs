//! Built-in currency records, organized by region.

pub mod africa;
pub mod america;
pub mod asia;
pub mod europe;
pub mod oceania;

pub use africa::*;
pub use america::*;
pub use asia::*;
pub use europe::*;
pub use oceania::*;

use crate::currency::CurrencyMetadata;

/// Every built-in currency record.
pub static ALL: &[&CurrencyMetadata] = &[
    &ZAR, &NGN, &EGP, &KES, &MAD, &GHS, &USD, &CAD, &MXN, &BRL, &ARS, &CLP, &COP, &BDT, &INR, &PKR,
    &NPR, &LKR, &JPY, &CNY, &KRW, &HKD, &SGD, &THB, &IDR, &MYR, &PHP, &VND, &AED, &SAR, &ILS, &EUR,
    &GBP, &CHF, &SEK, &NOK, &DKK, &PLN, &CZK, &HUF, &TRY, &RUB, &AUD, &NZD,
];
