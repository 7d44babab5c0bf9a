//! Built-in country records, organized by region.

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

use crate::country::CountryMetadata;

/// Every built-in country record.
pub static ALL: &[&CountryMetadata] = &[
    &ZA, &NA, &NG, &EG, &KE, &MA, &GH, &US, &CA, &MX, &BR, &AR, &CL, &CO, &EC, &SV, &BD, &IN, &PK,
    &NP, &LK, &JP, &CN, &KR, &HK, &SG, &TH, &ID, &MY, &PH, &VN, &AE, &SA, &IL, &DE, &FR, &IT, &ES,
    &NL, &BE, &AT, &IE, &PT, &FI, &GR, &GB, &CH, &LI, &SE, &NO, &DK, &PL, &CZ, &HU, &TR, &RU, &AU,
    &KI, &TV, &NZ,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_alpha_2() {
        for c in ALL {
            assert_eq!(c.code.len(), 2, "bad code {:?}", c.code);
            assert!(c.code.chars().all(|ch| ch.is_ascii_uppercase()), "bad code {}", c.code);
        }
    }

    #[test]
    fn shared_currencies() {
        assert_eq!(DE.currency_code, "EUR");
        assert_eq!(EC.currency_code, "USD");
        assert_eq!(KI.currency_code, AU.currency_code);
    }
}
