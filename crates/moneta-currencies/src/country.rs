//! `CountryMetadata` — a country and the currency it uses.

/// Immutable metadata for one country.
///
/// `currency_code` must name a currency in the same registry; see
/// [`StaticRegistry::validate`](crate::StaticRegistry::validate).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CountryMetadata {
    /// ISO 3166-1 alpha-2 code (e.g. "BD").
    pub code: &'static str,
    /// English short name.
    pub name: &'static str,
    /// ISO 4217 code of the currency in use.
    pub currency_code: &'static str,
}

impl std::fmt::Display for CountryMetadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}
