//! Asynchronous access to reference data.
//!
//! Callers that resolve metadata from a backend (a service, a database, a
//! lazily fetched file) implement [`ReferenceDataSource`]; the amount
//! pipeline only ever sees the resolved record.  [`StaticRegistry`] answers
//! from memory.

use crate::country::CountryMetadata;
use crate::currency::CurrencyMetadata;
use crate::registry::StaticRegistry;
use async_trait::async_trait;
use moneta_core::errors::Result;

/// A fallible, possibly remote, lookup of currency and country records.
///
/// `Ok(None)` means the backend answered and has no such record; `Err`
/// means the backend could not answer.  Implementations own no retry or
/// timeout policy on behalf of the caller.
#[async_trait]
pub trait ReferenceDataSource: Send + Sync {
    /// Resolve one currency code.
    async fn currency(&self, code: &str) -> Result<Option<&'static CurrencyMetadata>>;

    /// Resolve one country code.
    async fn country(&self, code: &str) -> Result<Option<&'static CountryMetadata>>;

    /// Resolve several currency codes, preserving order.
    async fn currencies(&self, codes: &[&str]) -> Result<Vec<Option<&'static CurrencyMetadata>>> {
        let mut found = Vec::with_capacity(codes.len());
        for code in codes {
            found.push(self.currency(code).await?);
        }
        Ok(found)
    }
}

#[async_trait]
impl ReferenceDataSource for StaticRegistry {
    async fn currency(&self, code: &str) -> Result<Option<&'static CurrencyMetadata>> {
        Ok(StaticRegistry::currency(self, code))
    }

    async fn country(&self, code: &str) -> Result<Option<&'static CountryMetadata>> {
        Ok(StaticRegistry::country(self, code))
    }

    async fn currencies(&self, codes: &[&str]) -> Result<Vec<Option<&'static CurrencyMetadata>>> {
        Ok(StaticRegistry::currencies(self, codes.iter().copied()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currencies::{BDT, USD};
    use crate::countries::BD;

    #[tokio::test]
    async fn static_registry_answers_lookups() {
        let registry = StaticRegistry::builtin();
        assert_eq!(ReferenceDataSource::currency(registry, "USD").await, Ok(Some(&USD)));
        assert_eq!(ReferenceDataSource::currency(registry, "XXX").await, Ok(None));
        assert_eq!(ReferenceDataSource::country(registry, "bd").await, Ok(Some(&BD)));
    }

    #[tokio::test]
    async fn batch_lookup_through_the_trait() {
        let registry = StaticRegistry::builtin();
        let found = ReferenceDataSource::currencies(registry, &["USD", "BDT", "???"])
            .await
            .unwrap();
        assert_eq!(found, vec![Some(&USD), Some(&BDT), None]);
    }
}
