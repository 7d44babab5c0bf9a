//! Display by currency code.
//!
//! The lookup is the only step that may suspend; it runs first and the
//! pure [`display_for_currency`] runs on whatever record it returns.

use crate::amount::display_for_currency;
use crate::options::DisplayOptions;
use moneta_core::errors::Result;
use moneta_core::Real;
use moneta_currencies::{lookup_currency, ReferenceDataSource};

/// Resolve `code` through `source`, then display `amount` for it.
///
/// A code the source does not know yields the plain amount, as with
/// absent metadata.
///
/// # Errors
/// Whatever error `source` returns when it cannot answer.
pub async fn display_for_currency_code<S>(
    source: &S,
    amount: Real,
    code: &str,
    options: &DisplayOptions,
) -> Result<String>
where
    S: ReferenceDataSource + ?Sized,
{
    let currency = source.currency(code).await?;
    if currency.is_none() {
        log::debug!("currency {code:?} not found, displaying {amount} unformatted");
    }
    Ok(display_for_currency(amount, currency, options))
}

/// Display `amount` for a built-in currency code.
pub fn display_for_builtin_code(amount: Real, code: &str, options: &DisplayOptions) -> String {
    display_for_currency(amount, lookup_currency(code), options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use moneta_core::errors::Error;
    use moneta_currencies::{CountryMetadata, CurrencyMetadata, StaticRegistry};

    struct Offline;

    #[async_trait]
    impl ReferenceDataSource for Offline {
        async fn currency(&self, _code: &str) -> Result<Option<&'static CurrencyMetadata>> {
            Err(Error::Source("offline".into()))
        }

        async fn country(&self, _code: &str) -> Result<Option<&'static CountryMetadata>> {
            Err(Error::Source("offline".into()))
        }
    }

    #[tokio::test]
    async fn displays_through_registry() {
        let registry = StaticRegistry::builtin();
        let shown = display_for_currency_code(registry, 1.123, "BDT", &DisplayOptions::new())
            .await
            .unwrap();
        assert_eq!(shown, "Tk 2");
    }

    #[tokio::test]
    async fn unknown_code_falls_back_to_plain_amount() {
        let registry = StaticRegistry::builtin();
        let shown = display_for_currency_code(registry, 42.0, "ZZZ", &DisplayOptions::new())
            .await
            .unwrap();
        assert_eq!(shown, "42");
    }

    #[tokio::test]
    async fn source_failure_propagates() {
        let result = display_for_currency_code(&Offline, 42.0, "USD", &DisplayOptions::new()).await;
        assert_eq!(result, Err(Error::Source("offline".into())));
    }

    #[tokio::test]
    async fn works_with_trait_objects() {
        let source: Box<dyn ReferenceDataSource> = Box::new(StaticRegistry::default());
        let shown = display_for_currency_code(
            &*source,
            1234.1,
            "usd",
            &DisplayOptions::new().skip_fixed_decimals(true),
        )
        .await
        .unwrap();
        assert_eq!(shown, "$ 1,234.1");
    }

    #[test]
    fn builtin_code_shortcut() {
        assert_eq!(
            display_for_builtin_code(1123.0, "BDT", &DisplayOptions::new().standard_symbol(true)),
            "৳ 1,123"
        );
        assert_eq!(display_for_builtin_code(7.0, "nope", &DisplayOptions::new()), "7");
    }
}
