use std::sync::Arc;

use crate::domain::quote::models::Quote;
use crate::domain::quote::models::Symbol;
use crate::quote::errors::QuoteError;
use crate::quote::ports::QuoteFetcher;

/// Domain service for authenticated quote lookups.
pub struct QuoteService<F>
where
    F: QuoteFetcher,
{
    fetcher: Arc<F>,
}

impl<F> QuoteService<F>
where
    F: QuoteFetcher,
{
    pub fn new(fetcher: Arc<F>) -> Self {
        Self { fetcher }
    }

    /// Look up the quote for a symbol.
    ///
    /// # Errors
    /// * `NoData` - Provider has no data for the symbol (all-zero
    ///   open/high/low response)
    /// * `Upstream` / `Unknown` - Propagated from the fetcher
    pub async fn get_quote(&self, symbol: &Symbol) -> Result<Quote, QuoteError> {
        let quote = self.fetcher.fetch(symbol).await?;

        if quote.has_no_data() {
            tracing::warn!(symbol = %symbol, "Provider returned no data for symbol");
            return Err(QuoteError::NoData(symbol.to_string()));
        }

        Ok(quote)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use mockall::mock;

    use super::*;

    mock! {
        pub TestQuoteFetcher {}

        #[async_trait]
        impl QuoteFetcher for TestQuoteFetcher {
            async fn fetch(&self, symbol: &Symbol) -> Result<Quote, QuoteError>;
        }
    }

    fn quote(symbol: &str, opening: f64, high: f64, low: f64) -> Quote {
        Quote {
            symbol: Symbol::new(symbol.to_string()).unwrap(),
            opening_price: opening,
            current_price: 152.50,
            high_price: high,
            low_price: low,
            previous_close: 150.00,
        }
    }

    #[tokio::test]
    async fn test_get_quote_success() {
        let mut fetcher = MockTestQuoteFetcher::new();
        fetcher
            .expect_fetch()
            .times(1)
            .returning(|_| Ok(quote("AAPL", 150.25, 153.00, 149.50)));

        let service = QuoteService::new(Arc::new(fetcher));
        let symbol = Symbol::new("AAPL".to_string()).unwrap();

        let result = service.get_quote(&symbol).await.expect("lookup failed");

        assert_eq!(result.symbol.as_str(), "AAPL");
        assert_eq!(result.opening_price, 150.25);
    }

    #[tokio::test]
    async fn test_get_quote_all_zero_is_no_data() {
        let mut fetcher = MockTestQuoteFetcher::new();
        fetcher
            .expect_fetch()
            .times(1)
            .returning(|_| Ok(quote("FAKE", 0.0, 0.0, 0.0)));

        let service = QuoteService::new(Arc::new(fetcher));
        let symbol = Symbol::new("FAKE".to_string()).unwrap();

        let result = service.get_quote(&symbol).await;

        assert!(matches!(result, Err(QuoteError::NoData(_))));
        assert_eq!(
            result.unwrap_err().to_string(),
            "No data found for symbol: FAKE"
        );
    }

    #[tokio::test]
    async fn test_get_quote_propagates_upstream_failure() {
        let mut fetcher = MockTestQuoteFetcher::new();
        fetcher
            .expect_fetch()
            .times(1)
            .returning(|_| Err(QuoteError::Upstream("status 500".to_string())));

        let service = QuoteService::new(Arc::new(fetcher));
        let symbol = Symbol::new("AAPL".to_string()).unwrap();

        let result = service.get_quote(&symbol).await;

        assert!(matches!(result, Err(QuoteError::Upstream(_))));
    }
}
