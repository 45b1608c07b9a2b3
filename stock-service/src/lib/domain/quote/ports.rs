use async_trait::async_trait;

use crate::domain::quote::models::Quote;
use crate::domain::quote::models::Symbol;
use crate::quote::errors::QuoteError;

/// Outbound port for the third-party quote provider.
#[async_trait]
pub trait QuoteFetcher: Send + Sync + 'static {
    /// Fetch the current quote for a symbol.
    ///
    /// # Errors
    /// * `Upstream` - Provider unreachable or returned a failure status
    /// * `Unknown` - Provider response could not be interpreted
    async fn fetch(&self, symbol: &Symbol) -> Result<Quote, QuoteError>;
}
