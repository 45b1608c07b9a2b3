use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::quote::models::Quote;
use crate::domain::quote::models::Symbol;
use crate::quote::errors::QuoteError;
use crate::quote::ports::QuoteFetcher;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Finnhub quote API client.
///
/// The only network-bound step in a request pipeline; holds no shared
/// state, so nothing in the core is blocked while a call is in flight.
pub struct FinnhubClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl FinnhubClient {
    /// Create a new client against `base_url` (no trailing slash).
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, anyhow::Error> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }
}

/// Wire shape of Finnhub's `/quote` response; missing fields read as zero,
/// matching how the provider reports unknown symbols.
#[derive(Debug, Deserialize)]
struct FinnhubQuote {
    #[serde(default)]
    o: f64,
    #[serde(default)]
    c: f64,
    #[serde(default)]
    h: f64,
    #[serde(default)]
    l: f64,
    #[serde(default)]
    pc: f64,
}

#[async_trait]
impl QuoteFetcher for FinnhubClient {
    async fn fetch(&self, symbol: &Symbol) -> Result<Quote, QuoteError> {
        let url = format!("{}/quote", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("symbol", symbol.as_str()), ("token", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                tracing::error!(symbol = %symbol, error = %e, "Quote provider unreachable");
                QuoteError::Upstream(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(symbol = %symbol, status = status.as_u16(), "Quote provider returned failure status");
            return Err(QuoteError::Upstream(format!("status {}", status)));
        }

        let data: FinnhubQuote = response.json().await.map_err(|e| {
            tracing::error!(symbol = %symbol, error = %e, "Quote provider response did not parse");
            QuoteError::Unknown(e.to_string())
        })?;

        Ok(Quote {
            symbol: symbol.clone(),
            opening_price: data.o,
            current_price: data.c,
            high_price: data.h,
            low_price: data.l,
            previous_close: data.pc,
        })
    }
}
