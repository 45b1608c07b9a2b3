use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::quote::models::Quote;
use crate::domain::quote::models::Symbol;
use crate::identity::ports::UserRepository;
use crate::inbound::http::router::AppState;
use crate::quote::errors::QuoteError;
use crate::quote::ports::QuoteFetcher;

pub async fn get_quote<R, F>(
    State(state): State<AppState<R, F>>,
    Path(symbol): Path<String>,
) -> Result<ApiSuccess<QuoteResponseData>, ApiError>
where
    R: UserRepository,
    F: QuoteFetcher,
{
    let symbol = Symbol::new(symbol)
        .map_err(QuoteError::from)
        .map_err(ApiError::from)?;

    state
        .quote_service
        .get_quote(&symbol)
        .await
        .map_err(ApiError::from)
        .map(|ref quote| ApiSuccess::new(StatusCode::OK, quote.into()))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteResponseData {
    pub symbol: String,
    pub opening_price: f64,
    pub current_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub previous_close: f64,
}

impl From<&Quote> for QuoteResponseData {
    fn from(quote: &Quote) -> Self {
        Self {
            symbol: quote.symbol.as_str().to_string(),
            opening_price: quote.opening_price,
            current_price: quote.current_price,
            high_price: quote.high_price,
            low_price: quote.low_price,
            previous_close: quote.previous_close,
        }
    }
}
