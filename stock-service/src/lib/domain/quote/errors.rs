use thiserror::Error;

/// Error for Symbol validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SymbolError {
    #[error("Symbol must be 1-5 uppercase letters, got: {0}")]
    InvalidFormat(String),
}

/// Top-level error for quote lookups.
///
/// `Upstream` and `Unknown` carry internal detail for logging; their
/// display strings stay generic so nothing internal leaks to clients.
#[derive(Debug, Clone, Error)]
pub enum QuoteError {
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(#[from] SymbolError),

    #[error("No data found for symbol: {0}")]
    NoData(String),

    #[error("Unable to fetch stock data")]
    Upstream(String),

    #[error("An error occurred while fetching stock data")]
    Unknown(String),
}
