use std::fmt;

use crate::quote::errors::SymbolError;

/// Stock ticker symbol value type
///
/// Ensures the symbol is 1-5 ASCII uppercase letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol(String);

impl Symbol {
    const MAX_LENGTH: usize = 5;

    /// Create a new validated symbol.
    ///
    /// # Errors
    /// * `InvalidFormat` - Empty, too long, or not all uppercase letters
    pub fn new(symbol: String) -> Result<Self, SymbolError> {
        if symbol.is_empty()
            || symbol.len() > Self::MAX_LENGTH
            || !symbol.chars().all(|c| c.is_ascii_uppercase())
        {
            return Err(SymbolError::InvalidFormat(symbol));
        }
        Ok(Self(symbol))
    }

    /// Get symbol as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Daily quote for a symbol as reported by the upstream provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub symbol: Symbol,
    pub opening_price: f64,
    pub current_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub previous_close: f64,
}

impl Quote {
    /// The upstream reports unknown symbols as a quote with zero open,
    /// high, and low rather than an error status.
    pub fn has_no_data(&self) -> bool {
        self.opening_price == 0.0 && self.high_price == 0.0 && self.low_price == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_symbols() {
        assert!(Symbol::new("A".to_string()).is_ok());
        assert!(Symbol::new("AAPL".to_string()).is_ok());
        assert!(Symbol::new("GOOGL".to_string()).is_ok());
    }

    #[test]
    fn test_symbol_too_long() {
        assert!(Symbol::new("TOOLONG".to_string()).is_err());
    }

    #[test]
    fn test_symbol_rejects_lowercase() {
        assert!(Symbol::new("aapl".to_string()).is_err());
    }

    #[test]
    fn test_symbol_rejects_digits_and_empty() {
        assert!(Symbol::new("123".to_string()).is_err());
        assert!(Symbol::new(String::new()).is_err());
    }

    #[test]
    fn test_has_no_data() {
        let mut quote = Quote {
            symbol: Symbol::new("FAKE".to_string()).unwrap(),
            opening_price: 0.0,
            current_price: 0.0,
            high_price: 0.0,
            low_price: 0.0,
            previous_close: 0.0,
        };
        assert!(quote.has_no_data());

        quote.opening_price = 150.25;
        assert!(!quote.has_no_data());
    }
}
