use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;

use super::claims::Claims;
use super::errors::JwtError;

/// Creates signed, time-limited bearer tokens.
///
/// Tokens are stateless: the issuer keeps no record of what it has issued,
/// so rotating the secret invalidates every outstanding token at once.
/// Uses HS256 (HMAC with SHA-256).
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    algorithm: Algorithm,
    ttl_minutes: i64,
}

impl TokenIssuer {
    /// Create a new token issuer.
    ///
    /// # Arguments
    /// * `secret` - Signing key; should be at least 256 bits for HS256 and
    ///   sourced from the environment or a vault, never from code
    /// * `ttl_minutes` - Minutes from issuance until tokens expire
    pub fn new(secret: &[u8], ttl_minutes: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl_minutes,
        }
    }

    /// Issue a signed token asserting `subject`, expiring after this
    /// issuer's TTL.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, subject: &str) -> Result<String, JwtError> {
        let claims = Claims::new(subject, self.ttl_minutes);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_produces_three_part_token() {
        let issuer = TokenIssuer::new(b"my_secret_key_at_least_32_bytes_long!", 30);

        let token = issuer.issue("alice@example.com").expect("Failed to issue");

        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_issued_tokens_differ_per_subject() {
        let issuer = TokenIssuer::new(b"my_secret_key_at_least_32_bytes_long!", 30);

        let first = issuer.issue("alice@example.com").expect("Failed to issue");
        let second = issuer.issue("bob@example.com").expect("Failed to issue");

        assert_ne!(first, second);
    }
}
