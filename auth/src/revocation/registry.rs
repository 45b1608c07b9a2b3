use std::collections::HashSet;
use std::sync::PoisonError;
use std::sync::RwLock;

/// Process-wide set of tokens that must be treated as invalid before their
/// natural expiry.
///
/// Entries are exact token strings and are never pruned: once revoked, a
/// token stays revoked until the process restarts or `clear` is called, so
/// the set grows with logout volume for the life of the process. Construct
/// one registry at startup and share it behind an `Arc`.
///
/// Safe under concurrent access; a `revoke` is visible to every
/// `is_revoked` call that starts after it returns.
#[derive(Debug, Default)]
pub struct RevocationRegistry {
    revoked: RwLock<HashSet<String>>,
}

impl RevocationRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a token as revoked. Idempotent.
    pub fn revoke(&self, token: &str) {
        self.revoked
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.to_string());
    }

    /// Check whether a token has been revoked.
    pub fn is_revoked(&self, token: &str) -> bool {
        self.revoked
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(token)
    }

    /// Forget every revocation. Administrative/test support only; never
    /// part of request handling.
    pub fn clear(&self) {
        self.revoked
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Number of revoked tokens currently held.
    pub fn len(&self) -> usize {
        self.revoked
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no tokens are revoked.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
