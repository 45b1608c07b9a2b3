//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure for services:
//! - Password hashing (Argon2id)
//! - JWT token issuance and validation
//! - In-process token revocation
//!
//! Services define their own domain-level authentication flows and compose
//! these building blocks. Cryptographic validity (signature, expiry) and
//! administrative revocation are deliberately separate concerns so each can
//! be tested and reasoned about on its own.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("wrong_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{TokenIssuer, TokenValidator};
//!
//! let secret = b"secret_key_at_least_32_bytes_long!";
//! let issuer = TokenIssuer::new(secret, 30);
//! let token = issuer.issue("alice@example.com").unwrap();
//!
//! let validator = TokenValidator::new(secret);
//! let claims = validator.validate(&token).unwrap();
//! assert_eq!(claims.sub, "alice@example.com");
//! ```
//!
//! ## Revocation
//! ```
//! use auth::RevocationRegistry;
//!
//! let registry = RevocationRegistry::new();
//! registry.revoke("some.jwt.token");
//! assert!(registry.is_revoked("some.jwt.token"));
//! ```

pub mod jwt;
pub mod password;
pub mod revocation;

// Re-export commonly used items
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::TokenIssuer;
pub use jwt::TokenValidator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use revocation::RevocationRegistry;
