use async_trait::async_trait;

use crate::domain::identity::models::LoginCommand;
use crate::domain::identity::models::NewUser;
use crate::domain::identity::models::SignupCommand;
use crate::domain::identity::models::User;
use crate::identity::errors::AuthError;

/// Port for authentication domain service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user with validated credentials.
    ///
    /// # Errors
    /// * `DuplicateEmail` - Email is already registered
    /// * `Database` - Storage operation failed
    async fn signup(&self, command: SignupCommand) -> Result<User, AuthError>;

    /// Verify credentials and issue a bearer token.
    ///
    /// # Returns
    /// Signed access token asserting the user's email
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (identical
    ///   error for both)
    /// * `Database` - Storage operation failed
    async fn login(&self, command: LoginCommand) -> Result<String, AuthError>;

    /// Run the full per-request authentication pipeline for a presented
    /// token: structural validation, revocation check, subject lookup.
    ///
    /// # Errors
    /// * `InvalidToken` - Signature invalid, payload malformed, or expired
    /// * `RevokedToken` - Token was explicitly logged out
    /// * `UserNotFound` - Token subject no longer has a user record
    /// * `Database` - Storage operation failed
    async fn authenticate(&self, token: &str) -> Result<User, AuthError>;

    /// Revoke a presented token. Idempotent and infallible; a token past
    /// its expiry may still be revoked.
    async fn logout(&self, token: &str);
}

/// Persistence operations for the user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// Uniqueness is enforced by the storage layer itself (a unique
    /// constraint on email), not by a pre-check, so concurrent signups for
    /// the same email cannot both succeed.
    ///
    /// # Errors
    /// * `DuplicateEmail` - Email is already registered
    /// * `Database` - Storage operation failed
    async fn create(&self, user: NewUser) -> Result<User, AuthError>;

    /// Retrieve a user by email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Database` - Storage operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError>;
}
