use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::RevocationRegistry;
use auth::TokenIssuer;
use auth::TokenValidator;
use chrono::Utc;

use crate::domain::identity::models::LoginCommand;
use crate::domain::identity::models::NewUser;
use crate::domain::identity::models::SignupCommand;
use crate::domain::identity::models::User;
use crate::identity::errors::AuthError;
use crate::identity::ports::AuthServicePort;
use crate::identity::ports::UserRepository;

/// Domain service orchestrating signup, login, per-request authentication,
/// and logout.
///
/// All collaborators are injected at construction. The revocation registry
/// is the only shared mutable state and is owned by the process, not this
/// service; it arrives behind an `Arc` so tests can observe and clear it.
pub struct AuthService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
    token_validator: TokenValidator,
    revocations: Arc<RevocationRegistry>,
}

impl<R> AuthService<R>
where
    R: UserRepository,
{
    /// Create a new authentication service with injected dependencies.
    pub fn new(
        repository: Arc<R>,
        password_hasher: PasswordHasher,
        token_issuer: TokenIssuer,
        token_validator: TokenValidator,
        revocations: Arc<RevocationRegistry>,
    ) -> Self {
        Self {
            repository,
            password_hasher,
            token_issuer,
            token_validator,
            revocations,
        }
    }
}

#[async_trait]
impl<R> AuthServicePort for AuthService<R>
where
    R: UserRepository,
{
    async fn signup(&self, command: SignupCommand) -> Result<User, AuthError> {
        let password_hash = self
            .password_hasher
            .hash(command.password.as_str())
            .map_err(|e| AuthError::Unknown(format!("Password hashing failed: {}", e)))?;

        let user = self
            .repository
            .create(NewUser {
                email: command.email,
                password_hash,
                created_at: Utc::now(),
            })
            .await?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(user)
    }

    async fn login(&self, command: LoginCommand) -> Result<String, AuthError> {
        let user = match self.repository.find_by_email(command.email.as_str()).await? {
            Some(user) => user,
            None => {
                tracing::warn!("Login failed: unknown email");
                return Err(AuthError::InvalidCredentials);
            }
        };

        if !self
            .password_hasher
            .verify(&command.password, &user.password_hash)
        {
            tracing::warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self
            .token_issuer
            .issue(user.email.as_str())
            .map_err(|e| AuthError::Unknown(format!("Token generation failed: {}", e)))?;

        tracing::info!(user_id = %user.id, "Login succeeded");

        Ok(token)
    }

    async fn authenticate(&self, token: &str) -> Result<User, AuthError> {
        // 1. Cryptographic validity: signature and expiry
        let claims = self.token_validator.validate(token).map_err(|e| {
            tracing::warn!("Token validation failed: {}", e);
            AuthError::InvalidToken
        })?;

        // 2. Administrative revocation, checked only for structurally valid
        // tokens so the two failure modes stay distinguishable
        if self.revocations.is_revoked(token) {
            return Err(AuthError::RevokedToken);
        }

        // 3. The subject must still resolve to a user record
        self.repository
            .find_by_email(&claims.sub)
            .await?
            .ok_or(AuthError::UserNotFound)
    }

    async fn logout(&self, token: &str) {
        self.revocations.revoke(token);
        tracing::info!(revoked_total = self.revocations.len(), "Token revoked");
    }
}
