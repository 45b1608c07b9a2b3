use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::identity::errors::EmailError;
use crate::identity::errors::PasswordPolicyError;

/// User aggregate entity.
///
/// Represents a registered account. Immutable after signup; there is no
/// update or delete path.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: EmailAddress,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// User unique identifier, generated by the storage layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser. Addresses are
/// compared case-sensitively and stored exactly as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Candidate password accepted by the signup policy.
///
/// Construction enforces: length >= 8, at least one letter, at least one
/// digit, checked in that order. Policy applies at signup only; login
/// never re-validates.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    const MIN_LENGTH: usize = 8;

    /// Validate a candidate password against the signup policy.
    ///
    /// # Errors
    /// * `TooShort` - Fewer than 8 characters
    /// * `MissingLetter` - No alphabetic character
    /// * `MissingDigit` - No numeric digit
    pub fn new(password: String) -> Result<Self, PasswordPolicyError> {
        if password.chars().count() < Self::MIN_LENGTH {
            return Err(PasswordPolicyError::TooShort);
        }
        if !password.chars().any(char::is_alphabetic) {
            return Err(PasswordPolicyError::MissingLetter);
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(PasswordPolicyError::MissingDigit);
        }
        Ok(Self(password))
    }

    /// Get password as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Never print the plaintext, not even in debug output
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Command to register a new user with validated fields.
#[derive(Debug)]
pub struct SignupCommand {
    pub email: EmailAddress,
    pub password: Password,
}

impl SignupCommand {
    pub fn new(email: EmailAddress, password: Password) -> Self {
        Self { email, password }
    }
}

/// Command to authenticate an existing user.
///
/// The password is the raw candidate string; the signup policy is not
/// re-applied here.
#[derive(Debug)]
pub struct LoginCommand {
    pub email: EmailAddress,
    pub password: String,
}

impl LoginCommand {
    pub fn new(email: EmailAddress, password: String) -> Self {
        Self { email, password }
    }
}

/// A user row about to be persisted; the id is assigned by storage.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: EmailAddress,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        assert!(Password::new("abc12345".to_string()).is_ok());
    }

    #[test]
    fn test_password_too_short() {
        let result = Password::new("a1".to_string());
        assert_eq!(result.unwrap_err(), PasswordPolicyError::TooShort);
    }

    #[test]
    fn test_password_missing_letter() {
        let result = Password::new("12345678".to_string());
        assert_eq!(result.unwrap_err(), PasswordPolicyError::MissingLetter);
    }

    #[test]
    fn test_password_missing_digit() {
        let result = Password::new("passwordonly".to_string());
        assert_eq!(result.unwrap_err(), PasswordPolicyError::MissingDigit);
    }

    #[test]
    fn test_password_rules_checked_in_priority_order() {
        // Violates both the length and letter rules; length wins
        let result = Password::new("1234567".to_string());
        assert_eq!(result.unwrap_err(), PasswordPolicyError::TooShort);
    }

    #[test]
    fn test_password_debug_is_redacted() {
        let password = Password::new("abc12345".to_string()).unwrap();
        assert_eq!(format!("{:?}", password), "Password(<redacted>)");
    }

    #[test]
    fn test_valid_email() {
        let email = EmailAddress::new("a@x.com".to_string()).unwrap();
        assert_eq!(email.as_str(), "a@x.com");
    }

    #[test]
    fn test_invalid_email() {
        assert!(EmailAddress::new("not-an-email".to_string()).is_err());
    }
}
