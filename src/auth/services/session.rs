//! Registration, credential verification, and session token handling.
//!
//! The session boundary issues a signed, time-limited bearer token at login
//! and validates it on every task-lifecycle request. Passwords are hashed
//! with Argon2id and never leave this module in any other form.

use crate::auth::{
    domain::{AuthDomainError, Email, User, UserId},
    ports::{UserRepository, UserRepositoryError},
};
use argon2::Argon2;
use argon2::password_hash::{
    Error as PasswordHashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
    rand_core::OsRng,
};
use chrono::Duration;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Result type for auth service operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Service-level errors for registration, login, and token verification.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] AuthDomainError),

    /// The password was missing or empty.
    #[error("password must not be empty")]
    EmptyPassword,

    /// The email address is already registered.
    #[error("email already registered")]
    EmailTaken,

    /// The email/password pair did not match a registered user.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The bearer token is missing, malformed, expired, or badly signed.
    #[error("invalid or expired session token")]
    InvalidToken,

    /// Password hashing infrastructure failed.
    #[error("password hashing failed: {0}")]
    Hashing(String),

    /// Session token encoding failed.
    #[error("session token encoding failed: {0}")]
    TokenEncoding(String),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(UserRepositoryError),
}

impl From<UserRepositoryError> for AuthError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::DuplicateEmail(_) => Self::EmailTaken,
            other @ UserRepositoryError::Persistence(_) => Self::Repository(other),
        }
    }
}

/// JWT claims carried by a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user identifier as a UUID string.
    pub sub: String,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

/// Registration, login, and session token service.
#[derive(Clone)]
pub struct AuthService {
    repository: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock + Send + Sync>,
    jwt_secret: String,
    token_ttl: Duration,
}

impl AuthService {
    /// Creates a new auth service.
    #[must_use]
    pub fn new(
        repository: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock + Send + Sync>,
        jwt_secret: impl Into<String>,
        token_ttl: Duration,
    ) -> Self {
        Self {
            repository,
            clock,
            jwt_secret: jwt_secret.into(),
            token_ttl,
        }
    }

    /// Registers a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Domain`] when the email is malformed,
    /// [`AuthError::EmptyPassword`] when no password was supplied, and
    /// [`AuthError::EmailTaken`] when the address is already registered.
    pub async fn register(&self, email: &str, password: &str) -> AuthResult<User> {
        let address = Email::new(email)?;
        if password.is_empty() {
            return Err(AuthError::EmptyPassword);
        }

        let password_hash = hash_password(password)?;
        let user = User::new(address, password_hash, self.clock.as_ref());
        self.repository.insert(&user).await?;
        Ok(user)
    }

    /// Verifies credentials and issues a session token.
    ///
    /// Unknown email and wrong password are indistinguishable to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when the pair does not match
    /// a registered user.
    pub async fn login(&self, email: &str, password: &str) -> AuthResult<String> {
        let Ok(address) = Email::new(email) else {
            return Err(AuthError::InvalidCredentials);
        };
        let user = self
            .repository
            .find_by_email(&address)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, user.password_hash())?;
        self.issue_token(user.id())
    }

    /// Issues a signed session token for the given user.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::TokenEncoding`] when signing fails.
    pub fn issue_token(&self, user_id: UserId) -> AuthResult<String> {
        let issued_at = self.clock.utc().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: issued_at,
            exp: issued_at + self.token_ttl.num_seconds(),
        };
        jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|err| AuthError::TokenEncoding(err.to_string()))
    }

    /// Validates a session token and extracts the owner identity.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidToken`] when the token is malformed,
    /// expired, or carries a bad signature.
    pub fn verify_token(&self, token: &str) -> AuthResult<UserId> {
        let data = jsonwebtoken::decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|_| AuthError::InvalidToken)?;

        let uuid = Uuid::parse_str(&data.claims.sub).map_err(|_| AuthError::InvalidToken)?;
        Ok(UserId::from_uuid(uuid))
    }
}

/// Hashes a password with Argon2id and a fresh random salt.
fn hash_password(password: &str) -> AuthResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| AuthError::Hashing(err.to_string()))
}

/// Verifies a password against a stored PHC hash string.
fn verify_password(password: &str, stored_hash: &str) -> AuthResult<()> {
    let parsed = PasswordHash::new(stored_hash).map_err(|err| AuthError::Hashing(err.to_string()))?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|err| match err {
            PasswordHashError::Password => AuthError::InvalidCredentials,
            other => AuthError::Hashing(other.to_string()),
        })
}
