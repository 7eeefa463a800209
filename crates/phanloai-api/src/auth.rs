//! Email/password authentication and session issuance.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Duration;
use std::sync::Arc;
use thiserror::Error;

use phanloai_persist::{CredentialStore, PersistError, Session, SessionStore, User};

use crate::error::ApiError;

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password must be at least {MIN_PASSWORD_LENGTH} characters long")]
    WeakPassword,

    #[error("An account with this email already exists")]
    EmailTaken,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Failed to hash password")]
    PasswordHash,

    #[error(transparent)]
    Persistence(PersistError),
}

impl From<PersistError> for AuthError {
    fn from(e: PersistError) -> Self {
        match e {
            PersistError::DuplicateEmail(_) => AuthError::EmailTaken,
            other => AuthError::Persistence(other),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::InvalidEmail | AuthError::WeakPassword => {
                ApiError::BadRequest(e.to_string())
            }
            AuthError::EmailTaken => ApiError::EmailTaken,
            AuthError::InvalidCredentials => ApiError::InvalidCredentials,
            AuthError::PasswordHash => ApiError::Internal(anyhow::anyhow!(e)),
            AuthError::Persistence(persist) => ApiError::Internal(persist.into()),
        }
    }
}

/// Registration, login and token resolution over the credential and
/// session stores.
pub struct AuthService {
    credentials: Arc<dyn CredentialStore>,
    sessions: Arc<dyn SessionStore>,
    session_ttl: Duration,
}

impl AuthService {
    pub fn new(
        credentials: Arc<dyn CredentialStore>,
        sessions: Arc<dyn SessionStore>,
        session_ttl: Duration,
    ) -> Self {
        Self {
            credentials,
            sessions,
            session_ttl,
        }
    }

    /// Register a new user with email and password.
    pub async fn register(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let email = email.trim();
        if !is_valid_email(email) {
            return Err(AuthError::InvalidEmail);
        }
        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::WeakPassword);
        }

        let password_hash = hash_password(password)?;
        let user = self.credentials.create_user(email, &password_hash).await?;

        tracing::info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    /// Verify credentials and issue a session.
    ///
    /// Wrong email and wrong password are indistinguishable to the
    /// caller.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let user = self
            .credentials
            .find_user_by_email(email.trim())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &user.password_hash)?;

        let session = self
            .sessions
            .create_session(&user.id, self.session_ttl)
            .await?;

        tracing::info!(user_id = %user.id, "session issued");
        Ok(session)
    }

    /// Resolve a bearer token to its session, if valid and unexpired.
    pub async fn authenticate(&self, token: &str) -> Result<Option<Session>, AuthError> {
        Ok(self.sessions.find_session(token).await?)
    }

    /// Drop a session. Unknown tokens are not an error.
    pub async fn logout(&self, token: &str) -> Result<(), AuthError> {
        self.sessions.delete_session(token).await?;
        Ok(())
    }
}

/// Same shape the original enforced: local part, '@', domain with a dot,
/// no whitespace anywhere.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((name, tld)) => !name.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a stored hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}
