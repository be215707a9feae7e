//! Login/signup seam.
//!
//! The identity provider is an opaque external service: it either returns a
//! session or it fails. This module only validates credentials locally
//! before delegating, and maps provider failures into [`AuthError`] for the
//! UI layer. Nothing here persists sessions.

use secrecy::SecretString;
use thiserror::Error;
use tracing::info;

/// Authentication failures surfaced to the login/signup forms.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email is blank or not email-shaped.
    #[error("Invalid email address")]
    InvalidEmail,

    /// Password fails the minimum-length policy.
    #[error("Password must be at least {0} characters")]
    WeakPassword(usize),

    /// The provider rejected the credentials.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The provider call failed for some other reason.
    #[error("Auth provider error: {0}")]
    Provider(String),
}

const MIN_PASSWORD_LENGTH: usize = 8;

/// A session returned by the provider on success.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// Email the session was issued for.
    pub email: String,
    /// Opaque bearer token.
    pub access_token: SecretString,
}

/// The opaque identity provider.
pub trait AuthProvider {
    /// Exchange credentials for a session.
    fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<AuthSession, AuthError>> + Send;

    /// Register a new account and return its first session.
    fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<AuthSession, AuthError>> + Send;
}

/// Validate credentials locally, then sign in against the provider.
///
/// # Errors
///
/// Returns [`AuthError`] for malformed credentials or provider failure.
pub async fn sign_in<P: AuthProvider>(
    provider: &P,
    email: &str,
    password: &str,
) -> Result<AuthSession, AuthError> {
    validate(email, password)?;
    let session = provider.sign_in(email, password).await?;
    info!(email = %session.email, "Signed in");
    Ok(session)
}

/// Validate credentials locally, then register against the provider.
///
/// # Errors
///
/// Returns [`AuthError`] for malformed credentials or provider failure.
pub async fn sign_up<P: AuthProvider>(
    provider: &P,
    email: &str,
    password: &str,
) -> Result<AuthSession, AuthError> {
    validate(email, password)?;
    let session = provider.sign_up(email, password).await?;
    info!(email = %session.email, "Account created");
    Ok(session)
}

fn validate(email: &str, password: &str) -> Result<(), AuthError> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
        return Err(AuthError::InvalidEmail);
    }
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(MIN_PASSWORD_LENGTH));
    }
    Ok(())
}
