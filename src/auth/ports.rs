//! Port contracts for token verification and role checks.

use async_trait::async_trait;
use thiserror::Error;

/// Result type for token-verification operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Decoded identity and role information derived from a validated token.
///
/// The structure behind the trait is deliberately opaque; callers may only
/// ask about role membership.
pub trait Claims: Send + Sync {
    /// Reports whether the identity carries the named role.
    fn has_role(&self, role: &str) -> bool;
}

/// Capability that validates an opaque bearer token.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Verifies the token and returns the claims it carries.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] when the token is missing, malformed,
    /// expired, or otherwise rejected by the identity provider.
    async fn verify(&self, token: &str) -> AuthResult<Box<dyn Claims>>;
}

/// Errors returned by token verification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// No token was supplied with the request.
    #[error("authentication token is missing")]
    MissingToken,

    /// The token was rejected as invalid or expired.
    #[error("invalid or expired authentication token")]
    InvalidToken,
}
