//! Static token verifier mapping configured tokens to role sets.

use crate::auth::ports::{AuthError, AuthResult, Claims, TokenVerifier};
use async_trait::async_trait;
use std::collections::HashMap;

/// Verifier backed by a fixed token-to-roles table.
///
/// Suitable for tests and single-operator deployments where the admin
/// token is provisioned through configuration. Anything unknown is
/// rejected as invalid.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenVerifier {
    tokens: HashMap<String, Vec<String>>,
}

impl StaticTokenVerifier {
    /// Creates a verifier that rejects every token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a verifier recognising a single token with the `admin` role.
    #[must_use]
    pub fn admin(token: impl Into<String>) -> Self {
        Self::new().with_token(token, ["admin".to_owned()])
    }

    /// Registers a token with the given role set.
    #[must_use]
    pub fn with_token(
        mut self,
        token: impl Into<String>,
        roles: impl IntoIterator<Item = String>,
    ) -> Self {
        self.tokens
            .insert(token.into(), roles.into_iter().collect());
        self
    }
}

#[async_trait]
impl TokenVerifier for StaticTokenVerifier {
    async fn verify(&self, token: &str) -> AuthResult<Box<dyn Claims>> {
        if token.is_empty() {
            return Err(AuthError::MissingToken);
        }
        let roles = self.tokens.get(token).ok_or(AuthError::InvalidToken)?;
        Ok(Box::new(StaticClaims {
            roles: roles.clone(),
        }))
    }
}

/// Claims carrying the role set looked up for a static token.
#[derive(Debug, Clone)]
struct StaticClaims {
    roles: Vec<String>,
}

impl Claims for StaticClaims {
    fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|held| held == role)
    }
}
