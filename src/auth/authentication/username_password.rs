//! Username/password authentication

use super::AuthenticationProvider;
use crate::auth::password::PasswordVerifier;
use crate::auth::token::TokenManager;
use crate::core::models::{Authentication, AuthenticationKind, AuthenticationRequest};
use crate::storage::IdentityProvider;
use crate::utils::error::{Result, SecurityError};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Verifies a username and secret, then issues a token
pub struct UsernamePasswordAuthenticationProvider {
    identities: Arc<dyn IdentityProvider>,
    verifier: Arc<dyn PasswordVerifier>,
    tokens: TokenManager,
}

impl UsernamePasswordAuthenticationProvider {
    pub fn new(
        identities: Arc<dyn IdentityProvider>,
        verifier: Arc<dyn PasswordVerifier>,
        tokens: TokenManager,
    ) -> Self {
        Self {
            identities,
            verifier,
            tokens,
        }
    }
}

#[async_trait]
impl AuthenticationProvider for UsernamePasswordAuthenticationProvider {
    fn name(&self) -> &'static str {
        "username_password"
    }

    fn supports(&self, kind: AuthenticationKind) -> bool {
        kind == AuthenticationKind::Credentials
    }

    async fn authenticate(&self, request: &AuthenticationRequest) -> Result<Authentication> {
        let AuthenticationRequest::Credentials { username, secret } = request else {
            return Err(SecurityError::UnsupportedAuthenticationRequest(
                request.kind().to_string(),
            ));
        };

        let identity = self
            .identities
            .find_by_principal(username)
            .await
            .map_err(SecurityError::into_store_failure)?
            .ok_or_else(|| SecurityError::identity_not_found(username.as_str()))?;

        let stored = identity
            .secret
            .as_deref()
            .ok_or_else(|| SecurityError::invalid_credentials(username.as_str()))?;

        if !self.verifier.verify(secret, stored)? {
            debug!("Secret mismatch for {}", username);
            return Err(SecurityError::invalid_credentials(username.as_str()));
        }

        let token = self.tokens.issue(&identity).await?;
        info!("User {} logged in", identity.principal_id);
        Ok(Authentication::new(identity, Some(token)))
    }
}
