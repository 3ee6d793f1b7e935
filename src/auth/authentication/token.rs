//! Bearer token authentication

use super::AuthenticationProvider;
use crate::auth::token::TokenManager;
use crate::core::models::{Authentication, AuthenticationKind, AuthenticationRequest};
use crate::storage::IdentityProvider;
use crate::utils::error::{Result, SecurityError};
use async_trait::async_trait;
use std::sync::Arc;

/// Validates a presented token and resolves its subject
pub struct TokenAuthenticationProvider {
    identities: Arc<dyn IdentityProvider>,
    tokens: TokenManager,
}

impl TokenAuthenticationProvider {
    pub fn new(identities: Arc<dyn IdentityProvider>, tokens: TokenManager) -> Self {
        Self { identities, tokens }
    }
}

#[async_trait]
impl AuthenticationProvider for TokenAuthenticationProvider {
    fn name(&self) -> &'static str {
        "token"
    }

    fn supports(&self, kind: AuthenticationKind) -> bool {
        kind == AuthenticationKind::TokenValue
    }

    async fn authenticate(&self, request: &AuthenticationRequest) -> Result<Authentication> {
        let AuthenticationRequest::TokenValue { token } = request else {
            return Err(SecurityError::UnsupportedAuthenticationRequest(
                request.kind().to_string(),
            ));
        };

        let token = self.tokens.validate(token).await?;

        // The principal may have been removed after the token was issued
        let identity = self
            .identities
            .find_by_principal(&token.subject)
            .await
            .map_err(SecurityError::into_store_failure)?
            .ok_or_else(|| SecurityError::identity_not_found(token.subject.as_str()))?;

        Ok(Authentication::new(identity, Some(token)))
    }
}
