//! Authentication manager and its builder

use super::{AuthenticationProvider, TokenAuthenticationProvider, UsernamePasswordAuthenticationProvider};
use crate::auth::password::PasswordVerifier;
use crate::auth::token::TokenManager;
use crate::core::models::{Authentication, AuthenticationKind, AuthenticationRequest};
use crate::storage::IdentityProvider;
use crate::utils::error::{Result, SecurityError};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Routes authentication requests through an ordered provider chain
#[derive(Clone)]
pub struct AuthenticationManager {
    providers: Vec<Arc<dyn AuthenticationProvider>>,
    tokens: TokenManager,
}

impl AuthenticationManager {
    pub fn builder(tokens: TokenManager) -> AuthenticationManagerBuilder {
        AuthenticationManagerBuilder::new(tokens)
    }

    /// Username/password and token providers, both kinds required
    pub fn with_defaults(
        identities: Arc<dyn IdentityProvider>,
        verifier: Arc<dyn PasswordVerifier>,
        tokens: TokenManager,
    ) -> Result<Self> {
        Self::builder(tokens.clone())
            .provider(Arc::new(UsernamePasswordAuthenticationProvider::new(
                identities.clone(),
                verifier,
                tokens.clone(),
            )))
            .provider(Arc::new(TokenAuthenticationProvider::new(identities, tokens)))
            .require_all()
            .build()
    }

    pub fn token_manager(&self) -> &TokenManager {
        &self.tokens
    }

    /// Authenticate with the first provider supporting the request kind
    pub async fn login(&self, request: &AuthenticationRequest) -> Result<Authentication> {
        let kind = request.kind();
        let Some(provider) = self.providers.iter().find(|p| p.supports(kind)) else {
            warn!("No authentication provider supports {}", kind);
            return Err(SecurityError::UnsupportedAuthenticationRequest(kind.to_string()));
        };

        debug!("Authenticating {} request with {}", kind, provider.name());
        match provider.authenticate(request).await {
            Ok(authentication) => Ok(authentication),
            Err(e) => {
                warn!("Authentication failed via {}: {}", provider.name(), e);
                Err(e)
            }
        }
    }

    /// Revoke the token; unknown or missing tokens are accepted
    pub async fn logout(&self, token: Option<&str>) -> Result<()> {
        self.tokens.revoke(token).await
    }
}

impl std::fmt::Debug for AuthenticationManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<_> = self.providers.iter().map(|p| p.name()).collect();
        f.debug_struct("AuthenticationManager")
            .field("providers", &names)
            .finish_non_exhaustive()
    }
}

/// Assembles an [`AuthenticationManager`], checking that every required
/// kind is served by exactly one provider
pub struct AuthenticationManagerBuilder {
    providers: Vec<Arc<dyn AuthenticationProvider>>,
    required: HashSet<AuthenticationKind>,
    tokens: TokenManager,
}

impl AuthenticationManagerBuilder {
    pub fn new(tokens: TokenManager) -> Self {
        Self {
            providers: Vec::new(),
            required: HashSet::new(),
            tokens,
        }
    }

    /// Append a provider; registration order is routing order
    pub fn provider(mut self, provider: Arc<dyn AuthenticationProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    pub fn require(mut self, kind: AuthenticationKind) -> Self {
        self.required.insert(kind);
        self
    }

    pub fn require_all(self) -> Self {
        AuthenticationKind::ALL
            .into_iter()
            .fold(self, |builder, kind| builder.require(kind))
    }

    pub fn build(self) -> Result<AuthenticationManager> {
        for kind in &self.required {
            let count = self.providers.iter().filter(|p| p.supports(*kind)).count();
            match count {
                1 => {}
                0 => {
                    return Err(SecurityError::config(format!(
                        "No authentication provider supports {}",
                        kind
                    )));
                }
                n => {
                    return Err(SecurityError::config(format!(
                        "{} authentication providers support {}, expected exactly one",
                        n, kind
                    )));
                }
            }
        }

        info!(
            "Authentication manager ready with {} providers",
            self.providers.len()
        );
        Ok(AuthenticationManager {
            providers: self.providers,
            tokens: self.tokens,
        })
    }
}
