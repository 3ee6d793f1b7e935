//! Engine assembly
//!
//! [`SecurityEngine`] wires the token store, identity provider, ACL and
//! voters into the two managers. `from_config` gives the default in-memory
//! setup; the builder swaps in other collaborators.

use super::acl::{AclProvider, UrlAclProvider};
use super::authentication::AuthenticationManager;
use super::authorization::{
    AuthorizationManager, AuthorizationProvider, UrlAuthorizationProvider, Voter, default_voters,
};
use super::password::{DelegatingPasswordVerifier, PasswordVerifier};
use super::token::{SweeperHandle, TokenManager};
use crate::config::{AclConfig, Config};
use crate::core::models::{Authentication, AuthenticationRequest, Decision, Identity, ResourceRequest};
use crate::storage::{IdentityProvider, MemoryIdentityProvider, MemoryTokenStore, TokenStore};
use crate::utils::error::Result;
use chrono::Duration;
use std::sync::Arc;
use tracing::{info, warn};

/// Fully wired authentication and authorization engine
#[derive(Clone)]
pub struct SecurityEngine {
    tokens: TokenManager,
    identities: Arc<dyn IdentityProvider>,
    authentication: AuthenticationManager,
    authorization: AuthorizationManager,
}

impl SecurityEngine {
    pub fn builder() -> SecurityEngineBuilder {
        SecurityEngineBuilder::default()
    }

    /// Default in-memory engine described by `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::builder().config(config).build()
    }

    pub fn token_manager(&self) -> &TokenManager {
        &self.tokens
    }

    pub fn identity_provider(&self) -> &Arc<dyn IdentityProvider> {
        &self.identities
    }

    pub fn authentication_manager(&self) -> &AuthenticationManager {
        &self.authentication
    }

    pub fn authorization_manager(&self) -> &AuthorizationManager {
        &self.authorization
    }

    pub async fn login(&self, request: &AuthenticationRequest) -> Result<Authentication> {
        self.authentication.login(request).await
    }

    pub async fn logout(&self, token: Option<&str>) -> Result<()> {
        self.authentication.logout(token).await
    }

    /// Fails with `AuthorizationDenied` unless every provider grants
    pub async fn authorize(&self, identity: &Identity, resource: &ResourceRequest) -> Result<()> {
        self.authorization.check(identity, resource).await
    }

    pub fn start_sweeper(&self, interval: std::time::Duration) -> SweeperHandle {
        self.tokens.start_sweeper(interval)
    }
}

impl std::fmt::Debug for SecurityEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecurityEngine")
            .field("tokens", &self.tokens)
            .field("authentication", &self.authentication)
            .field("authorization", &self.authorization)
            .finish_non_exhaustive()
    }
}

/// Builder for [`SecurityEngine`]; unset collaborators get in-memory defaults
pub struct SecurityEngineBuilder {
    token_store: Option<Arc<dyn TokenStore>>,
    identity_provider: Option<Arc<dyn IdentityProvider>>,
    acl_provider: Option<Arc<dyn AclProvider>>,
    voters: Option<Vec<Arc<dyn Voter>>>,
    verifier: Option<Arc<dyn PasswordVerifier>>,
    acl_config: AclConfig,
    users: Vec<Identity>,
    ttl: Duration,
    default_decision: Decision,
}

impl Default for SecurityEngineBuilder {
    fn default() -> Self {
        Self {
            token_store: None,
            identity_provider: None,
            acl_provider: None,
            voters: None,
            verifier: None,
            acl_config: AclConfig::default(),
            users: Vec::new(),
            ttl: Duration::seconds(crate::config::default_ttl_secs() as i64),
            default_decision: Decision::Deny,
        }
    }
}

impl SecurityEngineBuilder {
    /// Take ttl, ACL rules, default decision and seed users from `config`
    pub fn config(mut self, config: &Config) -> Self {
        self.ttl = config.token().ttl();
        self.acl_config = config.acl().clone();
        self.default_decision = config.acl().default_decision.into();
        self.users = config.users().iter().map(|u| u.to_identity()).collect();
        self
    }

    pub fn token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.token_store = Some(store);
        self
    }

    pub fn identity_provider(mut self, provider: Arc<dyn IdentityProvider>) -> Self {
        self.identity_provider = Some(provider);
        self
    }

    pub fn acl_provider(mut self, provider: Arc<dyn AclProvider>) -> Self {
        self.acl_provider = Some(provider);
        self
    }

    pub fn voters(mut self, voters: Vec<Arc<dyn Voter>>) -> Self {
        self.voters = Some(voters);
        self
    }

    pub fn password_verifier(mut self, verifier: Arc<dyn PasswordVerifier>) -> Self {
        self.verifier = Some(verifier);
        self
    }

    /// Seed an identity into the default in-memory identity provider
    pub fn user(mut self, identity: Identity) -> Self {
        self.users.push(identity);
        self
    }

    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn default_decision(mut self, decision: Decision) -> Self {
        self.default_decision = decision;
        self
    }

    pub fn build(self) -> Result<SecurityEngine> {
        let store: Arc<dyn TokenStore> = match self.token_store {
            Some(store) => store,
            None => Arc::new(MemoryTokenStore::new()),
        };

        let identities: Arc<dyn IdentityProvider> = match self.identity_provider {
            Some(provider) => {
                if !self.users.is_empty() {
                    warn!(
                        "Ignoring {} seed users: a custom identity provider is configured",
                        self.users.len()
                    );
                }
                provider
            }
            None => Arc::new(self.users.into_iter().collect::<MemoryIdentityProvider>()),
        };

        let acl: Arc<dyn AclProvider> = match self.acl_provider {
            Some(provider) => provider,
            None => Arc::new(UrlAclProvider::from_config(&self.acl_config)?),
        };

        let voters = self.voters.unwrap_or_else(default_voters);

        let verifier: Arc<dyn PasswordVerifier> = match self.verifier {
            Some(verifier) => verifier,
            None => Arc::new(DelegatingPasswordVerifier),
        };

        let tokens = TokenManager::new(store, self.ttl);
        let authentication =
            AuthenticationManager::with_defaults(identities.clone(), verifier, tokens.clone())?;
        let url_authorization: Arc<dyn AuthorizationProvider> = Arc::new(
            UrlAuthorizationProvider::new(acl, voters).with_default_decision(self.default_decision),
        );
        let authorization = AuthorizationManager::new(vec![url_authorization]);

        info!("Security engine initialized");
        Ok(SecurityEngine {
            tokens,
            identities,
            authentication,
            authorization,
        })
    }
}
