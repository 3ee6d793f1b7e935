//! Authorization manager

use super::AuthorizationProvider;
use crate::core::models::{Decision, Identity, ResourceRequest};
use crate::utils::error::{Result, SecurityError};
use std::sync::Arc;
use tracing::{debug, warn};

/// Grants only when every provider grants
#[derive(Clone, Default)]
pub struct AuthorizationManager {
    providers: Vec<Arc<dyn AuthorizationProvider>>,
}

impl AuthorizationManager {
    pub fn new(providers: Vec<Arc<dyn AuthorizationProvider>>) -> Self {
        Self { providers }
    }

    pub fn with_provider(mut self, provider: Arc<dyn AuthorizationProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    /// Evaluate providers in order, stopping at the first deny
    pub async fn authorize(&self, identity: &Identity, resource: &ResourceRequest) -> Result<Decision> {
        if self.providers.is_empty() {
            warn!("No authorization providers configured, denying {}", resource);
            return Ok(Decision::Deny);
        }

        for provider in &self.providers {
            let decision = provider
                .authorize(identity, resource)
                .await
                .map_err(|e| match e {
                    SecurityError::AuthorizationDenied(_) => e,
                    other => SecurityError::authorization(other.to_string()),
                })?;

            if decision == Decision::Deny {
                debug!("{} denied to {}", resource, identity.principal_id);
                return Ok(Decision::Deny);
            }
        }

        Ok(Decision::Grant)
    }

    /// Like [`AuthorizationManager::authorize`] with deny turned into an error
    pub async fn check(&self, identity: &Identity, resource: &ResourceRequest) -> Result<()> {
        match self.authorize(identity, resource).await? {
            Decision::Grant => Ok(()),
            Decision::Deny => Err(SecurityError::denied(format!(
                "{} may not access {}",
                identity.principal_id, resource
            ))),
        }
    }
}

impl std::fmt::Debug for AuthorizationManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthorizationManager")
            .field("providers", &self.providers.len())
            .finish()
    }
}
