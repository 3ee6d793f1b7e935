//! Identity provider contract and in-memory implementation

use crate::core::models::Identity;
use crate::utils::error::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

/// Resolves identities by principal key
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn find_by_principal(&self, key: &str) -> Result<Option<Identity>>;
}

/// Identity provider backed by a concurrent map
#[derive(Debug, Default)]
pub struct MemoryIdentityProvider {
    identities: DashMap<String, Identity>,
}

impl MemoryIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) an identity
    pub fn insert(&self, identity: Identity) {
        debug!("Register identity: {}", identity.principal_id);
        self.identities
            .insert(identity.principal_id.clone(), identity);
    }

    /// Remove an identity, returning it if it was present
    pub fn remove(&self, principal_id: &str) -> Option<Identity> {
        self.identities.remove(principal_id).map(|(_, identity)| identity)
    }

    pub fn len(&self) -> usize {
        self.identities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }
}

impl FromIterator<Identity> for MemoryIdentityProvider {
    fn from_iter<I: IntoIterator<Item = Identity>>(iter: I) -> Self {
        let provider = Self::new();
        for identity in iter {
            provider.insert(identity);
        }
        provider
    }
}

#[async_trait]
impl IdentityProvider for MemoryIdentityProvider {
    async fn find_by_principal(&self, key: &str) -> Result<Option<Identity>> {
        Ok(self.identities.get(key).map(|entry| entry.value().clone()))
    }
}
