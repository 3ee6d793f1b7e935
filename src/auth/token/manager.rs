//! Token manager implementation

use super::sweeper::SweeperHandle;
use crate::config::TokenConfig;
use crate::core::models::{Identity, Token, mask_token};
use crate::storage::TokenStore;
use crate::utils::auth::generate_token_value;
use crate::utils::error::{Result, SecurityError};
use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Issues, validates, revokes and sweeps tokens over a [`TokenStore`]
#[derive(Clone)]
pub struct TokenManager {
    store: Arc<dyn TokenStore>,
    ttl: Duration,
}

impl TokenManager {
    pub fn new(store: Arc<dyn TokenStore>, ttl: Duration) -> Self {
        info!("Token manager created with ttl {}s", ttl.num_seconds());
        Self { store, ttl }
    }

    pub fn from_config(store: Arc<dyn TokenStore>, config: &TokenConfig) -> Self {
        Self::new(store, config.ttl())
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn store(&self) -> &Arc<dyn TokenStore> {
        &self.store
    }

    /// Issue a fresh token for `identity`, valid for the configured ttl
    pub async fn issue(&self, identity: &Identity) -> Result<Token> {
        let now = Utc::now();
        let token = Token::new(
            generate_token_value(),
            identity.principal_id.clone(),
            now,
            now + self.ttl,
        );

        self.store
            .put(token.clone())
            .await
            .map_err(SecurityError::into_store_failure)?;

        debug!("Issued token {} for {}", token.masked(), token.subject);
        Ok(token)
    }

    /// Look up a token and reject it once expired, swept or not
    pub async fn validate(&self, value: &str) -> Result<Token> {
        let token = self
            .store
            .get(value)
            .await
            .map_err(SecurityError::into_store_failure)?
            .ok_or(SecurityError::TokenNotFound)?;

        if token.is_expired_at(Utc::now()) {
            debug!("Token {} expired at {}", token.masked(), token.expired_at);
            return Err(SecurityError::TokenExpired);
        }

        Ok(token)
    }

    /// Remove a token; absent or unknown values are accepted silently
    pub async fn revoke(&self, value: Option<&str>) -> Result<()> {
        let Some(value) = value else {
            return Ok(());
        };

        debug!("Revoking token {}", mask_token(value));
        self.store.delete(value).await.map_err(SecurityError::into_store_failure)
    }

    /// Delete every token whose expiry lies in the past; returns how many went
    pub async fn sweep_expired(&self) -> Result<usize> {
        let now = Utc::now();
        let snapshot = self.store.snapshot().await.map_err(SecurityError::into_store_failure)?;

        let mut removed = 0;
        for token in snapshot.iter().filter(|t| t.expired_at < now) {
            if self
                .store
                .delete_if_expired(&token.value, now)
                .await
                .map_err(SecurityError::into_store_failure)?
            {
                removed += 1;
            }
        }

        if removed > 0 {
            info!("Swept {} expired tokens", removed);
        } else {
            debug!("Token sweep found nothing to remove");
        }
        Ok(removed)
    }

    /// Run [`TokenManager::sweep_expired`] every `interval` on the tokio runtime
    pub fn start_sweeper(&self, interval: std::time::Duration) -> SweeperHandle {
        let manager = self.clone();
        info!("Starting token sweeper every {:?}", interval);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first tick completes immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if let Err(e) = manager.sweep_expired().await {
                    warn!("Token sweep failed: {}", e);
                }
            }
        });

        SweeperHandle::new(handle)
    }
}

impl std::fmt::Debug for TokenManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenManager")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
