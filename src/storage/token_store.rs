//! Token store contract and in-memory implementation

use crate::core::models::{Token, mask_token};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::debug;

/// Persistence for issued tokens, keyed by token value.
///
/// Implementations must be safe for concurrent use without external
/// locking. A concurrent `put` for the same value is last-write-wins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Insert or replace a token
    async fn put(&self, token: Token) -> Result<()>;

    /// Look a token up by value
    async fn get(&self, value: &str) -> Result<Option<Token>>;

    /// Remove a token; removing an unknown value is not an error
    async fn delete(&self, value: &str) -> Result<()>;

    /// Point-in-time copy of every stored token, used by the expiry sweep
    async fn snapshot(&self) -> Result<Vec<Token>>;

    /// Remove `value` only if the stored token has expired by `now`.
    ///
    /// Returns whether a token was removed. The default re-reads the token
    /// before deleting so a value replaced by a fresh token survives.
    async fn delete_if_expired(&self, value: &str, now: DateTime<Utc>) -> Result<bool> {
        match self.get(value).await? {
            Some(token) if token.expired_at < now => {
                self.delete(value).await?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

/// Token store backed by a sharded concurrent map
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: DashMap<String, Token>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn put(&self, token: Token) -> Result<()> {
        debug!("Put token: {} expiredAt: {}", token.masked(), token.expired_at);
        self.tokens.insert(token.value.clone(), token);
        Ok(())
    }

    async fn get(&self, value: &str) -> Result<Option<Token>> {
        debug!("Get token: {}", mask_token(value));
        Ok(self.tokens.get(value).map(|entry| entry.value().clone()))
    }

    async fn delete(&self, value: &str) -> Result<()> {
        debug!("Del token: {}", mask_token(value));
        self.tokens.remove(value);
        Ok(())
    }

    async fn snapshot(&self) -> Result<Vec<Token>> {
        Ok(self
            .tokens
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn delete_if_expired(&self, value: &str, now: DateTime<Utc>) -> Result<bool> {
        Ok(self
            .tokens
            .remove_if(value, |_, token| token.expired_at < now)
            .is_some())
    }
}
