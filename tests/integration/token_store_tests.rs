//! Pluggable token stores and expiry sweeping

use crate::common::fixtures::PASSWORD;
use crate::common::{ConfigFactory, IdentityFactory};
use crate::{assert_err, assert_ok};
use async_trait::async_trait;
use daas_token::storage::{MemoryTokenStore, TokenStore};
use daas_token::{AuthenticationRequest, Result, SecurityEngine, SecurityError, Token};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Memory store that counts writes and can be switched off
#[derive(Default)]
struct RecordingStore {
    inner: MemoryTokenStore,
    puts: AtomicUsize,
    down: std::sync::atomic::AtomicBool,
}

impl RecordingStore {
    fn check(&self) -> Result<()> {
        if self.down.load(Ordering::SeqCst) {
            return Err(SecurityError::store("recording store is down"));
        }
        Ok(())
    }
}

#[async_trait]
impl TokenStore for RecordingStore {
    async fn put(&self, token: Token) -> Result<()> {
        self.check()?;
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.inner.put(token).await
    }

    async fn get(&self, value: &str) -> Result<Option<Token>> {
        self.check()?;
        self.inner.get(value).await
    }

    async fn delete(&self, value: &str) -> Result<()> {
        self.check()?;
        self.inner.delete(value).await
    }

    async fn snapshot(&self) -> Result<Vec<Token>> {
        self.check()?;
        self.inner.snapshot().await
    }
}

fn engine_with(store: Arc<RecordingStore>) -> SecurityEngine {
    SecurityEngine::builder()
        .config(&ConfigFactory::base())
        .token_store(store)
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_engine_writes_through_custom_store() {
    let store = Arc::new(RecordingStore::default());
    let engine = engine_with(store.clone());

    let auth = assert_ok!(
        engine
            .login(&AuthenticationRequest::credentials("alice", PASSWORD))
            .await
    );

    assert_eq!(store.puts.load(Ordering::SeqCst), 1);
    assert_eq!(store.inner.len(), 1);
    let stored = store.inner.get(&auth.token.unwrap().value).await.unwrap();
    assert_eq!(stored.unwrap().subject, "alice");
}

#[tokio::test]
async fn test_store_outage_surfaces_as_unavailable() {
    let store = Arc::new(RecordingStore::default());
    let engine = engine_with(store.clone());
    store.down.store(true, Ordering::SeqCst);

    let login = engine
        .login(&AuthenticationRequest::credentials("alice", PASSWORD))
        .await;
    assert!(matches!(assert_err!(login), SecurityError::StoreUnavailable(_)));

    let validate = engine
        .login(&AuthenticationRequest::token("any-token"))
        .await;
    assert!(matches!(assert_err!(validate), SecurityError::StoreUnavailable(_)));
}

#[tokio::test]
async fn test_sweep_removes_only_expired_tokens() {
    let store = Arc::new(RecordingStore::default());
    let engine = engine_with(store.clone());

    store
        .put(IdentityFactory::expired_token("stale-1", "alice"))
        .await
        .unwrap();
    store
        .put(IdentityFactory::expired_token("stale-2", "root"))
        .await
        .unwrap();
    let live = engine
        .login(&AuthenticationRequest::credentials("root", PASSWORD))
        .await
        .unwrap()
        .token
        .unwrap();

    let removed = assert_ok!(engine.token_manager().sweep_expired().await);

    assert_eq!(removed, 2);
    assert_eq!(store.inner.len(), 1);
    assert!(store.inner.get(&live.value).await.unwrap().is_some());
}

#[tokio::test]
async fn test_background_sweeper_clears_expired_tokens() {
    let store = Arc::new(RecordingStore::default());
    let engine = engine_with(store.clone());
    store
        .put(IdentityFactory::expired_token("stale", "alice"))
        .await
        .unwrap();

    let handle = engine.start_sweeper(std::time::Duration::from_millis(20));
    tokio::time::sleep(std::time::Duration::from_millis(120)).await;

    assert!(handle.is_running());
    assert!(store.inner.is_empty());
    handle.stop();
}
