//! End-to-end engine scenarios without the HTTP layer

use crate::common::fixtures::PASSWORD;
use crate::common::{ConfigFactory, IdentityFactory};
use crate::{assert_err, assert_ok};
use chrono::Duration;
use daas_token::{
    AuthenticationRequest, ResourceRequest, SecurityContext, SecurityEngine, SecurityError,
};
use std::collections::HashSet;
use std::sync::Arc;

#[tokio::test]
async fn test_login_then_read_report_in_scope() {
    let engine = ConfigFactory::engine();

    let login = assert_ok!(
        engine
            .login(&AuthenticationRequest::credentials("alice", PASSWORD))
            .await
    );
    let token = login.token.expect("login issues a token");
    assert!(token.expired_at > token.issued_at);

    let principal = SecurityContext::scope(async {
        let auth = engine
            .login(&AuthenticationRequest::token(token.value.clone()))
            .await?;
        SecurityContext::set(auth.clone())?;
        engine
            .authorize(&auth.identity, &ResourceRequest::new("GET", "/api/reports/q3"))
            .await?;
        Ok::<_, SecurityError>(SecurityContext::current().map(|a| a.principal_id().to_string()))
    })
    .await;

    assert_eq!(assert_ok!(principal).as_deref(), Some("alice"));
    assert!(SecurityContext::current().is_none());
}

#[tokio::test]
async fn test_reader_cannot_write_or_reach_admin() {
    let engine = ConfigFactory::engine();
    let alice = IdentityFactory::alice();

    let write = engine
        .authorize(&alice, &ResourceRequest::new("POST", "/api/reports/q3"))
        .await;
    assert!(matches!(assert_err!(write), SecurityError::AuthorizationDenied(_)));

    let admin = engine
        .authorize(&alice, &ResourceRequest::new("GET", "/api/admin/users"))
        .await;
    assert!(matches!(assert_err!(admin), SecurityError::AuthorizationDenied(_)));
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let engine = SecurityEngine::builder()
        .config(&ConfigFactory::base())
        .ttl(Duration::milliseconds(20))
        .build()
        .unwrap();

    let token = engine
        .login(&AuthenticationRequest::credentials("alice", PASSWORD))
        .await
        .unwrap()
        .token
        .unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    let result = engine
        .login(&AuthenticationRequest::token(token.value))
        .await;
    assert!(matches!(assert_err!(result), SecurityError::TokenExpired));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_logins_issue_distinct_tokens() {
    let engine = ConfigFactory::engine();

    let handles: Vec<_> = (0..64)
        .map(|_| {
            let engine = Arc::clone(&engine);
            tokio::spawn(async move {
                engine
                    .login(&AuthenticationRequest::credentials("alice", PASSWORD))
                    .await
                    .map(|auth| auth.token.map(|t| t.value))
            })
        })
        .collect();

    let mut values = HashSet::new();
    for handle in handles {
        let value = handle.await.unwrap().unwrap().unwrap();
        assert!(values.insert(value), "token issued twice");
    }
    assert_eq!(values.len(), 64);

    for value in &values {
        let auth = engine
            .login(&AuthenticationRequest::token(value.clone()))
            .await
            .unwrap();
        assert_eq!(auth.principal_id(), "alice");
    }
}

#[tokio::test]
async fn test_logout_invalidates_token() {
    let engine = ConfigFactory::engine();

    let token = engine
        .login(&AuthenticationRequest::credentials("root", PASSWORD))
        .await
        .unwrap()
        .token
        .unwrap();

    assert_ok!(engine.logout(Some(&token.value)).await);
    assert_ok!(engine.logout(Some(&token.value)).await);
    assert_ok!(engine.logout(None).await);

    let result = engine
        .login(&AuthenticationRequest::token(token.value))
        .await;
    assert!(matches!(assert_err!(result), SecurityError::TokenNotFound));
}

#[tokio::test]
async fn test_identity_attributes_survive_token_login() {
    let engine = ConfigFactory::engine();

    let token = engine
        .login(&AuthenticationRequest::credentials("alice", PASSWORD))
        .await
        .unwrap()
        .token
        .unwrap();
    let auth = engine
        .login(&AuthenticationRequest::token(token.value))
        .await
        .unwrap();

    assert_eq!(
        auth.identity.attributes.get("department").map(String::as_str),
        Some("finance")
    );
    assert!(auth.identity.has_role("reader"));
}
