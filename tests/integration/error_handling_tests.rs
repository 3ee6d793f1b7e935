//! Error classification and HTTP rendering

use actix_web::ResponseError;
use actix_web::body::MessageBody;
use actix_web::http::StatusCode;
use daas_token::SecurityError;

fn rendered(error: &SecurityError) -> serde_json::Value {
    let bytes = error.error_response().into_body().try_into_bytes().unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[test]
fn test_authentication_failures_are_unauthorized() {
    let errors = [
        SecurityError::identity_not_found("mallory"),
        SecurityError::invalid_credentials("alice"),
        SecurityError::TokenNotFound,
        SecurityError::TokenExpired,
        SecurityError::MissingToken,
        SecurityError::malformed_token("no scheme"),
    ];

    for error in &errors {
        assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED, "{error}");
        assert!(error.is_authentication_failure());
        assert!(!error.is_authorization_failure());
    }
}

#[test]
fn test_denied_versus_policy_error() {
    let denied = SecurityError::denied("GET /api/admin");
    let failed = SecurityError::authorization("acl backend down");

    assert_eq!(denied.status_code(), StatusCode::FORBIDDEN);
    assert_eq!(failed.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(denied.is_authorization_failure());
    assert!(failed.is_authorization_failure());
}

#[test]
fn test_store_failure_is_service_unavailable() {
    let error = SecurityError::store("connection refused");
    assert_eq!(error.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(error.message_key(), "daas.token.store.unavailable");
}

#[test]
fn test_unknown_user_and_bad_password_share_a_key() {
    assert_eq!(
        SecurityError::identity_not_found("mallory").message_key(),
        SecurityError::invalid_credentials("alice").message_key()
    );
}

#[test]
fn test_body_carries_key_not_cause() {
    let body = rendered(&SecurityError::store("redis://secret-host:6379 refused"));

    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "SERVICE_UNAVAILABLE");
    assert_eq!(body["error"]["message_key"], "daas.token.store.unavailable");
    assert!(!body.to_string().contains("secret-host"));
}

#[test]
fn test_forbidden_body() {
    let body = rendered(&SecurityError::denied("GET /api/admin/users"));

    assert_eq!(body["error"]["code"], "FORBIDDEN");
    assert_eq!(body["error"]["message_key"], "daas.token.access.denied");
    assert!(body["error"]["timestamp"].as_i64().unwrap() > 0);
}
