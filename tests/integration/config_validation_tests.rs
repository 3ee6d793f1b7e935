//! Configuration loading and validation

use crate::common::fixtures::BASE_CONFIG;
use crate::{assert_err, assert_ok};
use daas_token::{Config, SecurityError};
use std::io::Write;

#[tokio::test]
async fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(BASE_CONFIG.as_bytes()).unwrap();

    let config = assert_ok!(Config::from_file(file.path()).await);
    assert_eq!(config.token().ttl_secs, 1800);
    assert_eq!(config.acl().rules.len(), 2);
    assert_eq!(config.users().len(), 2);
}

#[tokio::test]
async fn test_load_without_path_uses_defaults() {
    let config = assert_ok!(Config::load(None).await);
    assert!(config.users().is_empty());
    assert!(config.acl().rules.is_empty());
    assert_eq!(config.filter().login_url, "/token/login");
}

#[tokio::test]
async fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::from_file(dir.path().join("absent.yaml")).await;
    assert!(matches!(assert_err!(result), SecurityError::Io(_)));
}

#[test]
fn test_rejects_relative_pattern() {
    let yaml = r#"
acl:
  rules:
    - pattern: "api/reports/**"
      roles: ["reader"]
"#;
    let result = Config::from_yaml(yaml);
    assert!(matches!(assert_err!(result), SecurityError::Config(_)));
}

#[test]
fn test_rejects_zero_ttl() {
    let result = Config::from_yaml("token:\n  ttl_secs: 0\n");
    assert!(matches!(assert_err!(result), SecurityError::Config(_)));
}

#[test]
fn test_rejects_duplicate_users() {
    let yaml = r#"
users:
  - username: alice
    password: a
  - username: alice
    password: b
"#;
    let result = Config::from_yaml(yaml);
    assert!(matches!(assert_err!(result), SecurityError::Config(_)));
}

#[test]
fn test_rejects_malformed_yaml() {
    let result = Config::from_yaml("token: [unterminated");
    assert!(matches!(assert_err!(result), SecurityError::Yaml(_)));
}

#[test]
fn test_round_trip_keeps_rules() {
    let config = Config::from_yaml(BASE_CONFIG).unwrap();
    let yaml = config.to_yaml().unwrap();
    let reloaded = Config::from_yaml(&yaml).unwrap();

    assert_eq!(reloaded.acl().rules.len(), config.acl().rules.len());
    assert_eq!(reloaded.token().ttl_secs, config.token().ttl_secs);
}
