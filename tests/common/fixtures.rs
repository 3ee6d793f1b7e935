//! Test fixtures and factories
//!
//! All factories build real objects backed by the in-memory stores.

use chrono::{Duration, Utc};
use daas_token::{Config, Identity, SecurityEngine, Token};
use std::sync::Arc;

/// Password shared by every fixture user
pub const PASSWORD: &str = "wonderland";

/// Readers may GET reports, only root reaches the admin area
pub const BASE_CONFIG: &str = r#"
token:
  ttl_secs: 1800
acl:
  rules:
    - pattern: "/api/reports/**"
      methods: ["GET"]
      roles: ["reader"]
    - pattern: "/api/admin/**"
      users: ["root"]
users:
  - username: alice
    password: wonderland
    roles: ["reader"]
    attributes:
      department: finance
  - username: root
    password: wonderland
    roles: ["admin"]
"#;

/// Factory for configurations and engines
pub struct ConfigFactory;

impl ConfigFactory {
    pub fn base() -> Config {
        Config::from_yaml(BASE_CONFIG).expect("fixture configuration is valid")
    }

    pub fn engine() -> Arc<SecurityEngine> {
        Arc::new(SecurityEngine::from_config(&Self::base()).expect("fixture engine builds"))
    }
}

/// Factory for identities and tokens
pub struct IdentityFactory;

impl IdentityFactory {
    pub fn alice() -> Identity {
        Identity::new("alice")
            .with_roles(["reader"])
            .with_secret(PASSWORD)
    }

    /// Token for `subject` that expired a minute ago
    pub fn expired_token(value: &str, subject: &str) -> Token {
        let now = Utc::now();
        Token::new(value, subject, now - Duration::hours(1), now - Duration::minutes(1))
    }
}
