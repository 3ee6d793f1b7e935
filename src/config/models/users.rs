//! Seed users for the in-memory identity provider

use crate::auth::password::PasswordEncoding;
use crate::core::models::Identity;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A user declared in the configuration file
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct UserConfig {
    pub username: String,
    /// Stored secret, plain or an Argon2 PHC string depending on `password_encoding`
    pub password: String,
    #[serde(default)]
    pub password_encoding: PasswordEncoding,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

impl UserConfig {
    /// Build the identity this entry describes
    pub fn to_identity(&self) -> Identity {
        self.attributes.iter().fold(
            Identity::new(&self.username)
                .with_roles(self.roles.iter().cloned())
                .with_secret(&self.password),
            |identity, (key, value)| identity.with_attribute(key, value),
        )
    }
}

impl std::fmt::Debug for UserConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserConfig")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("password_encoding", &self.password_encoding)
            .field("roles", &self.roles)
            .field("attributes", &self.attributes)
            .finish()
    }
}
