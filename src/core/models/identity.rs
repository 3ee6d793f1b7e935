//! Identity model

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// The resolved principal a request is acting as
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Principal id (username)
    pub principal_id: String,
    /// Display attributes
    #[serde(default)]
    pub attributes: HashMap<String, String>,
    /// Granted roles
    #[serde(default)]
    pub roles: HashSet<String>,
    /// Stored credential, verified by a `PasswordVerifier`
    #[serde(skip)]
    pub secret: Option<String>,
}

impl Identity {
    /// Create an identity without roles or credential
    pub fn new(principal_id: impl Into<String>) -> Self {
        Self {
            principal_id: principal_id.into(),
            attributes: HashMap::new(),
            roles: HashSet::new(),
            secret: None,
        }
    }

    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles.extend(roles.into_iter().map(Into::into));
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    /// Copy of the identity without its stored credential
    pub fn without_secret(&self) -> Self {
        Self {
            secret: None,
            ..self.clone()
        }
    }
}

impl std::fmt::Debug for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Identity")
            .field("principal_id", &self.principal_id)
            .field("attributes", &self.attributes)
            .field("roles", &self.roles)
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
