//! Access control list entry

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Rule binding a resource pattern to the roles and users permitted to access it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AclEntry {
    /// Ant-style path pattern
    pub resource_pattern: String,
    /// HTTP methods the entry applies to (empty means any)
    #[serde(default)]
    pub http_methods: HashSet<String>,
    /// Roles granted access
    #[serde(default)]
    pub allowed_roles: HashSet<String>,
    /// Principals granted access
    #[serde(default)]
    pub allowed_users: HashSet<String>,
}

impl AclEntry {
    pub fn new(resource_pattern: impl Into<String>) -> Self {
        Self {
            resource_pattern: resource_pattern.into(),
            http_methods: HashSet::new(),
            allowed_roles: HashSet::new(),
            allowed_users: HashSet::new(),
        }
    }

    /// Whether the entry applies to the given HTTP method
    pub fn applies_to_method(&self, method: &str) -> bool {
        self.http_methods.is_empty()
            || self
                .http_methods
                .iter()
                .any(|m| m.eq_ignore_ascii_case(method))
    }
}
