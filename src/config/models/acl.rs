//! Access control configuration

use crate::core::models::Decision;
use serde::{Deserialize, Serialize};

/// Decision applied when no rule matches a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultDecision {
    Grant,
    #[default]
    Deny,
}

impl From<DefaultDecision> for Decision {
    fn from(value: DefaultDecision) -> Self {
        match value {
            DefaultDecision::Grant => Decision::Grant,
            DefaultDecision::Deny => Decision::Deny,
        }
    }
}

/// Access control rules, evaluated in declaration order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AclConfig {
    #[serde(default)]
    pub default_decision: DefaultDecision,
    #[serde(default)]
    pub rules: Vec<AclRuleConfig>,
}

/// One declarative access rule
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AclRuleConfig {
    /// Ant-style resource pattern
    pub pattern: String,
    /// HTTP methods (empty means any)
    #[serde(default)]
    pub methods: Vec<String>,
    /// Roles granted access
    #[serde(default)]
    pub roles: Vec<String>,
    /// Users granted access
    #[serde(default)]
    pub users: Vec<String>,
}
