//! Validators for access rules and seed users

use super::trait_def::Validate;
use crate::auth::acl::AntPattern;
use crate::auth::password::PasswordEncoding;
use crate::config::models::*;
use argon2::PasswordHash;
use std::collections::HashSet;
use tracing::warn;

impl Validate for AclConfig {
    fn validate(&self) -> Result<(), String> {
        for rule in &self.rules {
            rule.validate()?;
        }

        if self.default_decision == DefaultDecision::Grant {
            warn!("ACL default decision is 'grant': unmatched paths are open to any authenticated caller");
        }

        Ok(())
    }
}

impl Validate for AclRuleConfig {
    fn validate(&self) -> Result<(), String> {
        AntPattern::compile(&self.pattern).map_err(|e| format!("Invalid ACL rule: {}", e))?;

        if self.methods.iter().any(|m| m.trim().is_empty()) {
            return Err(format!("Empty HTTP method in rule for {}", self.pattern));
        }

        Ok(())
    }
}

impl Validate for UserConfig {
    fn validate(&self) -> Result<(), String> {
        if self.username.trim().is_empty() {
            return Err("Username cannot be empty".to_string());
        }

        if self.password.is_empty() {
            return Err(format!("User {} has no password", self.username));
        }

        match self.password_encoding {
            PasswordEncoding::Argon2 => {
                PasswordHash::new(&self.password).map_err(|e| {
                    format!("User {} has an invalid Argon2 hash: {}", self.username, e)
                })?;
            }
            PasswordEncoding::Plain => {
                warn!("User {} uses a plain-text password", self.username);
            }
        }

        Ok(())
    }
}

impl Validate for Vec<UserConfig> {
    fn validate(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for user in self {
            if !seen.insert(user.username.as_str()) {
                return Err(format!("Duplicate username: {}", user.username));
            }
            user.validate()?;
        }
        Ok(())
    }
}
