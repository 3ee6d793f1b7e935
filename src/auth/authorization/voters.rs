//! Voters

use crate::core::models::{AclEntry, Identity, Vote};
use std::sync::Arc;

/// Judges whether an identity satisfies one ACL entry
pub trait Voter: Send + Sync {
    fn name(&self) -> &'static str;

    fn vote(&self, identity: &Identity, entry: &AclEntry) -> Vote;
}

/// Grants when the identity holds any of the entry's roles
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleVoter;

impl Voter for RoleVoter {
    fn name(&self) -> &'static str {
        "role"
    }

    fn vote(&self, identity: &Identity, entry: &AclEntry) -> Vote {
        if entry
            .allowed_roles
            .iter()
            .any(|role| identity.has_role(role))
        {
            Vote::Grant
        } else {
            Vote::Abstain
        }
    }
}

/// Grants when the identity is listed by name
#[derive(Debug, Clone, Copy, Default)]
pub struct UserVoter;

impl Voter for UserVoter {
    fn name(&self) -> &'static str {
        "user"
    }

    fn vote(&self, identity: &Identity, entry: &AclEntry) -> Vote {
        if entry.allowed_users.contains(&identity.principal_id) {
            Vote::Grant
        } else {
            Vote::Abstain
        }
    }
}

/// Role and user voters, in that order
pub fn default_voters() -> Vec<Arc<dyn Voter>> {
    vec![Arc::new(RoleVoter), Arc::new(UserVoter)]
}
