//! URL authorization provider

use super::AuthorizationProvider;
use super::voters::{Voter, default_voters};
use crate::auth::acl::AclProvider;
use crate::core::models::{Decision, Identity, ResourceRequest, Vote};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Polls every voter over the first ACL entry matching the request
///
/// Entries are consulted in registration order, so narrower rules must be
/// registered before broader ones that overlap them.
pub struct UrlAuthorizationProvider {
    acl: Arc<dyn AclProvider>,
    voters: Vec<Arc<dyn Voter>>,
    default_decision: Decision,
}

impl UrlAuthorizationProvider {
    pub fn new(acl: Arc<dyn AclProvider>, voters: Vec<Arc<dyn Voter>>) -> Self {
        Self {
            acl,
            voters,
            default_decision: Decision::Deny,
        }
    }

    /// Role and user voters
    pub fn with_default_voters(acl: Arc<dyn AclProvider>) -> Self {
        Self::new(acl, default_voters())
    }

    /// Decision for requests no ACL entry matches
    pub fn with_default_decision(mut self, decision: Decision) -> Self {
        self.default_decision = decision;
        self
    }
}

#[async_trait]
impl AuthorizationProvider for UrlAuthorizationProvider {
    async fn authorize(&self, identity: &Identity, resource: &ResourceRequest) -> Result<Decision> {
        let entries = self.acl.find_matching(resource).await?;
        let Some(entry) = entries.first() else {
            debug!(
                "No ACL entry matches {}, applying default {:?}",
                resource, self.default_decision
            );
            return Ok(self.default_decision);
        };

        let votes = self.voters.iter().map(|voter| {
            let vote = voter.vote(identity, entry);
            debug!(
                "Voter {} cast {:?} for {} on {}",
                voter.name(),
                vote,
                identity.principal_id,
                entry.resource_pattern
            );
            vote
        });

        Ok(Vote::aggregate(votes))
    }
}
