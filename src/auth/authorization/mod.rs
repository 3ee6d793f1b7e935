//! Authorization
//!
//! The [`AuthorizationManager`] requires every [`AuthorizationProvider`] to
//! grant. The default provider judges URL access by polling [`Voter`]s over
//! the matching ACL entries.

pub mod manager;
pub mod url_provider;
pub mod voters;


pub use manager::AuthorizationManager;
pub use url_provider::UrlAuthorizationProvider;
pub use voters::{RoleVoter, UserVoter, Voter, default_voters};

use crate::core::models::{Decision, Identity, ResourceRequest};
use crate::utils::error::Result;
use async_trait::async_trait;

/// One authorization policy
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorizationProvider: Send + Sync {
    async fn authorize(&self, identity: &Identity, resource: &ResourceRequest) -> Result<Decision>;
}
