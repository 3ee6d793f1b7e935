//! Access control lists
//!
//! Rules bind Ant-style resource patterns to the roles and users allowed to
//! reach them. The URL authorization provider asks an [`AclProvider`] which
//! rules apply to a request and lets the voters judge each one.

pub mod matcher;
pub mod provider;


pub use matcher::AntPattern;
pub use provider::{AclProvider, AclRuleBuilder, UrlAclProvider, UrlAclProviderBuilder};

#[cfg(test)]
pub use provider::MockAclProvider;
