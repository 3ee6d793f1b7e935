//! URL based ACL provider

use super::matcher::AntPattern;
use crate::config::AclConfig;
use crate::core::models::{AclEntry, ResourceRequest};
use crate::utils::error::Result;
use async_trait::async_trait;
use tracing::debug;

/// Source of the access rules that apply to a request
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AclProvider: Send + Sync {
    /// Entries whose pattern and method match the request, in registration order
    async fn find_matching(&self, request: &ResourceRequest) -> Result<Vec<AclEntry>>;
}

#[derive(Debug, Clone)]
struct CompiledEntry {
    pattern: AntPattern,
    entry: AclEntry,
}

/// Immutable rule table keyed by Ant-style path patterns
#[derive(Debug, Clone, Default)]
pub struct UrlAclProvider {
    entries: Vec<CompiledEntry>,
}

impl UrlAclProvider {
    pub fn builder() -> UrlAclProviderBuilder {
        UrlAclProviderBuilder::new()
    }

    /// Build from the `acl` configuration section
    pub fn from_config(config: &AclConfig) -> Result<Self> {
        config
            .rules
            .iter()
            .fold(Self::builder(), |builder, rule| {
                builder
                    .add(&rule.pattern)
                    .methods(rule.methods.iter().cloned())
                    .roles(rule.roles.iter().cloned())
                    .users(rule.users.iter().cloned())
                    .done()
            })
            .build()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Synchronous lookup used by the async trait method
    pub fn matching(&self, request: &ResourceRequest) -> Vec<AclEntry> {
        self.entries
            .iter()
            .filter(|c| c.pattern.matches(&request.path) && c.entry.applies_to_method(&request.method))
            .map(|c| c.entry.clone())
            .collect()
    }
}

#[async_trait]
impl AclProvider for UrlAclProvider {
    async fn find_matching(&self, request: &ResourceRequest) -> Result<Vec<AclEntry>> {
        let entries = self.matching(request);
        debug!("{} ACL entries match {}", entries.len(), request);
        Ok(entries)
    }
}

/// Collects rules; patterns are compiled once in [`UrlAclProviderBuilder::build`]
#[derive(Debug, Default)]
pub struct UrlAclProviderBuilder {
    entries: Vec<AclEntry>,
}

impl UrlAclProviderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a rule for `pattern`
    pub fn add(self, pattern: impl Into<String>) -> AclRuleBuilder {
        AclRuleBuilder {
            parent: self,
            entry: AclEntry::new(pattern),
        }
    }

    /// Append a fully formed entry
    pub fn entry(mut self, entry: AclEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn build(self) -> Result<UrlAclProvider> {
        let entries = self
            .entries
            .into_iter()
            .map(|entry| {
                let pattern = AntPattern::compile(&entry.resource_pattern)?;
                Ok(CompiledEntry { pattern, entry })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!("Built URL ACL provider with {} entries", entries.len());
        Ok(UrlAclProvider { entries })
    }
}

/// One rule under construction
#[derive(Debug)]
pub struct AclRuleBuilder {
    parent: UrlAclProviderBuilder,
    entry: AclEntry,
}

impl AclRuleBuilder {
    pub fn roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entry.allowed_roles.extend(roles.into_iter().map(Into::into));
        self
    }

    pub fn users<I, S>(mut self, users: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entry.allowed_users.extend(users.into_iter().map(Into::into));
        self
    }

    /// Restrict the rule to these HTTP methods
    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entry
            .http_methods
            .extend(methods.into_iter().map(|m| m.into().to_ascii_uppercase()));
        self
    }

    /// Finish the rule and return to the provider builder
    pub fn done(self) -> UrlAclProviderBuilder {
        self.parent.entry(self.entry)
    }

    /// Start the next rule
    pub fn add(self, pattern: impl Into<String>) -> AclRuleBuilder {
        self.done().add(pattern)
    }

    pub fn build(self) -> Result<UrlAclProvider> {
        self.done().build()
    }
}
