//! Top-level security configuration

use super::*;
use crate::utils::error::{Result, SecurityError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// Every section of the configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// HTTP listener
    #[serde(default)]
    pub server: ServerConfig,
    /// Token lifetime and sweeping
    #[serde(default)]
    pub token: TokenConfig,
    /// Token filter settings
    #[serde(default)]
    pub filter: FilterConfig,
    /// Access control rules
    #[serde(default)]
    pub acl: AclConfig,
    /// Seed users for the in-memory identity provider
    #[serde(default)]
    pub users: Vec<UserConfig>,
}

impl SecurityConfig {
    /// Defaults with `DAAS_TOKEN_*` environment overrides applied
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply overrides looked up through `lookup`
    pub(crate) fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("DAAS_TOKEN_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("DAAS_TOKEN_PORT") {
            self.server.port = parse_env("DAAS_TOKEN_PORT", &port)?;
        }
        if let Some(ttl) = lookup("DAAS_TOKEN_TTL_SECS") {
            self.token.ttl_secs = parse_env("DAAS_TOKEN_TTL_SECS", &ttl)?;
        }
        if let Some(interval) = lookup("DAAS_TOKEN_SWEEP_INTERVAL_SECS") {
            self.token.sweep_interval_secs =
                parse_env("DAAS_TOKEN_SWEEP_INTERVAL_SECS", &interval)?;
        }
        if let Some(url) = lookup("DAAS_TOKEN_PROCESSES_URL") {
            self.filter.processes_url = url;
        }
        if let Some(cors) = lookup("DAAS_TOKEN_CORS_ENABLED") {
            self.filter.cors_enabled = parse_env("DAAS_TOKEN_CORS_ENABLED", &cors)?;
        }
        if let Some(strict) = lookup("DAAS_TOKEN_STRICT_TOKEN") {
            self.filter.strict_token = parse_env("DAAS_TOKEN_STRICT_TOKEN", &strict)?;
        }

        debug!("Environment overrides applied");
        Ok(())
    }
}

fn parse_env<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| SecurityError::config(format!("Invalid value for {}: {}", key, value)))
}
