//! Configuration management for the token security engine
//!
//! This module handles loading and validation of the engine configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{Result, SecurityError};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub security: SecurityConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await?;

        let config = Self::from_yaml(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load from `path` when given, otherwise from the environment
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path).await,
            None => Self::from_env(),
        }
    }

    /// Parse and validate configuration from a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        let security: SecurityConfig = serde_yaml::from_str(content)?;

        let config = Self { security };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let security = SecurityConfig::from_env()?;
        let config = Self { security };

        config.validate()?;
        Ok(config)
    }

    pub fn server(&self) -> &ServerConfig {
        &self.security.server
    }

    pub fn token(&self) -> &TokenConfig {
        &self.security.token
    }

    pub fn filter(&self) -> &FilterConfig {
        &self.security.filter
    }

    pub fn acl(&self) -> &AclConfig {
        &self.security.acl
    }

    pub fn users(&self) -> &[UserConfig] {
        &self.security.users
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.security
            .server
            .validate()
            .map_err(|e| SecurityError::config(format!("Server config error: {}", e)))?;

        self.security
            .token
            .validate()
            .map_err(|e| SecurityError::config(format!("Token config error: {}", e)))?;

        self.security
            .filter
            .validate()
            .map_err(|e| SecurityError::config(format!("Filter config error: {}", e)))?;

        self.security
            .acl
            .validate()
            .map_err(|e| SecurityError::config(format!("ACL config error: {}", e)))?;

        self.security
            .users
            .validate()
            .map_err(|e| SecurityError::config(format!("Users config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.security)?)
    }
}
