//! Validators for the server, token and filter sections

use super::trait_def::Validate;
use crate::auth::acl::AntPattern;
use crate::config::models::*;
use tracing::debug;

/// Upper bound on token lifetime (30 days)
const MAX_TTL_SECS: u64 = 30 * 24 * 60 * 60;

impl Validate for SecurityConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating security configuration");

        self.server.validate()?;
        self.token.validate()?;
        self.filter.validate()?;
        self.acl.validate()?;
        self.users.validate()?;

        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err("Worker count must be greater than 0".to_string());
            }
        }

        Ok(())
    }
}

impl Validate for TokenConfig {
    fn validate(&self) -> Result<(), String> {
        if self.ttl_secs == 0 {
            return Err("Token ttl must be greater than 0".to_string());
        }

        if self.ttl_secs > MAX_TTL_SECS {
            return Err("Token ttl should not exceed 30 days".to_string());
        }

        if self.sweep_interval_secs == 0 {
            return Err("Sweep interval must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for FilterConfig {
    fn validate(&self) -> Result<(), String> {
        AntPattern::compile(&self.processes_url)
            .map_err(|e| format!("Invalid processes_url: {}", e))?;

        for url in [&self.login_url, &self.logout_url] {
            if !url.starts_with('/') {
                return Err(format!("Endpoint path must start with '/': {}", url));
            }
        }

        if self.login_url == self.logout_url {
            return Err("Login and logout URLs must differ".to_string());
        }

        for pattern in &self.ignored_urls {
            AntPattern::compile(pattern).map_err(|e| format!("Invalid ignored url: {}", e))?;
        }

        Ok(())
    }
}
