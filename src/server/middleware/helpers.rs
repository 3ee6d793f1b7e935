//! Request classification for the token filter

use crate::auth::AntPattern;
use crate::config::FilterConfig;
use crate::utils::error::Result;
use actix_web::http::Method;

/// Compiled form of [`FilterConfig`]
#[derive(Debug, Clone)]
pub struct FilterRules {
    processes: AntPattern,
    ignored: Vec<AntPattern>,
    login_url: String,
    logout_url: String,
    cors_enabled: bool,
    strict_token: bool,
}

impl FilterRules {
    pub fn from_config(config: &FilterConfig) -> Result<Self> {
        Ok(Self {
            processes: AntPattern::compile(&config.processes_url)?,
            ignored: config
                .ignored_urls
                .iter()
                .map(|p| AntPattern::compile(p))
                .collect::<Result<Vec<_>>>()?,
            login_url: config.login_url.clone(),
            logout_url: config.logout_url.clone(),
            cors_enabled: config.cors_enabled,
            strict_token: config.strict_token,
        })
    }

    /// Whether a call must carry a valid token
    pub fn requires_token(&self, method: &Method, path: &str) -> bool {
        if self.cors_enabled && *method == Method::OPTIONS {
            return false;
        }

        if path == self.login_url || path == self.logout_url {
            return false;
        }

        if self.ignored.iter().any(|p| p.matches(path)) {
            return false;
        }

        self.processes.matches(path)
    }

    /// Whether an unreadable token rejects the call
    pub fn strict_token(&self) -> bool {
        self.strict_token
    }
}
