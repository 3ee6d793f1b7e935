//! Token filter configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Which calls the token filter intercepts and how strictly
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Ant pattern of the paths that require a token
    #[serde(default = "default_processes_url")]
    pub processes_url: String,
    /// Login endpoint path
    #[serde(default = "default_login_url")]
    pub login_url: String,
    /// Logout endpoint path
    #[serde(default = "default_logout_url")]
    pub logout_url: String,
    /// Let CORS preflight requests through untouched
    #[serde(default)]
    pub cors_enabled: bool,
    /// Reject calls whose token cannot be read instead of treating them as anonymous
    #[serde(default = "default_true")]
    pub strict_token: bool,
    /// Ant patterns excluded from filtering
    #[serde(default)]
    pub ignored_urls: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            processes_url: default_processes_url(),
            login_url: default_login_url(),
            logout_url: default_logout_url(),
            cors_enabled: false,
            strict_token: true,
            ignored_urls: Vec::new(),
        }
    }
}
