//! Token lifetime configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Token lifetime and expiry sweep settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Seconds a token stays valid after issue
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
    /// Seconds between background expiry sweeps
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
    /// Whether the server starts the background sweeper
    #[serde(default = "default_true")]
    pub sweep_enabled: bool,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            sweep_interval_secs: default_sweep_interval_secs(),
            sweep_enabled: true,
        }
    }
}

impl TokenConfig {
    pub fn ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(i64::try_from(self.ttl_secs).unwrap_or(i64::MAX))
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }
}
