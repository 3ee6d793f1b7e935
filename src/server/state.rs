//! Application state shared across HTTP handlers

use crate::auth::SecurityEngine;
use crate::config::Config;
use crate::server::middleware::{BearerAuthorizationHeaderTokenResolver, TokenResolver};
use std::sync::Arc;

/// HTTP server state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration (shared read-only)
    pub config: Arc<Config>,
    /// Authentication and authorization engine
    pub engine: Arc<SecurityEngine>,
    /// Reads tokens for the logout endpoint
    pub resolver: Arc<dyn TokenResolver>,
}

impl AppState {
    pub fn new(config: Config, engine: Arc<SecurityEngine>) -> Self {
        Self {
            config: Arc::new(config),
            engine,
            resolver: Arc::new(BearerAuthorizationHeaderTokenResolver),
        }
    }

    pub fn with_resolver(mut self, resolver: Arc<dyn TokenResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
