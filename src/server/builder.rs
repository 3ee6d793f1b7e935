//! Server builder and run_server function

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::Result;
use tracing::{info, warn};

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server; without a configuration, defaults plus environment overrides apply
    pub fn build(self) -> Result<HttpServer> {
        let config = match self.config {
            Some(config) => config,
            None => Config::from_env()?,
        };
        HttpServer::new(&config)
    }
}

/// Serve the token endpoints described by `config` until shutdown
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting daas-token server");

    if config.users().is_empty() {
        warn!("No users configured: every login will fail");
    }

    let server = ServerBuilder::new().with_config(config).build()?;
    let filter = server.state().config.filter();
    info!("   POST {} - Login", filter.login_url);
    info!("   POST {} - Logout", filter.logout_url);
    info!("   Guarding {}", filter.processes_url);

    server.start().await
}
