//! HTTP server core implementation

use crate::auth::{SecurityEngine, SweeperHandle};
use crate::config::{Config, ServerConfig};
use crate::server::middleware::TokenSecurity;
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{Result, SecurityError};
use actix_cors::Cors;
use actix_web::{
    App, HttpServer as ActixHttpServer,
    middleware::{Condition, DefaultHeaders, Logger},
    web,
};
use std::sync::Arc;
use tracing::info;

/// HTTP server exposing the token endpoints behind the token filter
pub struct HttpServer {
    config: ServerConfig,
    state: AppState,
    security: TokenSecurity,
}

impl HttpServer {
    /// Build the engine and filter described by `config`
    pub fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let engine = Arc::new(SecurityEngine::from_config(config)?);
        Self::with_engine(config, engine)
    }

    /// Serve an engine assembled by the caller
    pub fn with_engine(config: &Config, engine: Arc<SecurityEngine>) -> Result<Self> {
        let security = TokenSecurity::new(engine.clone(), config.filter())?;
        let state = AppState::new(config.clone(), engine);

        Ok(Self {
            config: config.server().clone(),
            state,
            security,
        })
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
        security: TokenSecurity,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let filter = state.config.filter().clone();
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(state)
            .wrap(security)
            .wrap(Condition::new(filter.cors_enabled, cors))
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("Server", "daas-token")))
            .configure(move |cfg| routes::token::configure_routes(cfg, &filter))
    }

    /// Start the HTTP server, sweeping expired tokens while it runs
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        info!("Starting HTTP server on {}", bind_addr);

        let _sweeper = self.start_sweeper();

        let state = web::Data::new(self.state);
        let security = self.security;
        let mut server = ActixHttpServer::new(move || Self::create_app(state.clone(), security.clone()));
        if let Some(workers) = self.config.workers {
            server = server.workers(workers);
        }

        let server = server
            .bind(&bind_addr)
            .map_err(|e| SecurityError::config(format!("Failed to bind {}: {}", bind_addr, e)))?
            .run();

        info!("HTTP server listening on {}", bind_addr);
        server
            .await
            .map_err(|e| SecurityError::internal(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    fn start_sweeper(&self) -> Option<SweeperHandle> {
        let token = self.state.config.token();
        token
            .sweep_enabled
            .then(|| self.state.engine.start_sweeper(token.sweep_interval()))
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}
