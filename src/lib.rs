//! # daas-token
//!
//! Token based authentication and authorization for actix-web services.
//!
//! A username/password login yields an opaque bearer token; later calls
//! present the token, which is validated, resolved to an identity and
//! checked against URL access rules by a set of voters.
//!
//! ## Embedding the filter
//!
//! ```rust,no_run
//! use daas_token::{Config, SecurityEngine, server::TokenSecurity};
//! use actix_web::{App, HttpServer, web};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/daas-token.yaml").await?;
//!     let engine = Arc::new(SecurityEngine::from_config(&config)?);
//!     let security = TokenSecurity::new(engine.clone(), config.filter())?;
//!     let _sweeper = engine.start_sweeper(config.token().sweep_interval());
//!
//!     HttpServer::new(move || {
//!         App::new()
//!             .wrap(security.clone())
//!             .route("/api/reports", web::get().to(|| async { "reports" }))
//!     })
//!     .bind(("127.0.0.1", 8080))?
//!     .run()
//!     .await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use auth::{SecurityContext, SecurityEngine, SecurityEngineBuilder};
pub use config::Config;
pub use core::models::{
    AclEntry, Authentication, AuthenticationKind, AuthenticationRequest, Decision, Identity,
    ResourceRequest, Token, Vote,
};
pub use utils::error::{Result, SecurityError};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
