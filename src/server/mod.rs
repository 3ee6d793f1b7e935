//! HTTP server
//!
//! The token filter middleware, the login/logout routes and the actix
//! server wrapper that serves them.

pub mod builder;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use builder::{ServerBuilder, run_server};
pub use middleware::{AuthenticatedUser, TokenSecurity};
pub use server::HttpServer;
pub use state::AppState;
