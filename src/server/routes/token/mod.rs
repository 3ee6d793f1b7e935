//! Token endpoints: login and logout

mod login;
mod logout;
mod models;

pub use login::login;
pub use logout::logout;
pub use models::{LoginRequest, LoginResponse};

use crate::config::FilterConfig;
use actix_web::web;

/// Mount the login and logout endpoints at their configured paths
pub fn configure_routes(cfg: &mut web::ServiceConfig, filter: &FilterConfig) {
    cfg.route(&filter.login_url, web::post().to(login))
        .route(&filter.logout_url, web::post().to(logout));
}
