//! Logout endpoint

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use tracing::{info, warn};

/// Revoke the presented bearer token
///
/// A missing or unknown token still answers 200; a store failure answers
/// 503 and leaves the token in place.
pub async fn logout(state: web::Data<AppState>, req: HttpRequest) -> ActixResult<HttpResponse> {
    let token = state.resolver.resolve(&req).unwrap_or_else(|e| {
        warn!("Ignoring unreadable token on logout: {}", e);
        None
    });

    if let Err(e) = state.engine.logout(token.as_deref()).await {
        warn!("Failed to revoke token: {}", e);
        return Err(e.into());
    }
    if token.is_some() {
        info!("Token revoked");
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(())))
}
