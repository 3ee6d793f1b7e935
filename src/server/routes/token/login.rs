//! Login endpoint

use super::models::{LoginRequest, LoginResponse};
use crate::core::models::AuthenticationRequest;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::SecurityError;
use actix_web::{HttpResponse, Result as ActixResult, web};
use tracing::info;

/// Exchange a username and password for a bearer token
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    info!("Login attempt: {}", request.username);

    let LoginRequest { username, password } = request.into_inner();
    let authentication = state
        .engine
        .login(&AuthenticationRequest::credentials(username, password))
        .await?;

    let token = authentication
        .token
        .ok_or_else(|| SecurityError::internal("Credentials login produced no token"))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(LoginResponse {
        token: token.value,
        expired_at: token.expired_at,
    })))
}
