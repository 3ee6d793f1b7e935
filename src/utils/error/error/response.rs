//! HTTP response handling for errors
//!
//! Authentication failures answer 401 and a policy deny answers 403. An
//! `AuthorizationError` means the policy could not be evaluated at all, so
//! it answers 500 with its own message key rather than posing as a deny.

use super::types::SecurityError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;

impl ResponseError for SecurityError {
    fn status_code(&self) -> StatusCode {
        match self {
            SecurityError::IdentityNotFound(_)
            | SecurityError::InvalidCredentials(_)
            | SecurityError::TokenNotFound
            | SecurityError::TokenExpired
            | SecurityError::MissingToken
            | SecurityError::MalformedToken(_)
            | SecurityError::UnsupportedAuthenticationRequest(_) => StatusCode::UNAUTHORIZED,
            SecurityError::AuthorizationDenied(_) => StatusCode::FORBIDDEN,
            SecurityError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            SecurityError::AuthorizationError(_)
            | SecurityError::Config(_)
            | SecurityError::Yaml(_)
            | SecurityError::Io(_)
            | SecurityError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let code = status
            .canonical_reason()
            .unwrap_or("Error")
            .to_uppercase()
            .replace(' ', "_");

        HttpResponse::build(status).json(ErrorResponse {
            success: false,
            error: ErrorDetail {
                code,
                message_key: self.message_key().to_string(),
                timestamp: chrono::Utc::now().timestamp(),
            },
        })
    }
}

/// Standard error response format
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_key: String,
    pub timestamp: i64,
}
