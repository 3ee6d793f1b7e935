//! Token resolution from inbound requests

use crate::utils::error::{Result, SecurityError};
use actix_web::HttpRequest;
use actix_web::http::header::AUTHORIZATION;

/// Reads the presented token, if any, from a request
pub trait TokenResolver: Send + Sync {
    fn resolve(&self, req: &HttpRequest) -> Result<Option<String>>;
}

/// Reads `Authorization: Bearer <token>`
#[derive(Debug, Clone, Copy, Default)]
pub struct BearerAuthorizationHeaderTokenResolver;

const BEARER: &str = "bearer";

impl TokenResolver for BearerAuthorizationHeaderTokenResolver {
    fn resolve(&self, req: &HttpRequest) -> Result<Option<String>> {
        let Some(header) = req.headers().get(AUTHORIZATION) else {
            return Ok(None);
        };

        let value = header
            .to_str()
            .map_err(|_| SecurityError::malformed_token("Authorization header is not valid ASCII"))?;

        let (scheme, token) = value
            .trim()
            .split_once(' ')
            .ok_or_else(|| SecurityError::malformed_token("Expected 'Bearer <token>'"))?;

        if !scheme.eq_ignore_ascii_case(BEARER) {
            return Err(SecurityError::malformed_token(format!(
                "Unsupported authorization scheme: {}",
                scheme
            )));
        }

        let token = token.trim();
        if token.is_empty() {
            return Err(SecurityError::malformed_token("Empty bearer token"));
        }

        Ok(Some(token.to_string()))
    }
}
