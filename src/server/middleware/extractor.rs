//! Handler access to the authenticated caller

use crate::core::models::Authentication;
use crate::utils::error::SecurityError;
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures::future::{Ready, ready};

/// Authentication stored by [`TokenSecurity`](super::TokenSecurity) for the current call
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Authentication);

impl AuthenticatedUser {
    pub fn principal_id(&self) -> &str {
        self.0.principal_id()
    }

    pub fn into_inner(self) -> Authentication {
        self.0
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = SecurityError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<Authentication>()
                .cloned()
                .map(AuthenticatedUser)
                .ok_or(SecurityError::MissingToken),
        )
    }
}
