//! Token filter middleware
//!
//! Guards every path matching `processes_url`: resolves the bearer token,
//! authenticates it, records the result in the [`SecurityContext`] and the
//! request extensions, authorizes the call, and only then runs the handler,
//! inside the same context scope.

use super::helpers::FilterRules;
use super::resolver::{BearerAuthorizationHeaderTokenResolver, TokenResolver};
use crate::auth::{SecurityContext, SecurityEngine};
use crate::config::FilterConfig;
use crate::core::models::{Authentication, AuthenticationRequest, ResourceRequest};
use crate::utils::error::SecurityError;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::HttpMessage;
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::sync::Arc;
use tracing::{debug, warn};

struct Guard {
    engine: Arc<SecurityEngine>,
    rules: FilterRules,
    resolver: Arc<dyn TokenResolver>,
}

impl Guard {
    async fn check(
        &self,
        req: &ServiceRequest,
        path: &str,
    ) -> crate::utils::error::Result<Authentication> {
        let token = match self.resolver.resolve(req.request()) {
            Ok(token) => token,
            Err(e) if self.rules.strict_token() => return Err(e),
            Err(e) => {
                debug!("Treating unreadable token as absent: {}", e);
                None
            }
        };

        let token = token.ok_or(SecurityError::MissingToken)?;
        let authentication = self
            .engine
            .login(&AuthenticationRequest::token(token))
            .await?;
        SecurityContext::set(authentication.clone())?;

        let resource = ResourceRequest::new(req.method().as_str(), path);
        self.engine
            .authorize(&authentication.identity, &resource)
            .await?;

        Ok(authentication)
    }
}

/// Token filter for actix-web applications
#[derive(Clone)]
pub struct TokenSecurity {
    guard: Arc<Guard>,
}

impl TokenSecurity {
    /// Filter with the bearer header resolver
    pub fn new(
        engine: Arc<SecurityEngine>,
        config: &FilterConfig,
    ) -> crate::utils::error::Result<Self> {
        Self::with_resolver(
            engine,
            config,
            Arc::new(BearerAuthorizationHeaderTokenResolver),
        )
    }

    pub fn with_resolver(
        engine: Arc<SecurityEngine>,
        config: &FilterConfig,
        resolver: Arc<dyn TokenResolver>,
    ) -> crate::utils::error::Result<Self> {
        Ok(Self {
            guard: Arc::new(Guard {
                engine,
                rules: FilterRules::from_config(config)?,
                resolver,
            }),
        })
    }
}

impl<S, B> Transform<S, ServiceRequest> for TokenSecurity
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = TokenSecurityMiddleware<S>;
    type Future = Ready<std::result::Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TokenSecurityMiddleware {
            service: Rc::new(service),
            guard: Arc::clone(&self.guard),
        }))
    }
}

/// Service implementation for [`TokenSecurity`]
pub struct TokenSecurityMiddleware<S> {
    service: Rc<S>,
    guard: Arc<Guard>,
}

impl<S, B> Service<ServiceRequest> for TokenSecurityMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = std::result::Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        // Percent-decoded path, the same one the router matches on
        let path = req.match_info().as_str().to_owned();

        if !self.guard.rules.requires_token(req.method(), &path) {
            return Box::pin(async move {
                service
                    .call(req)
                    .await
                    .map(ServiceResponse::map_into_left_body)
            });
        }

        let guard = Arc::clone(&self.guard);
        Box::pin(SecurityContext::scope(async move {
            match guard.check(&req, &path).await {
                Ok(authentication) => {
                    debug!(
                        "{} {} authorized for {}",
                        req.method(),
                        path,
                        authentication.principal_id()
                    );
                    req.extensions_mut().insert(authentication);
                    service
                        .call(req)
                        .await
                        .map(ServiceResponse::map_into_left_body)
                }
                Err(e) => {
                    warn!("Rejected {} {}: {}", req.method(), path, e);
                    Ok(req.error_response(e).map_into_right_body())
                }
            }
        }))
    }
}
