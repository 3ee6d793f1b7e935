//! HTTP middleware
//!
//! - `auth`: the token filter guarding protected paths
//! - `resolver`: reading the bearer token from a request
//! - `extractor`: handler access to the authenticated caller

mod auth;
mod extractor;
mod helpers;
mod resolver;


pub use auth::{TokenSecurity, TokenSecurityMiddleware};
pub use extractor::AuthenticatedUser;
pub use helpers::FilterRules;
pub use resolver::{BearerAuthorizationHeaderTokenResolver, TokenResolver};
