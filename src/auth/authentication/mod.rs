//! Authentication chain
//!
//! An [`AuthenticationManager`] routes each request to the first registered
//! [`AuthenticationProvider`] supporting its kind.

pub mod manager;
pub mod token;
pub mod username_password;


pub use manager::{AuthenticationManager, AuthenticationManagerBuilder};
pub use token::TokenAuthenticationProvider;
pub use username_password::UsernamePasswordAuthenticationProvider;

use crate::core::models::{Authentication, AuthenticationKind, AuthenticationRequest};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Authenticates one kind of request
#[async_trait]
pub trait AuthenticationProvider: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &'static str;

    fn supports(&self, kind: AuthenticationKind) -> bool;

    async fn authenticate(&self, request: &AuthenticationRequest) -> Result<Authentication>;
}
