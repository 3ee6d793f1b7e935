//! Authentication and authorization engine
//!
//! Opaque bearer tokens are issued on a username/password login and
//! presented on later calls; access is decided per URL by voters over ACL
//! entries. [`SecurityEngine`] wires the pieces together.

pub mod acl;
pub mod authentication;
pub mod authorization;
pub mod context;
pub mod password;
pub mod system;
pub mod token;


pub use acl::{AclProvider, AntPattern, UrlAclProvider, UrlAclProviderBuilder};
pub use authentication::{
    AuthenticationManager, AuthenticationManagerBuilder, AuthenticationProvider,
    TokenAuthenticationProvider, UsernamePasswordAuthenticationProvider,
};
pub use authorization::{
    AuthorizationManager, AuthorizationProvider, RoleVoter, UrlAuthorizationProvider, UserVoter,
    Voter,
};
pub use context::SecurityContext;
pub use password::{
    Argon2PasswordVerifier, DelegatingPasswordVerifier, PasswordEncoding, PasswordVerifier,
    PlainPasswordVerifier, hash_password,
};
pub use system::{SecurityEngine, SecurityEngineBuilder};
pub use token::{SweeperHandle, TokenManager};
