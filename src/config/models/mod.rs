//! Configuration models
//!
//! One file per configuration section. Defaults live here so the serde
//! attributes and the `Default` impls agree.

pub mod acl;
pub mod filter;
pub mod security;
pub mod server;
pub mod token;
pub mod users;

pub use acl::*;
pub use filter::*;
pub use security::*;
pub use server::*;
pub use token::*;
pub use users::*;

/// Default server host
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8080
}

/// Default token lifetime (30 minutes)
pub fn default_ttl_secs() -> u64 {
    1800
}

/// Default interval between expiry sweeps (10 minutes)
pub fn default_sweep_interval_secs() -> u64 {
    600
}

/// Default path pattern guarded by the token filter
pub fn default_processes_url() -> String {
    "/api/**".to_string()
}

/// Default login endpoint
pub fn default_login_url() -> String {
    "/token/login".to_string()
}

/// Default logout endpoint
pub fn default_logout_url() -> String {
    "/token/logout".to_string()
}

/// Default boolean true value
pub fn default_true() -> bool {
    true
}
