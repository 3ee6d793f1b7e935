//! Error types for the token security engine

use thiserror::Error;

/// Result type alias for the token security engine
pub type Result<T> = std::result::Result<T, SecurityError>;

/// Main error type for the token security engine
#[derive(Error, Debug)]
pub enum SecurityError {
    /// No identity is registered under the given principal
    #[error("Identity not found: {0}")]
    IdentityNotFound(String),

    /// The presented secret does not match the stored one
    #[error("Invalid credentials for: {0}")]
    InvalidCredentials(String),

    /// The token is not (or no longer) in the token store
    #[error("Token not found")]
    TokenNotFound,

    /// The token exists but its expiry has passed
    #[error("Token expired")]
    TokenExpired,

    /// A protected resource was requested without a token
    #[error("Token required")]
    MissingToken,

    /// The token could not be read from the request
    #[error("Malformed token: {0}")]
    MalformedToken(String),

    /// No registered authentication provider supports the request kind
    #[error("Unsupported authentication request: {0}")]
    UnsupportedAuthenticationRequest(String),

    /// The caller is authenticated but not permitted to access the resource
    #[error("Access denied: {0}")]
    AuthorizationDenied(String),

    /// Policy evaluation failed (distinct from a legitimate deny); rendered as 500
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// A backing store failed
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}
