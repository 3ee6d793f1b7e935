//! Authentication and resource request models

use super::identity::Identity;
use super::token::{Token, mask_token};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Routing tag of an authentication request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthenticationKind {
    /// Username and secret
    Credentials,
    /// Previously issued bearer token
    TokenValue,
}

impl AuthenticationKind {
    /// Every kind the engine knows how to route
    pub const ALL: [AuthenticationKind; 2] =
        [AuthenticationKind::Credentials, AuthenticationKind::TokenValue];
}

impl std::fmt::Display for AuthenticationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthenticationKind::Credentials => write!(f, "credentials"),
            AuthenticationKind::TokenValue => write!(f, "token_value"),
        }
    }
}

/// Authentication request, dispatched on its variant
#[derive(Clone)]
pub enum AuthenticationRequest {
    /// Username/password login
    Credentials { username: String, secret: String },
    /// Bearer token presented on an inbound call
    TokenValue { token: String },
}

impl AuthenticationRequest {
    pub fn credentials(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self::Credentials {
            username: username.into(),
            secret: secret.into(),
        }
    }

    pub fn token(token: impl Into<String>) -> Self {
        Self::TokenValue {
            token: token.into(),
        }
    }

    pub fn kind(&self) -> AuthenticationKind {
        match self {
            Self::Credentials { .. } => AuthenticationKind::Credentials,
            Self::TokenValue { .. } => AuthenticationKind::TokenValue,
        }
    }
}

impl std::fmt::Debug for AuthenticationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Credentials { username, .. } => f
                .debug_struct("Credentials")
                .field("username", username)
                .field("secret", &"[REDACTED]")
                .finish(),
            Self::TokenValue { token } => f
                .debug_struct("TokenValue")
                .field("token", &mask_token(token))
                .finish(),
        }
    }
}

/// Successful authentication outcome
#[derive(Debug, Clone)]
pub struct Authentication {
    /// Authenticated identity (credential stripped)
    pub identity: Identity,
    /// Issued token for a credentials login, validated token for a token login
    pub token: Option<Token>,
    /// When the authentication happened
    pub authenticated_at: DateTime<Utc>,
}

impl Authentication {
    pub fn new(identity: Identity, token: Option<Token>) -> Self {
        Self {
            identity: identity.without_secret(),
            token,
            authenticated_at: Utc::now(),
        }
    }

    pub fn principal_id(&self) -> &str {
        &self.identity.principal_id
    }
}

/// Resource being accessed: HTTP method plus request path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRequest {
    pub method: String,
    pub path: String,
}

impl ResourceRequest {
    pub fn new(method: impl AsRef<str>, path: impl Into<String>) -> Self {
        Self {
            method: method.as_ref().to_ascii_uppercase(),
            path: path.into(),
        }
    }
}

impl std::fmt::Display for ResourceRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}
