//! Helper functions for creating and classifying errors

use super::types::SecurityError;

impl SecurityError {
    pub fn identity_not_found<S: Into<String>>(principal: S) -> Self {
        Self::IdentityNotFound(principal.into())
    }

    pub fn invalid_credentials<S: Into<String>>(principal: S) -> Self {
        Self::InvalidCredentials(principal.into())
    }

    pub fn malformed_token<S: Into<String>>(message: S) -> Self {
        Self::MalformedToken(message.into())
    }

    pub fn denied<S: Into<String>>(message: S) -> Self {
        Self::AuthorizationDenied(message.into())
    }

    pub fn authorization<S: Into<String>>(message: S) -> Self {
        Self::AuthorizationError(message.into())
    }

    pub fn store<S: Into<String>>(message: S) -> Self {
        Self::StoreUnavailable(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Re-label a collaborator failure as a store outage, keeping an existing one as is
    pub fn into_store_failure(self) -> Self {
        match self {
            Self::StoreUnavailable(_) => self,
            other => Self::StoreUnavailable(other.to_string()),
        }
    }

    /// Whether the error belongs to the authentication phase
    pub fn is_authentication_failure(&self) -> bool {
        matches!(
            self,
            Self::IdentityNotFound(_)
                | Self::InvalidCredentials(_)
                | Self::TokenNotFound
                | Self::TokenExpired
                | Self::MissingToken
                | Self::MalformedToken(_)
                | Self::UnsupportedAuthenticationRequest(_)
        )
    }

    /// Whether the error belongs to the authorization phase
    pub fn is_authorization_failure(&self) -> bool {
        matches!(self, Self::AuthorizationDenied(_) | Self::AuthorizationError(_))
    }

    /// Stable message key for localized, caller-facing messages.
    ///
    /// The key never carries the internal cause, so it is safe to return
    /// to the caller.
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::IdentityNotFound(_) => "daas.token.identity.not_found",
            // Same key as an unknown user so the response does not reveal
            // which usernames exist.
            Self::InvalidCredentials(_) => "daas.token.identity.not_found",
            Self::TokenNotFound => "daas.token.not_found",
            Self::TokenExpired => "daas.token.expired",
            Self::MissingToken => "daas.token.required",
            Self::MalformedToken(_) => "daas.token.malformed",
            Self::UnsupportedAuthenticationRequest(_) => "daas.token.authentication.unsupported",
            Self::AuthorizationDenied(_) => "daas.token.access.denied",
            Self::AuthorizationError(_) => "daas.token.access.error",
            Self::StoreUnavailable(_) => "daas.token.store.unavailable",
            Self::Config(_) | Self::Yaml(_) | Self::Io(_) | Self::Internal(_) => {
                "daas.token.internal"
            }
        }
    }
}
