//! Bearer token model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque bearer token standing in for a verified identity
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// Token value (primary key in the token store)
    pub value: String,
    /// Principal id of the identity the token was issued to
    pub subject: String,
    /// Issue timestamp
    pub issued_at: DateTime<Utc>,
    /// Expiry timestamp
    pub expired_at: DateTime<Utc>,
}

impl Token {
    /// Create a token
    pub fn new(
        value: impl Into<String>,
        subject: impl Into<String>,
        issued_at: DateTime<Utc>,
        expired_at: DateTime<Utc>,
    ) -> Self {
        Self {
            value: value.into(),
            subject: subject.into(),
            issued_at,
            expired_at,
        }
    }

    /// A token is no longer usable once `expired_at` has been reached
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expired_at <= now
    }

    /// Check expiry against the current time
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Short, log-safe rendering of the token value
    pub fn masked(&self) -> String {
        mask_token(&self.value)
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("value", &self.masked())
            .field("subject", &self.subject)
            .field("issued_at", &self.issued_at)
            .field("expired_at", &self.expired_at)
            .finish()
    }
}

/// Keep the first few characters of a token value for logging
pub fn mask_token(value: &str) -> String {
    let prefix: String = value.chars().take(6).collect();
    format!("{}...", prefix)
}
