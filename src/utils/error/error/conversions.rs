//! Type conversions into SecurityError

use super::types::SecurityError;

impl From<argon2::password_hash::Error> for SecurityError {
    fn from(err: argon2::password_hash::Error) -> Self {
        SecurityError::Internal(format!("Password hash error: {}", err))
    }
}

impl From<regex::Error> for SecurityError {
    fn from(err: regex::Error) -> Self {
        SecurityError::Config(format!("Invalid resource pattern: {}", err))
    }
}
