//! Secret verification
//!
//! How a presented secret is checked against the stored one is a
//! collaborator concern; the username/password provider only sees the
//! [`PasswordVerifier`] seam.

use crate::utils::error::{Result, SecurityError};
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier as _};
use serde::{Deserialize, Serialize};

/// Checks a presented secret against a stored credential
pub trait PasswordVerifier: Send + Sync {
    fn verify(&self, presented: &str, stored: &str) -> Result<bool>;
}

/// Verifies against Argon2 PHC strings
#[derive(Debug, Clone, Default)]
pub struct Argon2PasswordVerifier;

impl PasswordVerifier for Argon2PasswordVerifier {
    fn verify(&self, presented: &str, stored: &str) -> Result<bool> {
        let parsed = PasswordHash::new(stored)?;
        match Argon2::default().verify_password(presented.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

/// Compares secrets verbatim; meant for development seed users
#[derive(Debug, Clone, Default)]
pub struct PlainPasswordVerifier;

impl PasswordVerifier for PlainPasswordVerifier {
    fn verify(&self, presented: &str, stored: &str) -> Result<bool> {
        Ok(constant_time_eq(presented.as_bytes(), stored.as_bytes()))
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Encoding of stored secrets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordEncoding {
    #[default]
    Plain,
    Argon2,
}

/// Verifier that dispatches on the stored credential's format: Argon2 PHC
/// strings are checked with Argon2, anything else verbatim
#[derive(Debug, Clone, Default)]
pub struct DelegatingPasswordVerifier;

impl PasswordVerifier for DelegatingPasswordVerifier {
    fn verify(&self, presented: &str, stored: &str) -> Result<bool> {
        if stored.starts_with("$argon2") {
            Argon2PasswordVerifier.verify(presented, stored)
        } else {
            PlainPasswordVerifier.verify(presented, stored)
        }
    }
}

/// Hash a secret into an Argon2 PHC string
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| SecurityError::internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}
