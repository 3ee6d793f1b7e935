//! Utility modules
//!
//! - **auth**: token value generation
//! - **error**: the crate error type and its HTTP rendering
//! - **logging**: tracing subscriber setup for the binary

pub mod auth;
pub mod error;
pub mod logging;
