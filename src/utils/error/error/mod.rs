//! Error handling for the token security engine
//!
//! This module defines all error types used throughout the crate.

#![allow(missing_docs)]

mod conversions;
mod helpers;
mod response;
mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{Result, SecurityError};
