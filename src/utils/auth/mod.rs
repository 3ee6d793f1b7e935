//! Authentication utilities

pub mod keys;

pub use keys::generate_token_value;
