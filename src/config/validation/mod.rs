//! Configuration validation
//!
//! - `trait_def`: the `Validate` trait
//! - `config_validators`: server, token and filter sections
//! - `acl_validators`: access rules and seed users

mod acl_validators;
mod config_validators;
mod tests;
mod trait_def;

pub use trait_def::Validate;
