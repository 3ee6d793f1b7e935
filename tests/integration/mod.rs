//! Integration tests for daas-token
//!
//! These tests drive the public API with the in-memory collaborators and
//! with custom ones swapped in through the engine builder.

pub mod config_validation_tests;
pub mod engine_tests;
pub mod error_handling_tests;
pub mod token_store_tests;
