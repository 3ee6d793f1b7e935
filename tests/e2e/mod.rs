//! End-to-end tests for daas-token
//!
//! Complete login, access and logout flows through the HTTP layer.

pub mod http_flow;
