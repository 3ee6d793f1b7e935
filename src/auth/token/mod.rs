//! Token lifecycle
//!
//! [`TokenManager`] is the single entry point for issuing, validating and
//! revoking tokens; the background sweeper purges expired ones.

pub mod manager;
pub mod sweeper;


pub use manager::TokenManager;
pub use sweeper::SweeperHandle;
