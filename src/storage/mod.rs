//! Storage contracts for the token security engine
//!
//! The engine only talks to the traits defined here; the in-memory
//! implementations are the defaults wired by `SecurityEngine`.

pub mod identity;
pub mod token_store;

pub use identity::{IdentityProvider, MemoryIdentityProvider};
pub use token_store::{MemoryTokenStore, TokenStore};

#[cfg(test)]
pub use identity::MockIdentityProvider;
#[cfg(test)]
pub use token_store::MockTokenStore;
