//! Core data models for the token security engine
//!
//! This module defines the data structures shared by the token store,
//! the authentication chain and the authorization voters.

pub mod acl;
pub mod identity;
pub mod request;
pub mod token;
pub mod vote;


pub use acl::AclEntry;
pub use identity::Identity;
pub use request::{Authentication, AuthenticationKind, AuthenticationRequest, ResourceRequest};
pub use token::{Token, mask_token};
pub use vote::{Decision, Vote};
