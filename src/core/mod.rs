//! Core data structures for the token security engine

pub mod models;
