//! Error handling
//!
//! Defines error types and HTTP response mapping for the gateway.

pub mod responses;
pub mod types;

pub use types::*;
