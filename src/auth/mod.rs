//! Authentication
//!
//! Shared-secret token validation for incoming requests.

pub mod validator;

pub use validator::validate_token;
