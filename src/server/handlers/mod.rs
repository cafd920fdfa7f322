//! Request handlers, one file per endpoint.

pub mod open;
pub mod probe;
pub mod style;
