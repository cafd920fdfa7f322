//! HTTP server
//!
//! Axum router, shared state, and request handlers for the gateway.

pub mod core;
pub mod handlers;
pub mod router;
pub mod state;
pub mod types;

pub use core::Server;
pub use router::create_router;
pub use state::GatewayState;
