pub mod auth;
pub mod badge;
pub mod config;
pub mod error;
pub mod launch;
pub mod server;
pub mod storage;

pub use config::GatewayConfig;
pub use server::Server;
