//! Route definitions.

use axum::routing::get;
use axum::Router;

use super::handlers;
use super::state::GatewayState;

/// Creates the gateway router with all routes.
pub fn create_router(state: GatewayState) -> Router {
    Router::new()
        .route("/open", get(handlers::open::open_folder))
        .route("/test", get(handlers::probe::probe_folder))
        .route("/style", get(handlers::style::style_rule))
        .with_state(state)
}
