//! Shared server state
//!
//! Immutable configuration plus the injected folder opener, cloned into
//! each handler via axum's `State` extractor. Nothing here is mutated
//! after startup, so no locks are needed.

use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::launch::FolderOpener;

#[derive(Clone)]
pub struct GatewayState {
    pub config: Arc<GatewayConfig>,
    pub opener: Arc<dyn FolderOpener>,
}

impl GatewayState {
    pub fn new(config: GatewayConfig, opener: Arc<dyn FolderOpener>) -> Self {
        Self {
            config: Arc::new(config),
            opener,
        }
    }
}
