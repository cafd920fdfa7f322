//! Server core
//!
//! Binds the loopback listener and serves the router. Concurrency is
//! whatever axum and tokio provide per connection; the gateway itself holds
//! no mutable state between requests.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use log::info;
use tokio::net::TcpListener;

use super::router::create_router;
use super::state::GatewayState;
use crate::config::GatewayConfig;
use crate::launch::FolderOpener;

pub struct Server {
    listener: TcpListener,
    state: GatewayState,
}

impl Server {
    /// Binds `127.0.0.1:<port>`. The gateway never listens on a
    /// non-loopback interface. Port 0 picks an ephemeral port; the actual
    /// address is available via [`Server::local_addr`].
    pub async fn bind(config: GatewayConfig, opener: Arc<dyn FolderOpener>) -> io::Result<Self> {
        let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
        let listener = TcpListener::bind(addr).await?;

        info!("Server bound to {}", listener.local_addr()?);
        info!("Base path: {}", config.base_path.display());

        Ok(Self {
            listener,
            state: GatewayState::new(config, opener),
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serves requests until the process is terminated.
    pub async fn serve(self) -> io::Result<()> {
        axum::serve(self.listener, create_router(self.state)).await
    }
}
