//! Folder Gateway - Entry Point
//!
//! A localhost HTTP gateway that opens directories in the host's native
//! file manager when a link on a web page is fetched:
//!
//! ```text
//! folder-gateway --base /home/u/Projects --token foo --port 1234
//! ```
//!
//! then put a link onto a website:
//! `http://localhost:1234/open?name=subDir&token=foo`.

use std::process;
use std::sync::Arc;

use clap::Parser;
use log::info;

use folder_gateway::config::{Cli, GatewayConfig};
use folder_gateway::launch::SystemOpener;
use folder_gateway::server::Server;

#[tokio::main]
async fn main() {
    // env_logger picks up the RUST_LOG environment variable
    env_logger::init();

    let cli = Cli::parse();

    let config = match GatewayConfig::resolve(cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    info!("Launching folder gateway...");

    println!("Base path: {}", config.base_path.display());
    println!("Listening on http://localhost:{}", config.port);
    println!(
        "Example:\n http://localhost:{}/open?name=.&token={}",
        config.port, config.token
    );

    let server = match Server::bind(config, Arc::new(SystemOpener)).await {
        Ok(server) => server,
        Err(e) => {
            eprintln!("Error: failed to bind listener: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = server.serve().await {
        eprintln!("Server error: {}", e);
        process::exit(1);
    }
}
