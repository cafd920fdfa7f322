//! Configuration management for the folder gateway
//!
//! Startup-only configuration: all three values are fixed for the process
//! lifetime and handed to the server as an immutable value.

use std::fs;
use std::path::PathBuf;

use clap::Parser;

use crate::error::ConfigError;

/// Command-line flags accepted at startup.
#[derive(Parser, Debug)]
#[command(name = "folder-gateway", about = "Open local folders in the file manager via browser links")]
pub struct Cli {
    /// Base directory for allowed paths
    #[arg(long, default_value = ".")]
    pub base: PathBuf,

    /// Port to listen on
    #[arg(long, default_value_t = 4455)]
    pub port: u16,

    /// Secret token to check for (&token=...) in requests.
    /// An empty token disables authentication.
    #[arg(long, env = "FOLDER_GATEWAY_TOKEN", default_value = "")]
    pub token: String,
}

/// Validated gateway configuration, immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Absolute base directory all request paths are joined onto.
    pub base_path: PathBuf,

    /// Port the HTTP listener binds on (loopback only).
    pub port: u16,

    /// Shared secret; empty disables the token check.
    pub token: String,
}

impl GatewayConfig {
    /// Resolve and validate the startup flags.
    ///
    /// The base directory is made absolute lexically (symlinks are not
    /// resolved) and must exist and be a directory.
    pub fn resolve(cli: Cli) -> Result<Self, ConfigError> {
        let base_path = std::path::absolute(&cli.base)
            .map_err(|e| ConfigError::BaseResolve(cli.base.clone(), e))?;

        match fs::metadata(&base_path) {
            Ok(info) if info.is_dir() => {}
            Ok(_) => return Err(ConfigError::BaseNotDirectory(base_path)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ConfigError::BaseMissing(base_path));
            }
            Err(e) => return Err(ConfigError::BaseResolve(base_path, e)),
        }

        Ok(Self {
            base_path,
            port: cli.port,
            token: cli.token,
        })
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(base: PathBuf) -> Cli {
        Cli {
            base,
            port: 4455,
            token: String::new(),
        }
    }

    #[test]
    fn resolve_accepts_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = GatewayConfig::resolve(cli(dir.path().to_path_buf())).unwrap();
        assert!(config.base_path.is_absolute());
        assert_eq!(config.port, 4455);
        assert!(config.token.is_empty());
    }

    #[test]
    fn resolve_rejects_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-dir");
        let err = GatewayConfig::resolve(cli(missing)).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn resolve_rejects_plain_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        std::fs::write(&file, "x").unwrap();
        let err = GatewayConfig::resolve(cli(file)).unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }

    #[test]
    fn resolve_makes_relative_base_absolute() {
        let config = GatewayConfig::resolve(cli(PathBuf::from("."))).unwrap();
        assert!(config.base_path.is_absolute());
    }
}
