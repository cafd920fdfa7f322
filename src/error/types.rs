//! Error types
//!
//! Defines domain-specific error types for each module of the gateway.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Startup configuration errors. All of these are fatal to the process.
#[derive(Debug)]
pub enum ConfigError {
    BaseResolve(PathBuf, io::Error),
    BaseMissing(PathBuf),
    BaseNotDirectory(PathBuf),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BaseResolve(p, e) => {
                write!(f, "error resolving base path {}: {}", p.display(), e)
            }
            ConfigError::BaseMissing(p) => {
                write!(f, "base path does not exist: {}", p.display())
            }
            ConfigError::BaseNotDirectory(p) => {
                write!(f, "base path is not a directory: {}", p.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Failure to start the external file-manager process.
///
/// Covers the spawn step only; nothing the launched program does after it
/// has started is observed by the gateway.
#[derive(Debug)]
pub enum LaunchError {
    Spawn(String, io::Error),
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchError::Spawn(program, e) => write!(f, "{}: {}", program, e),
        }
    }
}

impl std::error::Error for LaunchError {}

/// Per-request errors. Every variant terminates exactly one request; none
/// is retried and none is fatal to the process.
#[derive(Debug)]
pub enum RequestError {
    /// A required query parameter was absent or empty.
    MissingParam(&'static str),
    /// The supplied token did not match the configured secret.
    InvalidToken,
    /// The caller-supplied name was absolute.
    InvalidName,
    /// The resolved path is absent or not a directory.
    NotFound,
    /// The glob pattern failed to parse.
    BadGlob,
    /// The file-manager process could not be spawned.
    Launch(LaunchError),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::MissingParam(name) => write!(f, "Missing ?{}= parameter", name),
            RequestError::InvalidToken => write!(f, "Invalid Token"),
            RequestError::InvalidName => write!(f, "Invalid folder/file name"),
            RequestError::NotFound => write!(f, "Not Found"),
            RequestError::BadGlob => write!(f, "Bad Glob"),
            RequestError::Launch(e) => write!(f, "Failed to open: {}", e),
        }
    }
}

impl std::error::Error for RequestError {}

impl From<LaunchError> for RequestError {
    fn from(error: LaunchError) -> Self {
        RequestError::Launch(error)
    }
}
