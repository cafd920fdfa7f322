//! Request types for the gateway endpoints.
//!
//! All parameters arrive as query strings; absent parameters deserialize to
//! empty strings, mirroring how the handlers distinguish "missing" from
//! "present".

use serde::Deserialize;

/// Query parameters for GET /open.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenParams {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub token: String,
}

/// Query parameters for GET /test.
#[derive(Debug, Clone, Deserialize)]
pub struct ProbeParams {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub glob: String,
    #[serde(default)]
    pub token: String,
}

/// Query parameters for GET /style.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleParams {
    #[serde(default)]
    pub class: String,
    #[serde(default)]
    pub token: String,
}
