//! GET /open - reveal a directory in the native file manager.

use std::fs;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use log::{info, warn};

use crate::auth::validate_token;
use crate::error::RequestError;
use crate::server::state::GatewayState;
use crate::server::types::OpenParams;
use crate::storage::resolve_name;

/// Validation order is fixed: missing-name, token, path guard, then the
/// existence check. Only after all four pass does the process launch run.
pub async fn open_folder(
    State(state): State<GatewayState>,
    Query(params): Query<OpenParams>,
) -> Result<StatusCode, RequestError> {
    if params.name.is_empty() {
        return Err(RequestError::MissingParam("name"));
    }
    validate_token(&state.config.token, &params.token)?;

    let full_path = resolve_name(&state.config.base_path, &params.name).inspect_err(|_| {
        warn!("Rejected invalid name: {:?}", params.name);
    })?;

    match fs::metadata(&full_path) {
        Ok(info) if info.is_dir() => {}
        _ => return Err(RequestError::NotFound),
    }

    state.opener.open_folder(&full_path)?;
    info!("Opened folder: {}", full_path.display());

    Ok(StatusCode::NO_CONTENT)
}
