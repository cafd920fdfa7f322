//! GET /test - liveness badge for a directory link.
//!
//! Always answers 200 with an SVG body once validation passes; absence is
//! signaled by the red fill, not by the HTTP status, so the image can be
//! embedded live on the originating page.

use std::fs;

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use log::warn;

use crate::auth::validate_token;
use crate::badge::{self, BadgeColor};
use crate::error::RequestError;
use crate::server::state::GatewayState;
use crate::server::types::ProbeParams;
use crate::storage::probe::{glob_base, has_match_except, EXCLUDED_SUFFIX};
use crate::storage::resolve_name;

const SVG_CONTENT_TYPE: &str = "image/svg+xml";

fn svg_response(body: String) -> Response {
    ([(header::CONTENT_TYPE, SVG_CONTENT_TYPE)], body).into_response()
}

pub async fn probe_folder(
    State(state): State<GatewayState>,
    Query(params): Query<ProbeParams>,
) -> Result<Response, RequestError> {
    if params.name.is_empty() {
        return Err(RequestError::MissingParam("name"));
    }
    validate_token(&state.config.token, &params.token)?;

    let full_path = resolve_name(&state.config.base_path, &params.name).inspect_err(|_| {
        warn!("Rejected invalid name: {:?}", params.name);
    })?;

    // Any stat failure flips the badge to red; it is not an HTTP error.
    if fs::metadata(&full_path).is_err() {
        return Ok(svg_response(badge::labeled(BadgeColor::Red, &params.glob)));
    }

    if params.glob.is_empty() {
        return Ok(svg_response(badge::plain_green()));
    }

    let pattern = glob_base(&params.glob);
    match has_match_except(&full_path, pattern, EXCLUDED_SUFFIX) {
        Ok(true) => Ok(svg_response(badge::labeled(BadgeColor::Green, &params.glob))),
        Ok(false) => Ok(svg_response(badge::labeled(
            BadgeColor::Orange,
            &params.glob,
        ))),
        Err(e) => {
            warn!("Bad glob {:?}: {}", params.glob, e);
            Err(RequestError::BadGlob)
        }
    }
}
