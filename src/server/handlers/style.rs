//! GET /style - CSS snippet that un-hides a page element.
//!
//! Paired with the badge: the originating page hides its gateway links by
//! default and includes this stylesheet, so the links only appear when the
//! gateway is actually reachable. No filesystem interaction.

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::auth::validate_token;
use crate::error::RequestError;
use crate::server::state::GatewayState;
use crate::server::types::StyleParams;

pub async fn style_rule(
    State(state): State<GatewayState>,
    Query(params): Query<StyleParams>,
) -> Result<Response, RequestError> {
    if params.class.is_empty() {
        return Err(RequestError::MissingParam("class"));
    }
    validate_token(&state.config.token, &params.token)?;

    let rule = format!(".{} {{ display: initial !important; }}", params.class);
    Ok(([(header::CONTENT_TYPE, "text/css")], rule).into_response())
}
