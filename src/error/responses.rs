//! Error responses
//!
//! Maps request errors onto HTTP status codes and plaintext bodies.
//! Authorization failures answer with the same generic 400 as other client
//! errors so callers cannot probe whether a name exists.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::types::RequestError;

impl RequestError {
    /// HTTP status carried by this error.
    pub fn status(&self) -> StatusCode {
        match self {
            RequestError::MissingParam(_)
            | RequestError::InvalidToken
            | RequestError::InvalidName
            | RequestError::BadGlob => StatusCode::BAD_REQUEST,
            RequestError::NotFound => StatusCode::NOT_FOUND,
            RequestError::Launch(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_are_bad_request() {
        assert_eq!(
            RequestError::MissingParam("name").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(RequestError::InvalidToken.status(), StatusCode::BAD_REQUEST);
        assert_eq!(RequestError::InvalidName.status(), StatusCode::BAD_REQUEST);
        assert_eq!(RequestError::BadGlob.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_and_launch_map_to_404_and_500() {
        assert_eq!(RequestError::NotFound.status(), StatusCode::NOT_FOUND);
        let launch = crate::error::LaunchError::Spawn(
            "xdg-open".to_string(),
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such program"),
        );
        assert_eq!(
            RequestError::Launch(launch).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn launch_message_includes_underlying_cause() {
        let launch = crate::error::LaunchError::Spawn(
            "xdg-open".to_string(),
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such program"),
        );
        let msg = RequestError::Launch(launch).to_string();
        assert!(msg.starts_with("Failed to open: "));
        assert!(msg.contains("no such program"));
    }
}
