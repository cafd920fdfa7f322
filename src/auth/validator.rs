//! Token validator
//!
//! Checks the caller-supplied token against the configured shared secret.
//! An empty configured secret disables authentication entirely; this is
//! documented behavior, not an oversight.

use subtle::ConstantTimeEq;

use crate::error::RequestError;

/// Validates the request token against the configured secret.
///
/// Comparison is constant-time so the secret cannot be recovered byte by
/// byte from response timing. A mismatch yields the same generic error as
/// any other client fault.
pub fn validate_token(expected: &str, provided: &str) -> Result<(), RequestError> {
    if expected.is_empty() {
        return Ok(());
    }

    if expected.as_bytes().ct_eq(provided.as_bytes()).into() {
        Ok(())
    } else {
        Err(RequestError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_secret_accepts_anything() {
        assert!(validate_token("", "").is_ok());
        assert!(validate_token("", "whatever").is_ok());
    }

    #[test]
    fn matching_token_passes() {
        assert!(validate_token("secret", "secret").is_ok());
    }

    #[test]
    fn mismatch_is_rejected() {
        assert!(validate_token("secret", "wrong").is_err());
        assert!(validate_token("secret", "").is_err());
        // Prefix of the secret must not pass either
        assert!(validate_token("secret", "secre").is_err());
    }
}
