/**
 * Error values returned by `PushClient`.
 *
 * There are exactly two failure kinds: a token rejected locally before any
 * request is made, and anything that goes wrong during the HTTP round trip.
 * Neither is retried. Callers that want the flat `{"error": "..."}` record
 * the push service's own scripts use can get it from [`PushError::to_record`].
 */
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PushError {
    /// The token does not start with a recognized Expo prefix.
    #[error("Invalid push token format: {0}")]
    InvalidTokenFormat(String),

    /// The request could not be completed, for whatever reason.
    #[error("Request failed: {0}")]
    RequestFailed(#[from] TransportError),
}

impl PushError {
    /// Renders the error as `{"error": "<message>"}`.
    pub fn to_record(&self) -> Value {
        json!({ "error": self.to_string() })
    }
}

/**
 * Failures of a single HTTP exchange.
 *
 * Timeouts, DNS failures, refused connections, 4xx and 5xx all land here
 * and are deliberately not told apart by the client.
 */
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, TLS, timeout, or response decoding failure.
    #[error("{0}")]
    Http(#[from] ureq::Error),

    /// The service answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The request body could not be serialized.
    #[error("could not encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_token_record() {
        let err = PushError::InvalidTokenFormat("bad-token".into());
        assert_eq!(
            err.to_record(),
            json!({ "error": "Invalid push token format: bad-token" })
        );
    }

    #[test]
    fn test_request_failed_message() {
        let err = PushError::from(TransportError::Status {
            status: 503,
            body: "unavailable".into(),
        });
        assert_eq!(err.to_string(), "Request failed: HTTP 503: unavailable");
    }
}
