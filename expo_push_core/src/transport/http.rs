/*!
 * HTTP transport for the Expo push service.
 *
 * Uses `ureq` — a pure-Rust blocking HTTP client with no async runtime.
 * Every client operation is a single blocking request/response round trip,
 * so there is nothing for an executor to do.
 *
 * - **Single attempt** — no retries, no backoff.
 * - **Library-default timeouts** — the agent is built with ureq's defaults;
 *   only status handling is changed, so a failing response body can be
 *   reported alongside its status code.
 */
use serde_json::Value;
use tracing::{debug, warn};
use ureq::Agent;

use crate::error::TransportError;

// ---------------------------------------------------------------------------
// Transport seam
// ---------------------------------------------------------------------------

/**
 * One JSON POST exchange.
 *
 * Implementations send `body` to `url` with
 * `Content-Type: application/json` and `Accept: application/json`, and
 * return the decoded JSON response. A non-2xx answer is an error.
 *
 * `PushClient` is generic over this trait so tests can substitute a stub
 * that records requests instead of touching the network.
 */
pub trait Transport {
    fn post_json(&self, url: &str, body: &Value) -> Result<Value, TransportError>;
}

// ---------------------------------------------------------------------------
// UreqTransport
// ---------------------------------------------------------------------------

/**
 * Thin wrapper around `ureq::Agent`.
 *
 * Connection pooling and keep-alive are handled by the agent internally,
 * so one instance is reused for the lifetime of a `PushClient`.
 */
#[derive(Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent: Agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into();

        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn post_json(&self, url: &str, body: &Value) -> Result<Value, TransportError> {
        let payload = serde_json::to_vec(body)?;

        debug!(url, bytes = payload.len(), "POST");

        let response = self
            .agent
            .post(url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send(&payload[..])
            .inspect_err(|err| warn!(url, %err, "push request failed"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .into_body()
                .read_to_string()
                .unwrap_or_else(|_| "<unreadable body>".into());
            warn!(url, status = status.as_u16(), "push service rejected request");
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.into_body().read_json::<Value>()?)
    }
}
