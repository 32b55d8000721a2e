/**
 * The push client — a stateless façade over the Expo push API.
 *
 * Each public operation is one blocking POST:
 * - `send_notification` → push-send endpoint, single message object
 * - `send_batch` → push-send endpoint, array of messages
 * - `get_receipts` → receipts endpoint, `{"ids": [...]}`
 *
 * The client owns its two endpoint URLs and a transport, and nothing else.
 * Neither URL changes after construction, so a client can be shared freely
 * between callers.
 */
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{PushError, TransportError};
use crate::protocol::constants::{DEFAULT_SOUND, EXPO_PUSH_URL, EXPO_RECEIPTS_URL};
use crate::protocol::token::is_expo_push_token;
use crate::protocol::types::{PushMessage, ReceiptsRequest};
use crate::transport::{Transport, UreqTransport};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/**
 * Endpoint configuration, consumed when the client is built.
 *
 * `Default` points at the public Expo service. Overriding the URLs is only
 * useful for pointing the client at a local stand-in.
 */
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub push_url: String,
    pub receipts_url: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            push_url: EXPO_PUSH_URL.to_string(),
            receipts_url: EXPO_RECEIPTS_URL.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// PushClient
// ---------------------------------------------------------------------------

pub struct PushClient<T = UreqTransport> {
    push_url: String,
    receipts_url: String,
    transport: T,
}

impl PushClient<UreqTransport> {
    /// Client for the public Expo endpoints.
    pub fn new() -> Self {
        Self::with_options(ClientOptions::default())
    }

    pub fn with_options(options: ClientOptions) -> Self {
        Self::with_transport(options, UreqTransport::new())
    }
}

impl Default for PushClient<UreqTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> PushClient<T> {
    pub fn with_transport(options: ClientOptions, transport: T) -> Self {
        Self {
            push_url: options.push_url,
            receipts_url: options.receipts_url,
            transport,
        }
    }

    pub fn push_url(&self) -> &str {
        &self.push_url
    }

    pub fn receipts_url(&self) -> &str {
        &self.receipts_url
    }

    /**
     * Returns `true` iff `token` starts with `ExponentPushToken[` or
     * `ExpoPushToken[`. No network access.
     */
    pub fn validate_token_format(&self, token: &str) -> bool {
        is_expo_push_token(token)
    }

    /**
     * Sends one notification.
     *
     * A token with an unrecognized prefix is rejected with
     * `PushError::InvalidTokenFormat` before anything touches the network.
     * Otherwise the message is posted once; `data` defaults to `{}` and
     * `sound` to `"default"`.
     *
     * # Returns
     * The service's decoded JSON response, unchanged, or
     * `PushError::RequestFailed` for any transport or HTTP status failure.
     */
    pub fn send_notification(
        &self,
        token: &str,
        title: &str,
        body: &str,
        data: Option<Map<String, Value>>,
        sound: Option<&str>,
    ) -> Result<Value, PushError> {
        if !self.validate_token_format(token) {
            warn!(token, "refusing to send to malformed push token");
            return Err(PushError::InvalidTokenFormat(token.to_string()));
        }

        let message = PushMessage::new(token, title, body)
            .with_sound(sound.unwrap_or(DEFAULT_SOUND))
            .with_data(data.unwrap_or_default());

        debug!(to = %message.to, "sending push notification");
        self.post(&self.push_url, &message)
    }

    /**
     * Sends several messages in one request.
     *
     * Unlike `send_notification`, items are not checked for token format:
     * a batch is posted exactly as given and the service reports bad tokens
     * in its per-message tickets.
     */
    pub fn send_batch(&self, messages: &[PushMessage]) -> Result<Value, PushError> {
        debug!(count = messages.len(), "sending push batch");
        self.post(&self.push_url, messages)
    }

    /// Looks up delivery receipts for previously returned ticket ids.
    pub fn get_receipts<S: AsRef<str>>(&self, receipt_ids: &[S]) -> Result<Value, PushError> {
        let request = ReceiptsRequest {
            ids: receipt_ids.iter().map(AsRef::as_ref).collect(),
        };

        debug!(count = request.ids.len(), "fetching push receipts");
        self.post(&self.receipts_url, &request)
    }

    fn post<B: Serialize + ?Sized>(&self, url: &str, body: &B) -> Result<Value, PushError> {
        let body = serde_json::to_value(body).map_err(TransportError::from)?;
        Ok(self.transport.post_json(url, &body)?)
    }
}
