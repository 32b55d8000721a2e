/**
 * Request bodies sent to the Expo push service, plus the one piece of its
 * response this crate looks into: ticket ids.
 *
 * Field order and names match the wire format:
 * ```json
 * { "to": "...", "title": "...", "body": "...", "sound": "default", "data": {} }
 * ```
 *
 * Responses are otherwise treated as opaque `serde_json::Value`s — their
 * schema belongs to the remote service.
 */
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::constants::DEFAULT_SOUND;
use super::token::PushToken;

/// Identifier of a push ticket, used later to look up its delivery receipt.
pub type ReceiptId = String;

// ---------------------------------------------------------------------------
// PushMessage
// ---------------------------------------------------------------------------

/**
 * A single push notification.
 *
 * Built per send call and never stored. `sound` defaults to `"default"`
 * and `data` to an empty object, both when built with [`PushMessage::new`]
 * and when deserialized from JSON that omits them.
 */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushMessage {
    /// Target device. Not validated here.
    pub to: PushToken,

    pub title: String,

    pub body: String,

    #[serde(default = "default_sound")]
    pub sound: String,

    /// Arbitrary JSON delivered to the app alongside the notification.
    #[serde(default)]
    pub data: Map<String, Value>,
}

fn default_sound() -> String {
    DEFAULT_SOUND.to_string()
}

impl PushMessage {
    pub fn new(
        to: impl Into<PushToken>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            to: to.into(),
            title: title.into(),
            body: body.into(),
            sound: default_sound(),
            data: Map::new(),
        }
    }

    pub fn with_data(mut self, data: Map<String, Value>) -> Self {
        self.data = data;
        self
    }

    pub fn with_sound(mut self, sound: impl Into<String>) -> Self {
        self.sound = sound.into();
        self
    }
}

// ---------------------------------------------------------------------------
// ReceiptsRequest
// ---------------------------------------------------------------------------

/// Body of a getReceipts call: `{"ids": [...]}`.
#[derive(Debug, Serialize)]
pub struct ReceiptsRequest<'a> {
    pub ids: Vec<&'a str>,
}

// ---------------------------------------------------------------------------
// Ticket id extraction
// ---------------------------------------------------------------------------

/**
 * Collects the receipt ids contained in a push-send response.
 *
 * The service answers a single message with `{"data": {ticket}}` and a
 * batch with `{"data": [{ticket}, ...]}`. Each ticket is
 * `{"status": "ok", "id": "..."}` on success or carries
 * `"status": "error"` and no id. Tickets that are not `ok`, or that lack a
 * string `id`, are skipped. Anything else yields an empty list.
 */
pub fn receipt_ids(response: &Value) -> Vec<ReceiptId> {
    match response.get("data") {
        Some(Value::Object(ticket)) => ticket_id(ticket).into_iter().collect(),
        Some(Value::Array(tickets)) => tickets
            .iter()
            .filter_map(Value::as_object)
            .filter_map(ticket_id)
            .collect(),
        _ => Vec::new(),
    }
}

fn ticket_id(ticket: &Map<String, Value>) -> Option<ReceiptId> {
    // A ticket without a status is taken at face value.
    if let Some(status) = ticket.get("status") {
        if status.as_str() != Some("ok") {
            return None;
        }
    }
    ticket.get("id")?.as_str().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_message_defaults() {
        let message = PushMessage::new("ExpoPushToken[abc]", "Hi", "There");
        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({
                "to": "ExpoPushToken[abc]",
                "title": "Hi",
                "body": "There",
                "sound": "default",
                "data": {}
            })
        );
    }

    #[test]
    fn test_builder_overrides() {
        let mut data = Map::new();
        data.insert("index".into(), json!(1));

        let message = PushMessage::new("ExpoPushToken[abc]", "Hi", "There")
            .with_sound("chime.wav")
            .with_data(data);

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["sound"], "chime.wav");
        assert_eq!(value["data"], json!({ "index": 1 }));
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let message: PushMessage = serde_json::from_value(json!({
            "to": "ExponentPushToken[TOKEN_1]",
            "title": "Batch Notification 1",
            "body": "First message in batch"
        }))
        .unwrap();

        assert_eq!(message.sound, "default");
        assert!(message.data.is_empty());
    }

    #[test]
    fn test_receipts_request_shape() {
        let request = ReceiptsRequest { ids: vec!["r1", "r2"] };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "ids": ["r1", "r2"] })
        );
    }

    #[test]
    fn test_receipt_id_from_single_ticket() {
        let response = json!({ "data": { "status": "ok", "id": "abc" } });
        assert_eq!(receipt_ids(&response), vec!["abc".to_string()]);

        let bare = json!({ "data": { "id": "abc" }, "status": "ok" });
        assert_eq!(receipt_ids(&bare), vec!["abc".to_string()]);
    }

    #[test]
    fn test_receipt_ids_skip_failed_tickets() {
        let response = json!({
            "data": [
                { "status": "ok", "id": "r1" },
                { "status": "error", "message": "DeviceNotRegistered" },
                { "status": "ok", "id": "r2" },
                "garbage"
            ]
        });
        assert_eq!(receipt_ids(&response), vec!["r1".to_string(), "r2".to_string()]);
    }

    #[test]
    fn test_receipt_ids_absent() {
        assert!(receipt_ids(&json!({ "errors": [] })).is_empty());
        assert!(receipt_ids(&json!({ "data": "nope" })).is_empty());
        assert!(receipt_ids(&json!({ "data": { "status": "ok", "id": 7 } })).is_empty());
    }
}
