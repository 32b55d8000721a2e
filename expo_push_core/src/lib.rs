/*!
 * Expo Push Core — a blocking client for the Expo push notification API.
 *
 * The crate formats push messages, posts them to the Expo service, and
 * fetches delivery receipts. It keeps no state between calls: no queue, no
 * retries, no token registry. Every operation is one HTTP round trip whose
 * outcome comes back as a `Result`.
 *
 * # Module structure
 *
 * - `protocol/` — what we send: message types, constants, token checks
 * - `transport/` — how we deliver: the `Transport` seam and its ureq backend
 * - `client` — `PushClient`, the public entry point
 * - `error` — `PushError` and `TransportError`
 *
 * # Example
 * ```no_run
 * use expo_push_core::PushClient;
 *
 * let client = PushClient::new();
 * match client.send_notification("ExponentPushToken[abc123]", "Hello", "World", None, None) {
 *     Ok(response) => println!("{response}"),
 *     Err(err) => eprintln!("{}", err.to_record()),
 * }
 * ```
 */

mod client;
mod error;
mod protocol;
mod transport;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

pub use client::{ClientOptions, PushClient};
pub use error::{PushError, TransportError};
pub use protocol::constants::{DEFAULT_SOUND, EXPO_PUSH_URL, EXPO_RECEIPTS_URL, TOKEN_PREFIXES};
pub use protocol::token::{is_expo_push_token, PushToken};
pub use protocol::types::{receipt_ids, PushMessage, ReceiptId, ReceiptsRequest};
pub use transport::{Transport, UreqTransport};
