/**
 * Transport layer — how requests reach the Expo push service.
 *
 * - `http` — the `Transport` trait and its ureq-backed implementation
 */

pub mod http;

pub use http::{Transport, UreqTransport};
