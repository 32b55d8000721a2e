/*!
 * Protocol layer — data structures, constants, and token handling.
 *
 * Everything related to *what* we send to the Expo push service:
 * - `types` — PushMessage, the receipts request body, ticket id extraction
 * - `constants` — endpoint URLs, token prefixes, default sound
 * - `token` — PushToken and its surface-format check
 */

pub mod constants;
pub mod token;
pub mod types;
