/**
 * Expo push tokens.
 *
 * A push token addresses one app installation on one device. Expo issues
 * them in the form `ExponentPushToken[xxxxxxxx]` (older SDKs) or
 * `ExpoPushToken[xxxxxxxx]`.
 *
 * The only check performed locally is the prefix: the closing bracket and
 * the characters in between are never inspected. Anything stricter is left
 * to the push service, which rejects unknown tokens in its tickets.
 */
use std::fmt;

use serde::{Deserialize, Serialize};

use super::constants::TOKEN_PREFIXES;

// ---------------------------------------------------------------------------
// PushToken
// ---------------------------------------------------------------------------

/**
 * An opaque device token, serialized as a bare JSON string.
 *
 * Constructing a `PushToken` never validates it. Batch sends rely on this:
 * their items are trusted as-is and may carry malformed tokens.
 */
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PushToken(String);

impl PushToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// See [`is_expo_push_token`].
    pub fn is_well_formed(&self) -> bool {
        is_expo_push_token(&self.0)
    }
}

impl fmt::Display for PushToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PushToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for PushToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/**
 * Returns `true` iff `token` starts with one of the recognized prefixes.
 *
 * Pure string check: no network access, no inspection past the prefix.
 *
 * # Example
 * ```
 * use expo_push_core::is_expo_push_token;
 *
 * assert!(is_expo_push_token("ExponentPushToken[abc123]"));
 * assert!(is_expo_push_token("ExpoPushToken["));
 * assert!(!is_expo_push_token("abc123"));
 * ```
 */
pub fn is_expo_push_token(token: &str) -> bool {
    TOKEN_PREFIXES
        .iter()
        .any(|prefix| token.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_both_prefixes() {
        assert!(is_expo_push_token("ExponentPushToken[xxxxxxxxxxxxxxxxxxxxxx]"));
        assert!(is_expo_push_token("ExpoPushToken[xxxxxxxxxxxxxxxxxxxxxx]"));
    }

    /**
     * Only the prefix matters: a missing closing bracket or empty contents
     * still pass.
     */
    #[test]
    fn test_accepts_unterminated_token() {
        assert!(is_expo_push_token("ExponentPushToken["));
        assert!(is_expo_push_token("ExpoPushToken[abc"));
    }

    #[test]
    fn test_rejects_other_strings() {
        for token in [
            "",
            "bad-token",
            "ExponentPushToken",
            "ExpoPushToken(abc)",
            "exponentpushtoken[abc]",
            " ExponentPushToken[abc]",
            "[ExpoPushToken[abc]",
        ] {
            assert!(!is_expo_push_token(token), "{token:?} should be rejected");
        }
    }

    #[test]
    fn test_push_token_serializes_as_plain_string() {
        let token = PushToken::from("ExpoPushToken[abc]");
        assert_eq!(
            serde_json::to_value(&token).unwrap(),
            serde_json::json!("ExpoPushToken[abc]")
        );
        assert!(token.is_well_formed());
        assert!(!PushToken::from("bad-token").is_well_formed());
    }
}
