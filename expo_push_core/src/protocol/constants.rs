/**
 * Fixed values of the Expo push protocol.
 *
 * The endpoints are the defaults baked into `ClientOptions`; the token
 * prefixes are the only structural check applied to a push token.
 */

/// Endpoint accepting a single message object or an array of messages.
pub const EXPO_PUSH_URL: &str = "https://exp.host/--/api/v2/push/send";

/// Endpoint returning delivery receipts for previously issued ticket ids.
pub const EXPO_RECEIPTS_URL: &str = "https://exp.host/--/api/v2/push/getReceipts";

/// Literal prefixes a well-formed Expo push token starts with.
pub const TOKEN_PREFIXES: [&str; 2] = ["ExponentPushToken[", "ExpoPushToken["];

/// Sound used when the caller does not pick one.
pub const DEFAULT_SOUND: &str = "default";
