//! Default Configuration Values
//!
//! Centralizes the endpoint and timeout defaults used by the client so they can
//! be documented and adjusted in one place.

use std::time::Duration;

/// Endpoint defaults
pub mod api {
    /// Base URL of the public Bot API server.
    ///
    /// Method URLs have the shape `<base>/bot<token>/<methodName>`.
    pub const BASE_URL: &str = "https://api.telegram.org";

    /// Environment variable consulted by `BotConfig::from_env` for the token.
    pub const TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";

    /// Environment variable consulted by `BotConfig::from_env` for a custom server.
    pub const BASE_URL_ENV: &str = "TELEGRAM_API_BASE_URL";
}

/// HTTP client default configurations
pub mod http {
    use super::*;

    /// Deadline for every call that is not a long poll.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

    /// Deadline for `getUpdates` when the caller did not ask for long polling.
    pub const LONG_POLL_FALLBACK_TIMEOUT: Duration = Duration::from_secs(5);

    /// Amount shaved off a requested long-poll duration so the local deadline
    /// fires before the server-side one.
    pub const LONG_POLL_DEADLINE_SLACK: Duration = Duration::from_nanos(1);

    /// Default connection timeout for establishing HTTP connections
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Default User-Agent string for HTTP requests
    pub const USER_AGENT: &str = concat!("tgbot-api/", env!("CARGO_PKG_VERSION"));
}

/// MIME type used for file parts whose type cannot be guessed.
pub const FALLBACK_MIME: &str = "application/octet-stream";
