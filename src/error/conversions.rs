//! Conversions from common error types.

use super::BotError;

impl From<serde_json::Error> for BotError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

// The request URL embeds the bot token, so it is stripped from the message.
impl From<reqwest::Error> for BotError {
    fn from(err: reqwest::Error) -> Self {
        let err = err.without_url();
        if err.is_builder() {
            return Self::BuildRequestError(err.to_string());
        }
        Self::SendError {
            message: err.to_string(),
            timed_out: err.is_timeout(),
        }
    }
}
