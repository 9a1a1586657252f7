//! Core error types.

use crate::types::ResponseParameters;
use thiserror::Error;

/// Coarse category of a [`BotError`], one per pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Local failure before any network I/O (file read, encoding).
    BuildRequest,
    /// Transport failure: connection, timeout, body read.
    Send,
    /// The response envelope or its payload could not be decoded.
    ParseResponseBody,
    /// Well-formed envelope with `ok=false`.
    Api,
    /// Invalid client configuration; only raised while building a client.
    Configuration,
}

/// Errors returned by the client.
#[derive(Error, Debug)]
pub enum BotError {
    /// Building the request failed before anything was sent.
    #[error("Build request error: {0}")]
    BuildRequestError(String),

    /// The HTTP round trip failed.
    #[error("Send error: {message}")]
    SendError {
        message: String,
        /// `true` when the per-call deadline expired.
        timed_out: bool,
    },

    /// The response body was not a valid envelope, or the payload did not
    /// match the expected shape.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The API answered with `ok=false`.
    #[error("API error: {message}")]
    ApiError {
        /// The envelope's `description`, verbatim.
        message: String,
        error_code: Option<i64>,
        parameters: Option<ResponseParameters>,
    },

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl BotError {
    /// API error carrying only a description.
    pub fn api(message: impl Into<String>) -> Self {
        Self::ApiError {
            message: message.into(),
            error_code: None,
            parameters: None,
        }
    }

    /// Transport error that is not a timeout.
    pub fn send(message: impl Into<String>) -> Self {
        Self::SendError {
            message: message.into(),
            timed_out: false,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::BuildRequestError(_) => ErrorKind::BuildRequest,
            Self::SendError { .. } => ErrorKind::Send,
            Self::ParseError(_) => ErrorKind::ParseResponseBody,
            Self::ApiError { .. } => ErrorKind::Api,
            Self::ConfigurationError(_) => ErrorKind::Configuration,
        }
    }

    /// Whether repeating the same call may succeed.
    ///
    /// The client never retries on its own; this is a hint for callers.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::SendError { .. } => true,
            Self::ApiError { error_code, .. } => {
                self.retry_after().is_some() || matches!(error_code, Some(429) | Some(500..=599))
            }
            _ => false,
        }
    }

    /// Flood-control delay in seconds reported by the API, if any.
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            Self::ApiError {
                parameters: Some(p),
                ..
            } => p.retry_after,
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::SendError { timed_out: true, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_variants() {
        assert_eq!(
            BotError::BuildRequestError("x".into()).kind(),
            ErrorKind::BuildRequest
        );
        assert_eq!(BotError::send("x").kind(), ErrorKind::Send);
        assert_eq!(
            BotError::ParseError("x".into()).kind(),
            ErrorKind::ParseResponseBody
        );
        assert_eq!(BotError::api("x").kind(), ErrorKind::Api);
    }

    #[test]
    fn flood_control_is_retryable() {
        let err = BotError::ApiError {
            message: "Too Many Requests: retry after 3".into(),
            error_code: Some(429),
            parameters: Some(ResponseParameters {
                migrate_to_chat_id: None,
                retry_after: Some(3),
            }),
        };
        assert!(err.is_retryable());
        assert_eq!(err.retry_after(), Some(3));
    }

    #[test]
    fn bad_request_is_not_retryable() {
        let err = BotError::ApiError {
            message: "Bad Request: chat not found".into(),
            error_code: Some(400),
            parameters: None,
        };
        assert!(!err.is_retryable());
        assert_eq!(err.to_string(), "API error: Bad Request: chat not found");
    }
}
