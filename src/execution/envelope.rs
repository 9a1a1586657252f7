//! Response envelope decoding.
//!
//! Every Bot API response body is `{ok, result?, description?, error_code?,
//! parameters?}`. Success hands back the untouched `result`; failure becomes
//! an API error carrying `description` verbatim.

use crate::error::BotError;
use crate::types::ResponseParameters;
use serde::Deserialize;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, Deserialize)]
struct Envelope {
    ok: bool,
    #[serde(default)]
    result: serde_json::Value,
    description: Option<String>,
    error_code: Option<i64>,
    parameters: Option<ResponseParameters>,
}

/// Undecoded `result` of a successful call.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPayload(pub serde_json::Value);

impl RawPayload {
    /// Decode into `T`; a shape mismatch is a parse error.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, BotError> {
        serde_json::from_value(self.0)
            .map_err(|e| BotError::ParseError(format!("unexpected result shape: {e}")))
    }

    /// Decode into `T` without consuming the payload.
    pub fn try_decode<T: DeserializeOwned>(&self) -> Result<T, BotError> {
        T::deserialize(&self.0)
            .map_err(|e| BotError::ParseError(format!("unexpected result shape: {e}")))
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_value(self) -> serde_json::Value {
        self.0
    }
}

/// Decode a raw response body into the payload or an API error.
///
/// A body that is not JSON, lacks `ok`, or reports a failure without a
/// `description` is malformed.
pub fn decode_envelope(body: &[u8]) -> Result<RawPayload, BotError> {
    let envelope: Envelope = serde_json::from_slice(body)
        .map_err(|e| BotError::ParseError(format!("malformed response envelope: {e}")))?;

    if envelope.ok {
        return Ok(RawPayload(envelope.result));
    }

    let message = envelope.description.ok_or_else(|| {
        BotError::ParseError("malformed response envelope: ok=false without description".into())
    })?;
    Err(BotError::ApiError {
        message,
        error_code: envelope.error_code,
        parameters: envelope.parameters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::types::Update;

    #[test]
    fn success_returns_result_untouched() {
        let payload = decode_envelope(br#"{"ok":true,"result":[{"update_id":1}]}"#).unwrap();
        assert_eq!(payload.as_value(), &serde_json::json!([{"update_id": 1}]));
        let updates: Vec<Update> = payload.decode().unwrap();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].update_id, 1);
    }

    #[test]
    fn failure_carries_description_verbatim() {
        let err = decode_envelope(br#"{"ok":false,"description":"bad token"}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Api);
        match err {
            BotError::ApiError {
                message,
                error_code,
                parameters,
            } => {
                assert_eq!(message, "bad token");
                assert_eq!(error_code, None);
                assert!(parameters.is_none());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn failure_extras_are_attached() {
        let body = br#"{"ok":false,"error_code":429,"description":"Too Many Requests: retry after 7","parameters":{"retry_after":7}}"#;
        let err = decode_envelope(body).unwrap_err();
        assert_eq!(err.retry_after(), Some(7));
        assert!(err.is_retryable());
        assert!(matches!(err, BotError::ApiError { error_code: Some(429), .. }));
    }

    #[test]
    fn malformed_bodies_are_parse_errors() {
        let bodies: [&[u8]; 5] = [
            b"not json",
            br#"{"result":true}"#,
            br#"{"ok":"yes"}"#,
            br#"{"ok":false}"#,
            b"",
        ];
        for body in bodies {
            let err = decode_envelope(body).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ParseResponseBody, "body: {body:?}");
        }
    }

    #[test]
    fn missing_result_is_null() {
        let payload = decode_envelope(br#"{"ok":true}"#).unwrap();
        assert!(payload.as_value().is_null());
    }

    #[test]
    fn shape_mismatch_is_parse_error() {
        let payload = decode_envelope(br#"{"ok":true,"result":"nope"}"#).unwrap();
        let err = payload.decode::<Vec<Update>>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseResponseBody);
    }
}
