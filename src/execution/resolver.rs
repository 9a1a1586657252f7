//! Resolution of results that are either `true` or an object.
//!
//! Edit-style methods return the edited message for messages the bot sent and
//! a bare `true` for inline messages. The payload is tried as a boolean first
//! and only then as the object.

use super::envelope::RawPayload;
use crate::error::BotError;
use serde::de::DeserializeOwned;

/// Result of a method that answers with either `true` or an object.
///
/// A literal `false` (or `null`) is also treated as an acknowledgement, so
/// both variants mean the call succeeded.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The API answered with a boolean.
    Acknowledged,
    /// The API answered with the object.
    Object(T),
}

impl<T> Outcome<T> {
    /// Always `true`: failures surface as errors, never as an `Outcome`.
    pub fn successful(&self) -> bool {
        true
    }

    pub fn payload(&self) -> Option<&T> {
        match self {
            Self::Object(value) => Some(value),
            Self::Acknowledged => None,
        }
    }

    pub fn into_payload(self) -> Option<T> {
        match self {
            Self::Object(value) => Some(value),
            Self::Acknowledged => None,
        }
    }
}

/// Decode `payload` as a boolean, falling back to `T`.
///
/// When neither shape fits, the error from the `T` attempt is returned.
pub fn resolve_outcome<T: DeserializeOwned>(payload: RawPayload) -> Result<Outcome<T>, BotError> {
    if payload.try_decode::<Option<bool>>().is_ok() {
        return Ok(Outcome::Acknowledged);
    }
    payload.decode().map(Outcome::Object)
}
