//! Chat identifier union.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Target chat: a numeric id or a `@channelusername` handle.
///
/// The API accepts either in the same `chat_id` slot. On the wire a non-zero
/// numeric id wins; a zero id carries no information and encodes like an
/// empty handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChatId {
    Id(i64),
    Username(String),
}

impl ChatId {
    /// Build from both halves, preferring the numeric id when it is non-zero.
    pub fn from_parts(id: i64, username: impl Into<String>) -> Self {
        if id != 0 {
            Self::Id(id)
        } else {
            Self::Username(username.into())
        }
    }

    /// Single wire scalar: decimal id text, or the handle unchanged.
    pub fn encode(&self) -> String {
        match self {
            Self::Id(0) => String::new(),
            Self::Id(id) => id.to_string(),
            Self::Username(username) => username.clone(),
        }
    }

    /// `true` when the value would encode to an empty string.
    pub fn is_unset(&self) -> bool {
        match self {
            Self::Id(id) => *id == 0,
            Self::Username(username) => username.is_empty(),
        }
    }
}

impl Default for ChatId {
    fn default() -> Self {
        Self::Id(0)
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for ChatId {
    fn from(username: &str) -> Self {
        Self::Username(username.to_string())
    }
}

impl From<String> for ChatId {
    fn from(username: String) -> Self {
        Self::Username(username)
    }
}

// JSON bodies carry the id as a number and the handle as a string.
impl Serialize for ChatId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Id(id) if *id != 0 => serializer.serialize_i64(*id),
            _ => serializer.serialize_str(&self.encode()),
        }
    }
}

impl<'de> Deserialize<'de> for ChatId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Id(i64),
            Username(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Id(id) => Self::Id(id),
            Raw::Username(username) => Self::Username(username),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn encode_prefers_numeric_id() {
        assert_eq!(ChatId::from_parts(123, "").encode(), "123");
        assert_eq!(ChatId::from_parts(123, "@hello").encode(), "123");
        assert_eq!(ChatId::from_parts(0, "@hello").encode(), "@hello");
        assert_eq!(ChatId::from(-1001234567890).encode(), "-1001234567890");
    }

    #[test]
    fn zero_value_encodes_empty() {
        assert_eq!(ChatId::default().encode(), "");
        assert!(ChatId::default().is_unset());
        assert_eq!(ChatId::from_parts(0, "").encode(), "");
    }

    #[test]
    fn json_uses_number_for_id_and_string_for_handle() {
        assert_eq!(serde_json::to_string(&ChatId::from(42)).unwrap(), "42");
        assert_eq!(
            serde_json::to_string(&ChatId::from("@chan")).unwrap(),
            "\"@chan\""
        );
        let back: ChatId = serde_json::from_str("\"@chan\"").unwrap();
        assert_eq!(back, ChatId::from("@chan"));
        let back: ChatId = serde_json::from_str("42").unwrap();
        assert_eq!(back, ChatId::Id(42));
    }

    proptest! {
        #[test]
        fn nonzero_id_always_wins(id in any::<i64>().prop_filter("non-zero", |v| *v != 0), name in ".*") {
            prop_assert_eq!(ChatId::from_parts(id, name).encode(), id.to_string());
        }

        #[test]
        fn handle_passes_through_unchanged(name in ".+") {
            prop_assert_eq!(ChatId::from_parts(0, name.clone()).encode(), name);
        }
    }
}
