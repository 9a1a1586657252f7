//! `skip_serializing_if` predicates that mirror the flattener's omission
//! rules, so a JSON body and a multipart body carry the same keys.

use crate::types::ChatId;

/// Absent or zero.
pub fn is_zero(value: &Option<i64>) -> bool {
    matches!(value, None | Some(0))
}

/// Absent or empty.
pub fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

/// Absent, or a chat id that encodes to nothing.
pub fn is_unset_chat_id(value: &Option<ChatId>) -> bool {
    value.as_ref().is_none_or(ChatId::is_unset)
}
