//! Editing messages.
//!
//! Each edit targets either a message in a chat (`chat_id` + `message_id`)
//! or an inline message (`inline_message_id`). The API returns the edited
//! message in the first case and `true` in the second, hence [`Outcome`].

use super::parse_mode_field;
use crate::client::BotClient;
use crate::error::BotError;
use crate::execution::Outcome;
use crate::params::{FieldSpec, FieldValue, FormSchema, MethodParams};
use crate::types::{ChatId, InlineKeyboardMarkup, Message, ParseMode};
use serde::Serialize;

/// Generates the shared target fields and constructors of an edit struct.
macro_rules! edit_target {
    ($name:ident { $($(#[$attr:meta])* $field:ident : $ty:ty),* $(,)? }) => {
        #[derive(Debug, Clone, Default, PartialEq, Serialize)]
        pub struct $name {
            #[serde(skip_serializing_if = "crate::params::skip::is_unset_chat_id")]
            pub chat_id: Option<ChatId>,
            #[serde(skip_serializing_if = "crate::params::skip::is_zero")]
            pub message_id: Option<i64>,
            #[serde(skip_serializing_if = "crate::params::skip::is_blank")]
            pub inline_message_id: Option<String>,
            $(
                $(#[$attr])*
                pub $field: $ty,
            )*
        }

        impl $name {
            /// Target a message the bot sent to a chat.
            pub fn for_message(chat_id: impl Into<ChatId>, message_id: i64) -> Self {
                Self {
                    chat_id: Some(chat_id.into()),
                    message_id: Some(message_id),
                    ..Self::default()
                }
            }

            /// Target a message sent via inline mode.
            pub fn for_inline(inline_message_id: impl Into<String>) -> Self {
                Self {
                    inline_message_id: Some(inline_message_id.into()),
                    ..Self::default()
                }
            }

            pub fn with_reply_markup(mut self, markup: InlineKeyboardMarkup) -> Self {
                self.reply_markup = Some(markup);
                self
            }
        }
    };
}

edit_target!(EditMessageTextParams {
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    disable_web_page_preview: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_markup: Option<InlineKeyboardMarkup>,
});

edit_target!(EditMessageCaptionParams {
    #[serde(skip_serializing_if = "crate::params::skip::is_blank")]
    caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_markup: Option<InlineKeyboardMarkup>,
});

edit_target!(EditMessageReplyMarkupParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_markup: Option<InlineKeyboardMarkup>,
});

edit_target!(StopMessageLiveLocationParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_markup: Option<InlineKeyboardMarkup>,
});

impl EditMessageTextParams {
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_parse_mode(mut self, mode: ParseMode) -> Self {
        self.parse_mode = Some(mode);
        self
    }
}

impl EditMessageCaptionParams {
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

impl FormSchema for EditMessageTextParams {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::optional("chat_id", |p| FieldValue::opt_chat_id(&p.chat_id)),
        FieldSpec::optional("message_id", |p| FieldValue::opt_int(p.message_id)),
        FieldSpec::optional("inline_message_id", |p| FieldValue::opt_str(&p.inline_message_id)),
        FieldSpec::required("text", |p| FieldValue::Str(&p.text)),
        FieldSpec::optional("parse_mode", |p| parse_mode_field(p.parse_mode)),
        FieldSpec::optional("disable_web_page_preview", |p| {
            FieldValue::Bool(p.disable_web_page_preview)
        }),
        FieldSpec::optional("reply_markup", |p| FieldValue::opt_json(&p.reply_markup)),
    ];
}

impl FormSchema for EditMessageCaptionParams {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::optional("chat_id", |p| FieldValue::opt_chat_id(&p.chat_id)),
        FieldSpec::optional("message_id", |p| FieldValue::opt_int(p.message_id)),
        FieldSpec::optional("inline_message_id", |p| FieldValue::opt_str(&p.inline_message_id)),
        FieldSpec::optional("caption", |p| FieldValue::opt_str(&p.caption)),
        FieldSpec::optional("parse_mode", |p| parse_mode_field(p.parse_mode)),
        FieldSpec::optional("reply_markup", |p| FieldValue::opt_json(&p.reply_markup)),
    ];
}

impl FormSchema for EditMessageReplyMarkupParams {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::optional("chat_id", |p| FieldValue::opt_chat_id(&p.chat_id)),
        FieldSpec::optional("message_id", |p| FieldValue::opt_int(p.message_id)),
        FieldSpec::optional("inline_message_id", |p| FieldValue::opt_str(&p.inline_message_id)),
        FieldSpec::optional("reply_markup", |p| FieldValue::opt_json(&p.reply_markup)),
    ];
}

impl FormSchema for StopMessageLiveLocationParams {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::optional("chat_id", |p| FieldValue::opt_chat_id(&p.chat_id)),
        FieldSpec::optional("message_id", |p| FieldValue::opt_int(p.message_id)),
        FieldSpec::optional("inline_message_id", |p| FieldValue::opt_str(&p.inline_message_id)),
        FieldSpec::optional("reply_markup", |p| FieldValue::opt_json(&p.reply_markup)),
    ];
}

impl MethodParams for EditMessageTextParams {}
impl MethodParams for EditMessageCaptionParams {}
impl MethodParams for EditMessageReplyMarkupParams {}
impl MethodParams for StopMessageLiveLocationParams {}

impl BotClient {
    pub async fn edit_message_text(
        &self,
        params: &EditMessageTextParams,
    ) -> Result<Outcome<Message>, BotError> {
        self.call_outcome("editMessageText", params).await
    }

    pub async fn edit_message_caption(
        &self,
        params: &EditMessageCaptionParams,
    ) -> Result<Outcome<Message>, BotError> {
        self.call_outcome("editMessageCaption", params).await
    }

    pub async fn edit_message_reply_markup(
        &self,
        params: &EditMessageReplyMarkupParams,
    ) -> Result<Outcome<Message>, BotError> {
        self.call_outcome("editMessageReplyMarkup", params).await
    }

    pub async fn stop_message_live_location(
        &self,
        params: &StopMessageLiveLocationParams,
    ) -> Result<Outcome<Message>, BotError> {
        self.call_outcome("stopMessageLiveLocation", params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::flatten;
    use crate::types::InlineKeyboardButton;

    #[test]
    fn chat_target_json() {
        let params = EditMessageTextParams::for_message(42, 7).with_text("new");
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"chat_id": 42, "message_id": 7, "text": "new"})
        );
    }

    #[test]
    fn inline_target_json() {
        let params = EditMessageCaptionParams::for_inline("AAEx").with_caption("c");
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"inline_message_id": "AAEx", "caption": "c"})
        );
    }

    #[test]
    fn inline_target_form_omits_chat_fields() {
        let markup = InlineKeyboardMarkup::from(InlineKeyboardButton::callback("Ok", "ok"));
        let params = EditMessageReplyMarkupParams::for_inline("AAEx").with_reply_markup(markup);
        let fields = flatten(&params).unwrap();
        let names: Vec<_> = fields.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(names, vec!["inline_message_id", "reply_markup"]);
    }

    #[test]
    fn unset_targets_are_dropped_in_both_encodings() {
        let params = EditMessageTextParams {
            chat_id: Some(ChatId::default()),
            message_id: Some(0),
            inline_message_id: Some(String::new()),
            ..EditMessageTextParams::default()
        }
        .with_text("x");
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value, serde_json::json!({"text": "x"}));

        let fields = flatten(&params).unwrap();
        let names: Vec<_> = fields.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(names, vec!["text", "disable_web_page_preview"]);
    }

    #[test]
    fn stop_live_location_for_message() {
        let fields = flatten(&StopMessageLiveLocationParams::for_message("@chan", 3)).unwrap();
        assert_eq!(fields.get("chat_id"), Some("@chan"));
        assert_eq!(fields.get("message_id"), Some("3"));
    }
}
