//! Sending, forwarding and deleting messages.

use super::parse_mode_field;
use crate::client::BotClient;
use crate::error::BotError;
use crate::params::{FieldSpec, FieldValue, FormSchema, MethodParams};
use crate::types::{ChatId, InputFile, InputMedia, Message, ParseMode, ReplyMarkup};
use serde::Serialize;

/// <https://core.telegram.org/bots/api#sendmessage>
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SendMessageParams {
    pub chat_id: ChatId,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub disable_web_page_preview: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub disable_notification: bool,
    #[serde(skip_serializing_if = "crate::params::skip::is_zero")]
    pub reply_to_message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendMessageParams {
    pub fn new(chat_id: impl Into<ChatId>, text: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_parse_mode(mut self, mode: ParseMode) -> Self {
        self.parse_mode = Some(mode);
        self
    }

    pub fn reply_to(mut self, message_id: i64) -> Self {
        self.reply_to_message_id = Some(message_id);
        self
    }

    pub fn with_reply_markup(mut self, markup: impl Into<ReplyMarkup>) -> Self {
        self.reply_markup = Some(markup.into());
        self
    }

    pub fn silent(mut self) -> Self {
        self.disable_notification = true;
        self
    }
}

impl FormSchema for SendMessageParams {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::required("chat_id", |p| FieldValue::ChatId(&p.chat_id)),
        FieldSpec::required("text", |p| FieldValue::Str(&p.text)),
        FieldSpec::optional("parse_mode", |p| parse_mode_field(p.parse_mode)),
        FieldSpec::optional("disable_web_page_preview", |p| {
            FieldValue::Bool(p.disable_web_page_preview)
        }),
        FieldSpec::optional("disable_notification", |p| FieldValue::Bool(p.disable_notification)),
        FieldSpec::optional("reply_to_message_id", |p| FieldValue::opt_int(p.reply_to_message_id)),
        FieldSpec::optional("reply_markup", |p| FieldValue::opt_json(&p.reply_markup)),
    ];
}

impl MethodParams for SendMessageParams {}

/// <https://core.telegram.org/bots/api#forwardmessage>
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ForwardMessageParams {
    pub chat_id: ChatId,
    pub from_chat_id: ChatId,
    pub message_id: i64,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub disable_notification: bool,
}

impl ForwardMessageParams {
    pub fn new(
        chat_id: impl Into<ChatId>,
        from_chat_id: impl Into<ChatId>,
        message_id: i64,
    ) -> Self {
        Self {
            chat_id: chat_id.into(),
            from_chat_id: from_chat_id.into(),
            message_id,
            disable_notification: false,
        }
    }
}

impl FormSchema for ForwardMessageParams {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::required("chat_id", |p| FieldValue::ChatId(&p.chat_id)),
        FieldSpec::required("from_chat_id", |p| FieldValue::ChatId(&p.from_chat_id)),
        FieldSpec::required("message_id", |p| FieldValue::Int(p.message_id)),
        FieldSpec::optional("disable_notification", |p| FieldValue::Bool(p.disable_notification)),
    ];
}

impl MethodParams for ForwardMessageParams {}

/// <https://core.telegram.org/bots/api#sendphoto>
///
/// `photo` is a `file_id` or URL; [`upload`](Self::upload) sends a local file
/// as the `photo` part instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SendPhotoParams {
    pub chat_id: ChatId,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub photo: String,
    #[serde(skip_serializing_if = "crate::params::skip::is_blank")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub disable_notification: bool,
    #[serde(skip_serializing_if = "crate::params::skip::is_zero")]
    pub reply_to_message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
    #[serde(skip)]
    pub photo_file: Option<InputFile>,
}

impl SendPhotoParams {
    pub fn new(chat_id: impl Into<ChatId>, photo: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            photo: photo.into(),
            ..Self::default()
        }
    }

    pub fn upload(chat_id: impl Into<ChatId>, path: impl Into<std::path::PathBuf>) -> Self {
        Self {
            chat_id: chat_id.into(),
            photo_file: Some(InputFile::new(path, "photo")),
            ..Self::default()
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

impl FormSchema for SendPhotoParams {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::required("chat_id", |p| FieldValue::ChatId(&p.chat_id)),
        FieldSpec::optional("photo", |p| FieldValue::Str(&p.photo)),
        FieldSpec::optional("caption", |p| FieldValue::opt_str(&p.caption)),
        FieldSpec::optional("parse_mode", |p| parse_mode_field(p.parse_mode)),
        FieldSpec::optional("disable_notification", |p| FieldValue::Bool(p.disable_notification)),
        FieldSpec::optional("reply_to_message_id", |p| FieldValue::opt_int(p.reply_to_message_id)),
        FieldSpec::optional("reply_markup", |p| FieldValue::opt_json(&p.reply_markup)),
        FieldSpec::file_only(),
    ];
}

impl MethodParams for SendPhotoParams {
    fn attachments(&self) -> Vec<Option<&InputFile>> {
        vec![self.photo_file.as_ref()]
    }
}

/// <https://core.telegram.org/bots/api#senddocument>
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SendDocumentParams {
    pub chat_id: ChatId,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub document: String,
    #[serde(skip_serializing_if = "crate::params::skip::is_blank")]
    pub thumb: Option<String>,
    #[serde(skip_serializing_if = "crate::params::skip::is_blank")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub disable_notification: bool,
    #[serde(skip_serializing_if = "crate::params::skip::is_zero")]
    pub reply_to_message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
    #[serde(skip)]
    pub document_file: Option<InputFile>,
    #[serde(skip)]
    pub thumb_file: Option<InputFile>,
}

impl SendDocumentParams {
    pub fn new(chat_id: impl Into<ChatId>, document: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            document: document.into(),
            ..Self::default()
        }
    }

    pub fn upload(chat_id: impl Into<ChatId>, path: impl Into<std::path::PathBuf>) -> Self {
        Self {
            chat_id: chat_id.into(),
            document_file: Some(InputFile::new(path, "document")),
            ..Self::default()
        }
    }

    /// Upload a thumbnail from `path` as the `thumb` part.
    pub fn with_thumb_file(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        let file = InputFile::new(path, "thumb");
        self.thumb = file.attach_uri();
        self.thumb_file = Some(file);
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

impl FormSchema for SendDocumentParams {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::required("chat_id", |p| FieldValue::ChatId(&p.chat_id)),
        FieldSpec::optional("document", |p| FieldValue::Str(&p.document)),
        FieldSpec::optional("thumb", |p| FieldValue::opt_str(&p.thumb)),
        FieldSpec::optional("caption", |p| FieldValue::opt_str(&p.caption)),
        FieldSpec::optional("parse_mode", |p| parse_mode_field(p.parse_mode)),
        FieldSpec::optional("disable_notification", |p| FieldValue::Bool(p.disable_notification)),
        FieldSpec::optional("reply_to_message_id", |p| FieldValue::opt_int(p.reply_to_message_id)),
        FieldSpec::optional("reply_markup", |p| FieldValue::opt_json(&p.reply_markup)),
        FieldSpec::file_only(),
        FieldSpec::file_only(),
    ];
}

impl MethodParams for SendDocumentParams {
    fn attachments(&self) -> Vec<Option<&InputFile>> {
        vec![self.document_file.as_ref(), self.thumb_file.as_ref()]
    }
}

/// <https://core.telegram.org/bots/api#sendmediagroup>
///
/// Uploaded entries reference their parts through `attach://<name>`, so part
/// names must be unique within the group.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SendMediaGroupParams {
    pub chat_id: ChatId,
    pub media: Vec<InputMedia>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub disable_notification: bool,
    #[serde(skip_serializing_if = "crate::params::skip::is_zero")]
    pub reply_to_message_id: Option<i64>,
}

impl SendMediaGroupParams {
    pub fn new<I, M>(chat_id: impl Into<ChatId>, media: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<InputMedia>,
    {
        Self {
            chat_id: chat_id.into(),
            media: media.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

impl FormSchema for SendMediaGroupParams {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::required("chat_id", |p| FieldValue::ChatId(&p.chat_id)),
        FieldSpec::required("media", |p| FieldValue::json(&p.media)),
        FieldSpec::optional("disable_notification", |p| FieldValue::Bool(p.disable_notification)),
        FieldSpec::optional("reply_to_message_id", |p| FieldValue::opt_int(p.reply_to_message_id)),
    ];
}

impl MethodParams for SendMediaGroupParams {
    fn attachments(&self) -> Vec<Option<&InputFile>> {
        self.media.iter().flat_map(InputMedia::files).collect()
    }
}

/// <https://core.telegram.org/bots/api#deletemessage>
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeleteMessageParams {
    pub chat_id: ChatId,
    pub message_id: i64,
}

impl DeleteMessageParams {
    pub fn new(chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            message_id,
        }
    }
}

impl FormSchema for DeleteMessageParams {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::required("chat_id", |p| FieldValue::ChatId(&p.chat_id)),
        FieldSpec::required("message_id", |p| FieldValue::Int(p.message_id)),
    ];
}

impl MethodParams for DeleteMessageParams {}

impl BotClient {
    pub async fn send_message(&self, params: &SendMessageParams) -> Result<Message, BotError> {
        self.call("sendMessage", params).await
    }

    pub async fn forward_message(&self, params: &ForwardMessageParams) -> Result<Message, BotError> {
        self.call("forwardMessage", params).await
    }

    pub async fn send_photo(&self, params: &SendPhotoParams) -> Result<Message, BotError> {
        self.call("sendPhoto", params).await
    }

    pub async fn send_document(&self, params: &SendDocumentParams) -> Result<Message, BotError> {
        self.call("sendDocument", params).await
    }

    /// Send 2-10 photos or videos as an album.
    pub async fn send_media_group(
        &self,
        params: &SendMediaGroupParams,
    ) -> Result<Vec<Message>, BotError> {
        self.call("sendMediaGroup", params).await
    }

    pub async fn delete_message(&self, params: &DeleteMessageParams) -> Result<bool, BotError> {
        self.call("deleteMessage", params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{build_request_args, flatten};
    use crate::types::{
        InlineKeyboardButton, InlineKeyboardMarkup, InputMediaPhoto, InputMediaVideo,
        ReplyKeyboardRemove,
    };

    #[test]
    fn send_message_json_skips_defaults() {
        let params = SendMessageParams::new(42, "hello");
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value, serde_json::json!({"chat_id": 42, "text": "hello"}));

        let params = params
            .with_parse_mode(ParseMode::Html)
            .reply_to(7)
            .silent()
            .with_reply_markup(ReplyKeyboardRemove::default());
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "chat_id": 42,
                "text": "hello",
                "parse_mode": "HTML",
                "disable_notification": true,
                "reply_to_message_id": 7,
                "reply_markup": {"remove_keyboard": true}
            })
        );
    }

    #[test]
    fn send_message_form_fields() {
        let params = SendMessageParams::new("@news", "hi")
            .with_reply_markup(InlineKeyboardMarkup::from(InlineKeyboardButton::url(
                "Open",
                "https://example.com",
            )));
        let fields = flatten(&params).unwrap();
        assert_eq!(fields.get("chat_id"), Some("@news"));
        assert_eq!(fields.get("text"), Some("hi"));
        assert_eq!(fields.get("disable_notification"), Some("false"));
        assert_eq!(fields.get("disable_web_page_preview"), Some("false"));
        assert!(!fields.contains_key("parse_mode"));
        assert_eq!(
            fields.get("reply_markup"),
            Some(r#"{"inline_keyboard":[[{"text":"Open","url":"https://example.com"}]]}"#)
        );
    }

    #[tokio::test]
    async fn remote_photo_is_json() {
        let args = build_request_args(&SendPhotoParams::new(1, "AgACAgQ"))
            .await
            .unwrap();
        assert!(!args.is_multipart());
    }

    #[test]
    fn document_lists_both_upload_slots() {
        let params = SendDocumentParams::upload(1, "/tmp/report.pdf").with_thumb_file("/tmp/t.jpg");
        let files = crate::types::attached(params.attachments());
        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["document", "thumb"]);
        let fields = flatten(&params).unwrap();
        assert_eq!(fields.get("thumb"), Some("attach://thumb"));
        assert!(!fields.contains_key("document"));
    }

    #[test]
    fn media_group_collects_nested_files() {
        let params = SendMediaGroupParams::new(
            9,
            [
                InputMedia::from(InputMediaPhoto::upload(InputFile::new("/tmp/a.jpg", "p0"))),
                InputMedia::from(InputMediaPhoto::remote("AgACAgQ")),
                InputMedia::from(
                    InputMediaVideo::upload(InputFile::new("/tmp/v.mp4", "v0"))
                        .with_thumb_file(InputFile::new("/tmp/v.jpg", "t0")),
                ),
            ],
        );
        let files = crate::types::attached(params.attachments());
        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["p0", "v0", "t0"]);

        let fields = flatten(&params).unwrap();
        let media: serde_json::Value = serde_json::from_str(fields.get("media").unwrap()).unwrap();
        assert_eq!(media[0], serde_json::json!({"type": "photo", "media": "attach://p0"}));
        assert_eq!(media[1]["media"], "AgACAgQ");
        assert_eq!(media[2]["thumb"], "attach://t0");
    }

    fn json_keys<P: Serialize>(params: &P) -> Vec<String> {
        let value = serde_json::to_value(params).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    }

    // Forms always carry booleans; JSON bodies drop `false`.
    fn form_keys<P: FormSchema>(params: &P) -> Vec<String> {
        let mut keys: Vec<_> = flatten(params)
            .unwrap()
            .iter()
            .filter(|(_, v)| *v != "false")
            .map(|(k, _)| k.to_string())
            .collect();
        keys.sort();
        keys
    }

    #[test]
    fn json_and_form_agree_on_present_keys() {
        let photo = SendPhotoParams::upload(1, "/tmp/a.png").with_caption("");
        assert_eq!(json_keys(&photo), vec!["chat_id"]);
        assert_eq!(json_keys(&photo), form_keys(&photo));

        let message = SendMessageParams::new("@news", "hi")
            .reply_to(0)
            .silent()
            .with_reply_markup(InlineKeyboardMarkup::from(InlineKeyboardButton::callback(
                "Go", "go",
            )));
        assert_eq!(json_keys(&message), form_keys(&message));

        let document = SendDocumentParams::upload(1, "/tmp/r.pdf")
            .with_thumb_file("/tmp/t.jpg")
            .with_caption("c");
        assert_eq!(json_keys(&document), vec!["caption", "chat_id", "thumb"]);
        assert_eq!(json_keys(&document), form_keys(&document));

        let mut group = SendMediaGroupParams::new(5, [InputMediaPhoto::remote("AgACAgQ")]);
        group.reply_to_message_id = Some(0);
        assert_eq!(json_keys(&group), form_keys(&group));
    }

    #[tokio::test]
    async fn form_reply_markup_matches_json_body() {
        let params = SendMessageParams::new(1, "hi").with_reply_markup(InlineKeyboardMarkup::from(
            InlineKeyboardButton::callback("Go", "go"),
        ));
        let args = build_request_args(&params).await.unwrap();
        let body = std::str::from_utf8(args.json_bytes().unwrap()).unwrap().to_string();

        let fields = flatten(&params).unwrap();
        let markup = fields.get("reply_markup").unwrap();
        assert_eq!(markup, r#"{"inline_keyboard":[[{"text":"Go","callback_data":"go"}]]}"#);
        assert!(body.contains(&format!(r#""reply_markup":{markup}"#)));
    }

    #[test]
    fn thumb_reference_requires_a_complete_file() {
        let params = SendDocumentParams::new(1, "BQACAgQ").with_thumb_file("");
        assert_eq!(params.thumb, None);
        assert!(crate::types::attached(params.attachments()).is_empty());
        assert!(!flatten(&params).unwrap().contains_key("thumb"));
    }

    #[test]
    fn delete_message_fields() {
        let fields = flatten(&DeleteMessageParams::new(3, 11)).unwrap();
        assert_eq!(fields.get("chat_id"), Some("3"));
        assert_eq!(fields.get("message_id"), Some("11"));
    }
}
