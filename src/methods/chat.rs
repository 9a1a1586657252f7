//! Bot identity, chats and files.

use super::NoParams;
use crate::client::BotClient;
use crate::error::BotError;
use crate::params::{FieldSpec, FieldValue, FormSchema, MethodParams};
use crate::types::{Chat, ChatAction, ChatId, File, InputFile, User};
use serde::Serialize;

/// Parameters of methods that take only a chat: `getChat`, `leaveChat`,
/// `getChatMembersCount`, `exportChatInviteLink`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChatIdParams {
    pub chat_id: ChatId,
}

impl ChatIdParams {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: chat_id.into(),
        }
    }
}

impl FormSchema for ChatIdParams {
    const FIELDS: &'static [FieldSpec<Self>] =
        &[FieldSpec::required("chat_id", |p| FieldValue::ChatId(&p.chat_id))];
}

impl MethodParams for ChatIdParams {}

/// <https://core.telegram.org/bots/api#sendchataction>
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendChatActionParams {
    pub chat_id: ChatId,
    pub action: ChatAction,
}

impl SendChatActionParams {
    pub fn new(chat_id: impl Into<ChatId>, action: ChatAction) -> Self {
        Self {
            chat_id: chat_id.into(),
            action,
        }
    }
}

impl FormSchema for SendChatActionParams {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::required("chat_id", |p| FieldValue::ChatId(&p.chat_id)),
        FieldSpec::required("action", |p| FieldValue::Str(p.action.as_str())),
    ];
}

impl MethodParams for SendChatActionParams {}

/// <https://core.telegram.org/bots/api#setchatphoto>
///
/// The photo can only be uploaded; it never travels as a text field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SetChatPhotoParams {
    pub chat_id: ChatId,
    #[serde(skip)]
    pub photo: InputFile,
}

impl SetChatPhotoParams {
    pub fn new(chat_id: impl Into<ChatId>, path: impl Into<std::path::PathBuf>) -> Self {
        Self {
            chat_id: chat_id.into(),
            photo: InputFile::new(path, "photo"),
        }
    }
}

impl FormSchema for SetChatPhotoParams {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::required("chat_id", |p| FieldValue::ChatId(&p.chat_id)),
        FieldSpec::file_only(),
    ];
}

impl MethodParams for SetChatPhotoParams {
    fn attachments(&self) -> Vec<Option<&InputFile>> {
        vec![Some(&self.photo)]
    }
}

/// <https://core.telegram.org/bots/api#getfile>
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetFileParams {
    pub file_id: String,
}

impl GetFileParams {
    pub fn new(file_id: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
        }
    }
}

impl FormSchema for GetFileParams {
    const FIELDS: &'static [FieldSpec<Self>] =
        &[FieldSpec::required("file_id", |p| FieldValue::Str(&p.file_id))];
}

impl MethodParams for GetFileParams {}

impl BotClient {
    /// Basic information about the bot.
    pub async fn get_me(&self) -> Result<User, BotError> {
        self.call("getMe", &NoParams {}).await
    }

    pub async fn get_chat(&self, params: &ChatIdParams) -> Result<Chat, BotError> {
        self.call("getChat", params).await
    }

    pub async fn leave_chat(&self, params: &ChatIdParams) -> Result<bool, BotError> {
        self.call("leaveChat", params).await
    }

    pub async fn get_chat_members_count(&self, params: &ChatIdParams) -> Result<i64, BotError> {
        self.call("getChatMembersCount", params).await
    }

    /// Generate a new primary invite link; the previous one is revoked.
    pub async fn export_chat_invite_link(&self, params: &ChatIdParams) -> Result<String, BotError> {
        self.call("exportChatInviteLink", params).await
    }

    pub async fn send_chat_action(&self, params: &SendChatActionParams) -> Result<bool, BotError> {
        self.call("sendChatAction", params).await
    }

    pub async fn set_chat_photo(&self, params: &SetChatPhotoParams) -> Result<bool, BotError> {
        self.call("setChatPhoto", params).await
    }

    /// File metadata, including the `file_path` used for downloading.
    pub async fn get_file(&self, params: &GetFileParams) -> Result<File, BotError> {
        self.call("getFile", params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{build_request_args, flatten};

    #[test]
    fn chat_id_param_encodes_number_or_handle() {
        let value = serde_json::to_value(ChatIdParams::new(-100123)).unwrap();
        assert_eq!(value, serde_json::json!({"chat_id": -100123}));
        let value = serde_json::to_value(ChatIdParams::new("@channel")).unwrap();
        assert_eq!(value, serde_json::json!({"chat_id": "@channel"}));
    }

    #[test]
    fn chat_action_uses_wire_names() {
        let params = SendChatActionParams::new(5, ChatAction::UploadDocument);
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["action"], "upload_document");
        assert_eq!(flatten(&params).unwrap().get("action"), Some("upload_document"));
    }

    #[tokio::test]
    async fn chat_photo_without_file_falls_back_to_json() {
        let params = SetChatPhotoParams {
            chat_id: ChatId::from(5),
            photo: InputFile::default(),
        };
        let args = build_request_args(&params).await.unwrap();
        assert!(!args.is_multipart());
        assert_eq!(args.json_bytes(), Some(&br#"{"chat_id":5}"#[..]));
    }

    #[test]
    fn chat_photo_is_never_a_text_field() {
        let params = SetChatPhotoParams::new("@group", "/tmp/avatar.png");
        let fields = flatten(&params).unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get("chat_id"), Some("@group"));
    }
}
