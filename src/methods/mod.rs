//! Bot API methods
//!
//! Each method is a parameter struct (`Serialize` for JSON, [`FormSchema`]
//! for multipart, [`MethodParams`] for its upload slots) plus an async
//! forwarding call on [`BotClient`](crate::BotClient).
//!
//! [`FormSchema`]: crate::params::FormSchema
//! [`MethodParams`]: crate::params::MethodParams

mod chat;
mod editing;
mod messages;
mod updates;

pub use chat::{ChatIdParams, GetFileParams, SendChatActionParams, SetChatPhotoParams};
pub use editing::{
    EditMessageCaptionParams, EditMessageReplyMarkupParams, EditMessageTextParams,
    StopMessageLiveLocationParams,
};
pub use messages::{
    DeleteMessageParams, ForwardMessageParams, SendDocumentParams, SendMediaGroupParams,
    SendMessageParams, SendPhotoParams,
};
pub use updates::{GetUpdatesParams, SetWebhookParams};

use crate::params::{FieldSpec, FormSchema, MethodParams};
use crate::types::ParseMode;
use serde::Serialize;

/// Parameters of methods that take none. Encodes as `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NoParams {}

impl FormSchema for NoParams {
    const FIELDS: &'static [FieldSpec<Self>] = &[];
}

impl MethodParams for NoParams {}

fn parse_mode_field<'a>(mode: Option<ParseMode>) -> crate::params::FieldValue<'a> {
    mode.map_or(crate::params::FieldValue::Absent, |m| {
        crate::params::FieldValue::Str(m.as_str())
    })
}
