//! Wire types: identifiers, uploads, markup and the objects the API returns.

mod chat_id;
mod input_file;
mod markup;
mod media;
mod objects;

pub use chat_id::ChatId;
pub use input_file::{InputFile, attached};
pub use markup::{
    ForceReply, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, ReplyKeyboardMarkup,
    ReplyKeyboardRemove, ReplyMarkup,
};
pub use media::{InputMedia, InputMediaPhoto, InputMediaVideo};
pub use objects::{
    CallbackQuery, Chat, ChatAction, Document, File, Message, ParseMode, PhotoSize,
    ResponseParameters, Update, User, WebhookInfo, allowed_updates,
};
