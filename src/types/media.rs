//! `InputMedia` entries for media groups.

use super::{InputFile, ParseMode};
use serde::{Deserialize, Serialize};

/// <https://core.telegram.org/bots/api#inputmediaphoto>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputMediaPhoto {
    /// `file_id`, HTTP URL, or `attach://<name>` for an uploaded part.
    pub media: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip)]
    pub media_file: Option<InputFile>,
}

impl InputMediaPhoto {
    /// Photo already stored on the servers (`file_id`) or reachable by URL.
    pub fn remote(media: impl Into<String>) -> Self {
        Self {
            media: media.into(),
            ..Default::default()
        }
    }

    /// Photo uploaded from disk; `media` points at the file part.
    pub fn upload(file: InputFile) -> Self {
        Self {
            media: file.attach_uri().unwrap_or_default(),
            media_file: Some(file),
            ..Default::default()
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

/// <https://core.telegram.org/bots/api#inputmediavideo>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputMediaVideo {
    pub media: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub supports_streaming: bool,
    #[serde(skip)]
    pub media_file: Option<InputFile>,
    #[serde(skip)]
    pub thumb_file: Option<InputFile>,
}

impl InputMediaVideo {
    pub fn remote(media: impl Into<String>) -> Self {
        Self {
            media: media.into(),
            ..Default::default()
        }
    }

    pub fn upload(file: InputFile) -> Self {
        Self {
            media: file.attach_uri().unwrap_or_default(),
            media_file: Some(file),
            ..Default::default()
        }
    }

    /// Upload a thumbnail alongside the video.
    pub fn with_thumb_file(mut self, file: InputFile) -> Self {
        self.thumb = file.attach_uri();
        self.thumb_file = Some(file);
        self
    }
}

/// One element of a media group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputMedia {
    Photo(InputMediaPhoto),
    Video(InputMediaVideo),
}

impl InputMedia {
    /// Local files referenced by this entry, attached or not.
    pub fn files(&self) -> Vec<Option<&InputFile>> {
        match self {
            Self::Photo(p) => vec![p.media_file.as_ref()],
            Self::Video(v) => vec![v.media_file.as_ref(), v.thumb_file.as_ref()],
        }
    }
}

impl From<InputMediaPhoto> for InputMedia {
    fn from(photo: InputMediaPhoto) -> Self {
        Self::Photo(photo)
    }
}

impl From<InputMediaVideo> for InputMedia {
    fn from(video: InputMediaVideo) -> Self {
        Self::Video(video)
    }
}
