//! Request building: JSON body, or multipart when local files are attached.

use super::flatten::{FlatFields, FormSchema, flatten};
use crate::error::BotError;
use crate::types::InputFile;
use serde::Serialize;

pub const JSON_CONTENT_TYPE: &str = "application/json";
/// The transport appends the boundary parameter.
pub const MULTIPART_CONTENT_TYPE: &str = "multipart/form-data";

/// A file part with its bytes already read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    /// Form field the part is sent under.
    pub field: String,
    /// Base name of the local path.
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Multipart payload: file parts first, then text fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartBody {
    pub files: Vec<FilePart>,
    pub fields: FlatFields,
}

impl MultipartBody {
    /// Convert into a `reqwest` form, keeping part order.
    pub fn into_form(self) -> Result<reqwest::multipart::Form, BotError> {
        let mut form = reqwest::multipart::Form::new();
        for file in self.files {
            let part = reqwest::multipart::Part::bytes(file.bytes)
                .file_name(file.file_name)
                .mime_str(&file.mime)
                .map_err(|e| BotError::BuildRequestError(format!("Invalid MIME type: {e}")))?;
            form = form.part(file.field, part);
        }
        for (name, value) in self.fields {
            form = form.text(name, value);
        }
        Ok(form)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// Serialized JSON object.
    Json(Vec<u8>),
    Multipart(MultipartBody),
}

/// Encoded arguments of one method call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestArgs {
    pub body: RequestBody,
}

impl RequestArgs {
    pub fn content_type(&self) -> &'static str {
        match self.body {
            RequestBody::Json(_) => JSON_CONTENT_TYPE,
            RequestBody::Multipart(_) => MULTIPART_CONTENT_TYPE,
        }
    }

    pub fn is_multipart(&self) -> bool {
        matches!(self.body, RequestBody::Multipart(_))
    }

    /// JSON bytes, when this is a JSON request.
    pub fn json_bytes(&self) -> Option<&[u8]> {
        match &self.body {
            RequestBody::Json(bytes) => Some(bytes.as_slice()),
            RequestBody::Multipart(_) => None,
        }
    }

    pub fn multipart(&self) -> Option<&MultipartBody> {
        match &self.body {
            RequestBody::Multipart(body) => Some(body),
            RequestBody::Json(_) => None,
        }
    }
}

/// Parameters of one Bot API method.
///
/// `Serialize` drives the JSON encoding, [`FormSchema`] the multipart one.
/// Types with upload slots list them in [`attachments`](Self::attachments);
/// the default is none.
pub trait MethodParams: Serialize + FormSchema + Send + Sync {
    /// Local files that may be uploaded with this call, attached or not.
    fn attachments(&self) -> Vec<Option<&InputFile>> {
        Vec::new()
    }
}

/// Encode `params` as a single JSON object.
pub fn build_json_request_args<P: Serialize + ?Sized>(params: &P) -> Result<RequestArgs, BotError> {
    let body = serde_json::to_vec(params).map_err(|e| BotError::BuildRequestError(e.to_string()))?;
    Ok(RequestArgs {
        body: RequestBody::Json(body),
    })
}

/// Read every file and pair the parts with the already-flattened fields.
///
/// Fails before anything is sent when a file cannot be read.
pub async fn build_multipart_request_args(
    fields: FlatFields,
    files: &[&InputFile],
) -> Result<RequestArgs, BotError> {
    let mut parts = Vec::with_capacity(files.len());
    for file in files {
        let bytes = tokio::fs::read(file.path()).await.map_err(|e| {
            BotError::BuildRequestError(format!(
                "failed to read {}: {e}",
                file.path().display()
            ))
        })?;
        let mime = crate::utils::mime::guess_mime(Some(bytes.as_slice()), Some(file.path()));
        tracing::trace!(target: "tgbot::request", field=%file.name, size=bytes.len(), %mime, "file part read");
        parts.push(FilePart {
            field: file.name.clone(),
            file_name: file.file_name(),
            mime,
            bytes,
        });
    }
    Ok(RequestArgs {
        body: RequestBody::Multipart(MultipartBody {
            files: parts,
            fields,
        }),
    })
}

/// Pick the encoding for `params`: multipart iff at least one file is attached.
pub async fn build_request_args<P: MethodParams>(params: &P) -> Result<RequestArgs, BotError> {
    let files = crate::types::attached(params.attachments());
    if files.is_empty() {
        return build_json_request_args(params);
    }
    let fields = flatten(params)?;
    build_multipart_request_args(fields, &files).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{FieldSpec, FieldValue};
    use crate::types::ChatId;
    use std::io::Write;

    #[derive(Serialize)]
    struct Upload {
        chat_id: ChatId,
        #[serde(skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
        #[serde(skip_serializing_if = "std::ops::Not::not")]
        silent: bool,
        #[serde(skip)]
        photo_file: Option<InputFile>,
    }

    impl FormSchema for Upload {
        const FIELDS: &'static [FieldSpec<Self>] = &[
            FieldSpec::required("chat_id", |p| FieldValue::ChatId(&p.chat_id)),
            FieldSpec::optional("caption", |p| FieldValue::opt_str(&p.caption)),
            FieldSpec::optional("silent", |p| FieldValue::Bool(p.silent)),
            FieldSpec::file_only(),
        ];
    }

    impl MethodParams for Upload {
        fn attachments(&self) -> Vec<Option<&InputFile>> {
            vec![self.photo_file.as_ref()]
        }
    }

    fn upload(file: Option<InputFile>) -> Upload {
        Upload {
            chat_id: ChatId::from(7),
            caption: Some("look".into()),
            silent: false,
            photo_file: file,
        }
    }

    #[tokio::test]
    async fn no_attachment_means_json() {
        let args = build_request_args(&upload(None)).await.unwrap();
        assert_eq!(args.content_type(), JSON_CONTENT_TYPE);
        let value: serde_json::Value = serde_json::from_slice(args.json_bytes().unwrap()).unwrap();
        assert_eq!(value, serde_json::json!({"chat_id": 7, "caption": "look"}));
    }

    #[tokio::test]
    async fn half_filled_attachment_means_json() {
        let args = build_request_args(&upload(Some(InputFile::new("/tmp/x.jpg", ""))))
            .await
            .unwrap();
        assert!(!args.is_multipart());
        let args = build_request_args(&upload(Some(InputFile::new("", "photo"))))
            .await
            .unwrap();
        assert!(!args.is_multipart());
    }

    #[tokio::test]
    async fn attachment_means_multipart_with_file_first() {
        let mut tmp = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        tmp.write_all(b"hello file").unwrap();
        let file = InputFile::new(tmp.path(), "photo");

        let args = build_request_args(&upload(Some(file))).await.unwrap();
        assert_eq!(args.content_type(), MULTIPART_CONTENT_TYPE);
        let body = args.multipart().unwrap();
        assert_eq!(body.files.len(), 1);
        assert_eq!(body.files[0].field, "photo");
        assert_eq!(body.files[0].bytes, b"hello file");
        assert_eq!(
            body.files[0].file_name,
            tmp.path().file_name().unwrap().to_string_lossy()
        );
        assert_eq!(body.files[0].mime, "text/plain");
        assert_eq!(body.fields.get("chat_id"), Some("7"));
        assert_eq!(body.fields.get("caption"), Some("look"));
        assert_eq!(body.fields.get("silent"), Some("false"));
        assert!(body.clone().into_form().is_ok());
    }

    #[tokio::test]
    async fn missing_file_is_a_build_error() {
        let file = InputFile::new("/definitely/not/here.jpg", "photo");
        let err = build_request_args(&upload(Some(file))).await.unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::BuildRequest);
        assert!(err.to_string().contains("/definitely/not/here.jpg"));
    }

    #[test]
    fn json_encoding_is_stable() {
        let params = upload(None);
        let a = build_json_request_args(&params).unwrap();
        let b = build_json_request_args(&params).unwrap();
        assert_eq!(a.json_bytes(), b.json_bytes());
    }

    #[tokio::test]
    async fn explicit_multipart_builder_keeps_given_fields() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(b"-----BEGIN CERTIFICATE-----").unwrap();
        let cert = InputFile::new(tmp.path(), "certificate");
        let fields: FlatFields = [("url", "https://example.com/hook")].into_iter().collect();

        let args = build_multipart_request_args(fields, &[&cert]).await.unwrap();
        let body = args.multipart().unwrap();
        assert_eq!(body.files[0].field, "certificate");
        assert_eq!(body.fields.get("url"), Some("https://example.com/hook"));
    }
}
