//! Receiving updates: long polling and webhooks.

use super::NoParams;
use crate::client::BotClient;
use crate::error::BotError;
use crate::execution::long_poll_timeout;
use crate::params::{FieldSpec, FieldValue, FormSchema, MethodParams};
use crate::types::{InputFile, Update, WebhookInfo};
use serde::Serialize;

/// <https://core.telegram.org/bots/api#getupdates>
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetUpdatesParams {
    #[serde(skip_serializing_if = "crate::params::skip::is_zero")]
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "crate::params::skip::is_zero")]
    pub limit: Option<i64>,
    /// Long-poll duration in seconds; also sets the local deadline.
    #[serde(skip_serializing_if = "crate::params::skip::is_zero")]
    pub timeout: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_updates: Vec<String>,
}

impl GetUpdatesParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_timeout(mut self, seconds: i64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    pub fn with_allowed_updates<I, S>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_updates = kinds.into_iter().map(Into::into).collect();
        self
    }
}

impl FormSchema for GetUpdatesParams {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::optional("offset", |p| FieldValue::opt_int(p.offset)),
        FieldSpec::optional("limit", |p| FieldValue::opt_int(p.limit)),
        FieldSpec::optional("timeout", |p| FieldValue::opt_int(p.timeout)),
        FieldSpec::optional("allowed_updates", |p| FieldValue::json(&p.allowed_updates)),
    ];
}

impl MethodParams for GetUpdatesParams {}

/// <https://core.telegram.org/bots/api#setwebhook>
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SetWebhookParams {
    pub url: String,
    /// Public key certificate uploaded as the `certificate` part.
    #[serde(skip)]
    pub certificate: Option<InputFile>,
    #[serde(skip_serializing_if = "crate::params::skip::is_zero")]
    pub max_connections: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_updates: Vec<String>,
}

impl SetWebhookParams {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Upload a self-signed certificate from `path`.
    pub fn with_certificate(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.certificate = Some(InputFile::new(path, "certificate"));
        self
    }
}

impl FormSchema for SetWebhookParams {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::required("url", |p| FieldValue::Str(&p.url)),
        FieldSpec::file_only(),
        FieldSpec::optional("max_connections", |p| FieldValue::opt_int(p.max_connections)),
        FieldSpec::optional("allowed_updates", |p| FieldValue::json(&p.allowed_updates)),
    ];
}

impl MethodParams for SetWebhookParams {
    fn attachments(&self) -> Vec<Option<&InputFile>> {
        vec![self.certificate.as_ref()]
    }
}

impl BotClient {
    /// Fetch pending updates.
    ///
    /// With a `timeout` the server holds the request open for up to that many
    /// seconds and the local deadline ends just before; otherwise the
    /// configured fallback deadline applies.
    pub async fn get_updates(&self, params: &GetUpdatesParams) -> Result<Vec<Update>, BotError> {
        let timeout = long_poll_timeout(
            params.timeout.unwrap_or(0),
            self.config().long_poll_fallback_timeout,
        );
        self.call_with_timeout("getUpdates", params, timeout).await
    }

    pub async fn set_webhook(&self, params: &SetWebhookParams) -> Result<bool, BotError> {
        self.call("setWebhook", params).await
    }

    pub async fn delete_webhook(&self) -> Result<bool, BotError> {
        self.call("deleteWebhook", &NoParams {}).await
    }

    pub async fn get_webhook_info(&self) -> Result<WebhookInfo, BotError> {
        self.call("getWebhookInfo", &NoParams {}).await
    }
}
