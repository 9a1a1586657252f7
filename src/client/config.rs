//! Client Configuration
//!
//! Token, endpoint and HTTP settings used to build a [`BotClient`](super::BotClient).

use crate::defaults;
use crate::error::BotError;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

/// HTTP configuration for the default `reqwest` client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// Connection timeout
    pub connect_timeout: Option<Duration>,
    /// User agent
    pub user_agent: Option<String>,
    /// Proxy URL applied to all schemes
    pub proxy: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Some(defaults::http::CONNECT_TIMEOUT),
            user_agent: Some(defaults::http::USER_AGENT.to_string()),
            proxy: None,
        }
    }
}

/// Build an HTTP client from [`HttpConfig`].
///
/// Per-call deadlines are applied on each request, so no client-wide timeout
/// is set here.
pub fn build_http_client_from_config(config: &HttpConfig) -> Result<reqwest::Client, BotError> {
    let mut builder = reqwest::Client::builder();

    if let Some(connect_timeout) = config.connect_timeout {
        builder = builder.connect_timeout(connect_timeout);
    }

    if let Some(proxy_url) = &config.proxy {
        let proxy = reqwest::Proxy::all(proxy_url)
            .map_err(|e| BotError::ConfigurationError(format!("Invalid proxy URL: {e}")))?;
        builder = builder.proxy(proxy);
    }

    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent);
    }

    builder
        .build()
        .map_err(|e| BotError::ConfigurationError(format!("Failed to create HTTP client: {e}")))
}

/// Bot client configuration.
///
/// # Example
/// ```rust,ignore
/// use tgbot_api::client::BotConfig;
/// use std::time::Duration;
///
/// let config = BotConfig::new("123456:ABC-DEF")
///     .with_request_timeout(Duration::from_secs(10));
/// config.validate()?;
/// ```
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Bot token (securely stored)
    pub token: SecretString,

    /// Base URL of the Bot API server
    pub base_url: String,

    /// Deadline for every call except long polls
    pub request_timeout: Duration,

    /// Deadline for `getUpdates` without a poll duration
    pub long_poll_fallback_timeout: Duration,

    /// HTTP configuration
    pub http_config: HttpConfig,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            token: SecretString::from(String::new()),
            base_url: defaults::api::BASE_URL.to_string(),
            request_timeout: defaults::http::REQUEST_TIMEOUT,
            long_poll_fallback_timeout: defaults::http::LONG_POLL_FALLBACK_TIMEOUT,
            http_config: HttpConfig::default(),
        }
    }
}

impl BotConfig {
    /// Create a configuration with the given token and default settings.
    pub fn new<S: Into<String>>(token: S) -> Self {
        Self {
            token: SecretString::from(token.into()),
            ..Self::default()
        }
    }

    /// Read the token from `TELEGRAM_BOT_TOKEN` and, when set, the base URL
    /// from `TELEGRAM_API_BASE_URL`.
    pub fn from_env() -> Result<Self, BotError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, BotError> {
        let token = lookup(defaults::api::TOKEN_ENV)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                BotError::ConfigurationError(format!(
                    "{} is not set",
                    defaults::api::TOKEN_ENV
                ))
            })?;
        let mut config = Self::new(token);
        if let Some(base_url) = lookup(defaults::api::BASE_URL_ENV).filter(|u| !u.is_empty()) {
            config.base_url = base_url;
        }
        Ok(config)
    }

    pub fn with_base_url<S: Into<String>>(mut self, url: S) -> Self {
        self.base_url = url.into();
        self
    }

    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub const fn with_long_poll_fallback_timeout(mut self, timeout: Duration) -> Self {
        self.long_poll_fallback_timeout = timeout;
        self
    }

    pub fn with_http_config(mut self, http_config: HttpConfig) -> Self {
        self.http_config = http_config;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), BotError> {
        let token = self.token.expose_secret();
        if token.is_empty() {
            return Err(BotError::ConfigurationError(
                "Bot token cannot be empty".to_string(),
            ));
        }
        if token.contains(|c: char| c.is_whitespace() || c == '/') {
            return Err(BotError::ConfigurationError(
                "Bot token must not contain whitespace or '/'".to_string(),
            ));
        }

        if self.base_url.is_empty() {
            return Err(BotError::ConfigurationError(
                "Base URL cannot be empty".to_string(),
            ));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(BotError::ConfigurationError(
                "Base URL must start with http:// or https://".to_string(),
            ));
        }

        if self.request_timeout.is_zero() {
            return Err(BotError::ConfigurationError(
                "Request timeout must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// `<base_url>/bot<token>/<method>`
    pub fn method_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{}",
            self.base_url.trim_end_matches('/'),
            self.token.expose_secret(),
            method
        )
    }
}
