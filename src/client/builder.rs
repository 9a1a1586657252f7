//! Bot Client Builder
//!
//! Provides a builder pattern for creating [`BotClient`] instances.

use super::config::{BotConfig, build_http_client_from_config};
use super::BotClient;
use crate::error::BotError;
use crate::execution::{HttpInterceptor, HttpTransport, LoggingInterceptor, ReqwestTransport};
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use std::time::Duration;

/// Bot Client Builder
#[derive(Clone, Default)]
pub struct BotClientBuilder {
    config: BotConfig,
    http_client: Option<reqwest::Client>,
    transport: Option<Arc<dyn HttpTransport>>,
    interceptors: Vec<Arc<dyn HttpInterceptor>>,
    http_debug: bool,
}

impl BotClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: BotConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Set the bot token
    pub fn token<S: Into<String>>(mut self, token: S) -> Self {
        self.config.token = SecretString::from(token.into());
        self
    }

    /// Set the base URL (e.g. a local Bot API server or a mock)
    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Set the deadline for regular calls
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    /// Set the deadline for `getUpdates` without a poll duration
    pub fn long_poll_fallback_timeout(mut self, timeout: Duration) -> Self {
        self.config.long_poll_fallback_timeout = timeout;
        self
    }

    /// Set connection timeout
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.http_config.connect_timeout = Some(timeout);
        self
    }

    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.config.http_config.user_agent = Some(user_agent.into());
        self
    }

    pub fn proxy<S: Into<String>>(mut self, proxy: S) -> Self {
        self.config.http_config.proxy = Some(proxy.into());
        self
    }

    /// Set custom HTTP client
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Replace the transport entirely; the HTTP client settings are then unused.
    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Add a custom HTTP interceptor
    pub fn with_http_interceptor(mut self, interceptor: Arc<dyn HttpInterceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    /// Enable a built-in logging interceptor for HTTP debugging (no sensitive data).
    pub fn http_debug(mut self, enabled: bool) -> Self {
        self.http_debug = enabled;
        self
    }

    /// Build the client.
    ///
    /// Without an explicit token, `TELEGRAM_BOT_TOKEN` is used.
    pub fn build(self) -> Result<BotClient, BotError> {
        let mut config = self.config;
        if config.token.expose_secret().is_empty()
            && let Ok(token) = std::env::var(crate::defaults::api::TOKEN_ENV)
        {
            config.token = SecretString::from(token);
        }
        config.validate()?;

        let transport = match self.transport {
            Some(transport) => transport,
            None => {
                let http_client = match self.http_client {
                    Some(client) => client,
                    None => build_http_client_from_config(&config.http_config)?,
                };
                Arc::new(ReqwestTransport::new(http_client))
            }
        };

        let mut interceptors = self.interceptors;
        if self.http_debug {
            interceptors.push(Arc::new(LoggingInterceptor));
        }

        Ok(BotClient::from_parts(config, transport, interceptors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn builds_with_token_and_overrides() {
        let client = BotClientBuilder::new()
            .token("123:abc")
            .base_url("http://127.0.0.1:8081")
            .request_timeout(Duration::from_secs(9))
            .long_poll_fallback_timeout(Duration::from_secs(3))
            .connect_timeout(Duration::from_secs(2))
            .user_agent("my-bot/1.0")
            .http_debug(true)
            .build()
            .unwrap();
        let config = client.config();
        assert_eq!(config.base_url, "http://127.0.0.1:8081");
        assert_eq!(config.request_timeout, Duration::from_secs(9));
        assert_eq!(config.long_poll_fallback_timeout, Duration::from_secs(3));
        assert_eq!(config.http_config.user_agent.as_deref(), Some("my-bot/1.0"));
        assert_eq!(client.interceptor_count(), 1);
    }

    #[test]
    fn invalid_base_url_fails_at_build() {
        let err = BotClientBuilder::new()
            .token("123:abc")
            .base_url("localhost")
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn missing_token_fails_at_build() {
        if std::env::var_os(crate::defaults::api::TOKEN_ENV).is_some() {
            return;
        }
        let err = BotClientBuilder::new().build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }
}
