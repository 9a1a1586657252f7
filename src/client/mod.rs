//! Bot client
//!
//! [`BotClient`] owns the configuration and the transport and runs every
//! call through the same pipeline: build the request args, send them, decode
//! the envelope, then decode the payload into the caller's type. The client is
//! cheap to clone and holds no per-call state, so one instance can serve
//! concurrent calls.

mod builder;
mod config;

pub use builder::BotClientBuilder;
pub use config::{BotConfig, HttpConfig, build_http_client_from_config};

use crate::error::BotError;
use crate::execution::{
    HttpInterceptor, HttpRequestContext, HttpTransport, HttpTransportRequest, Outcome, RawPayload,
    decode_envelope, resolve_outcome,
};
use crate::observability::mask_url;
use crate::params::{MethodParams, build_request_args};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

/// Telegram Bot API client.
#[derive(Clone)]
pub struct BotClient {
    config: Arc<BotConfig>,
    transport: Arc<dyn HttpTransport>,
    interceptors: Arc<[Arc<dyn HttpInterceptor>]>,
}

impl std::fmt::Debug for BotClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotClient")
            .field("base_url", &self.config.base_url)
            .field("request_timeout", &self.config.request_timeout)
            .field("interceptors", &self.interceptors.len())
            .finish_non_exhaustive()
    }
}

impl BotClient {
    /// Create a client with the given token and default settings.
    pub fn new<S: Into<String>>(token: S) -> Result<Self, BotError> {
        Self::builder().token(token).build()
    }

    pub fn builder() -> BotClientBuilder {
        BotClientBuilder::new()
    }

    /// Create a client from a validated configuration.
    pub fn from_config(config: BotConfig) -> Result<Self, BotError> {
        BotClientBuilder::from_config(config).build()
    }

    pub(crate) fn from_parts(
        config: BotConfig,
        transport: Arc<dyn HttpTransport>,
        interceptors: Vec<Arc<dyn HttpInterceptor>>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            transport,
            interceptors: interceptors.into(),
        }
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    pub fn interceptor_count(&self) -> usize {
        self.interceptors.len()
    }

    /// Full URL of `method`, token included. Never log this value.
    pub fn method_url(&self, method: &str) -> String {
        self.config.method_url(method)
    }

    /// Run one call and return the undecoded `result`.
    ///
    /// Build failures (including unreadable files) happen before any network
    /// I/O. Every failure is reported to the interceptors' `on_error` hook.
    pub async fn execute<P: MethodParams>(
        &self,
        method: &str,
        params: &P,
        timeout: Duration,
    ) -> Result<RawPayload, BotError> {
        let url = self.method_url(method);
        let multipart = !crate::types::attached(params.attachments()).is_empty();
        let ctx = HttpRequestContext::new(
            method,
            mask_url(&url, self.config.token.expose_secret()),
            multipart,
        );
        tracing::debug!(
            target: "tgbot::request",
            request_id=%ctx.request_id,
            method=%method,
            multipart,
            timeout=?timeout,
            "executing"
        );

        let result = self.execute_inner(&ctx, url, params, timeout).await;
        if let Err(error) = &result {
            tracing::debug!(target: "tgbot::request", request_id=%ctx.request_id, method=%method, kind=?error.kind(), err=%error, "call failed");
            for interceptor in self.interceptors.iter() {
                interceptor.on_error(&ctx, error);
            }
        }
        result
    }

    async fn execute_inner<P: MethodParams>(
        &self,
        ctx: &HttpRequestContext,
        url: String,
        params: &P,
        timeout: Duration,
    ) -> Result<RawPayload, BotError> {
        let args = build_request_args(params).await?;
        for interceptor in self.interceptors.iter() {
            interceptor.on_before_send(ctx, &args)?;
        }

        let response = self
            .transport
            .execute(HttpTransportRequest {
                ctx: ctx.clone(),
                url,
                body: args.body,
                timeout,
            })
            .await?;
        for interceptor in self.interceptors.iter() {
            interceptor.on_response(ctx, &response)?;
        }

        decode_envelope(&response.body)
    }

    /// Call `method` with the regular deadline and decode the result into `T`.
    pub async fn call<P, T>(&self, method: &str, params: &P) -> Result<T, BotError>
    where
        P: MethodParams,
        T: DeserializeOwned,
    {
        self.call_with_timeout(method, params, self.config.request_timeout)
            .await
    }

    /// Like [`call`](Self::call) with an explicit deadline.
    pub async fn call_with_timeout<P, T>(
        &self,
        method: &str,
        params: &P,
        timeout: Duration,
    ) -> Result<T, BotError>
    where
        P: MethodParams,
        T: DeserializeOwned,
    {
        self.execute(method, params, timeout).await?.decode()
    }

    /// Call a method whose result is either `true` or a `T`.
    pub async fn call_outcome<P, T>(&self, method: &str, params: &P) -> Result<Outcome<T>, BotError>
    where
        P: MethodParams,
        T: DeserializeOwned,
    {
        let payload = self
            .execute(method, params, self.config.request_timeout)
            .await?;
        resolve_outcome(payload)
    }
}
