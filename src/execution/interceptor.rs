//! HTTP interceptor interfaces
//!
//! Interceptors observe a call at three points: right before the transport is
//! invoked, after a response body was read, and when any stage fails. Hooks
//! run on the calling task and should stay cheap.

use super::transport::HttpTransportResponse;
use crate::error::BotError;
use crate::params::RequestArgs;

/// Context passed to interceptors describing the request.
#[derive(Clone, Debug)]
pub struct HttpRequestContext {
    /// Random id shared by all hooks of one call.
    pub request_id: String,
    /// Bot API method name, e.g. `sendMessage`.
    pub method: String,
    /// Request URL with the token masked.
    pub url: String,
    pub multipart: bool,
}

impl HttpRequestContext {
    pub fn new(method: impl Into<String>, url: impl Into<String>, multipart: bool) -> Self {
        Self {
            request_id: uuid::Uuid::new_v4().to_string(),
            method: method.into(),
            url: url.into(),
            multipart,
        }
    }
}

/// HTTP interceptor trait
pub trait HttpInterceptor: Send + Sync {
    /// Called once the request is built. Returning an error aborts the call
    /// before anything is sent.
    fn on_before_send(
        &self,
        _ctx: &HttpRequestContext,
        _args: &RequestArgs,
    ) -> Result<(), BotError> {
        Ok(())
    }

    /// Called with the raw response, whatever its status, before the
    /// envelope is decoded.
    fn on_response(
        &self,
        _ctx: &HttpRequestContext,
        _response: &HttpTransportResponse,
    ) -> Result<(), BotError> {
        Ok(())
    }

    /// Called when any stage of the call fails.
    fn on_error(&self, _ctx: &HttpRequestContext, _error: &BotError) {}
}

/// A simple logging interceptor backed by `tracing` (no sensitive data).
#[derive(Clone, Debug, Default)]
pub struct LoggingInterceptor;

impl HttpInterceptor for LoggingInterceptor {
    fn on_before_send(&self, ctx: &HttpRequestContext, args: &RequestArgs) -> Result<(), BotError> {
        tracing::debug!(
            target: "tgbot::http",
            request_id=%ctx.request_id,
            method=%ctx.method,
            url=%ctx.url,
            content_type=%args.content_type(),
            "sending request"
        );
        Ok(())
    }

    fn on_response(
        &self,
        ctx: &HttpRequestContext,
        response: &HttpTransportResponse,
    ) -> Result<(), BotError> {
        tracing::debug!(
            target: "tgbot::http",
            request_id=%ctx.request_id,
            method=%ctx.method,
            status=%response.status,
            bytes=response.body.len(),
            "response received"
        );
        Ok(())
    }

    fn on_error(&self, ctx: &HttpRequestContext, error: &BotError) {
        tracing::debug!(target: "tgbot::http", request_id=%ctx.request_id, method=%ctx.method, url=%ctx.url, err=%error, "request error");
    }
}
