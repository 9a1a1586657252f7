//! HTTP transport abstraction.
//!
//! The client hands a fully built request to an [`HttpTransport`] and gets the
//! status and body back. [`ReqwestTransport`] is the default; tests and
//! embedders can inject their own to observe requests or return canned
//! responses without a network.

use super::interceptor::HttpRequestContext;
use crate::error::BotError;
use crate::params::{JSON_CONTENT_TYPE, RequestBody};
use async_trait::async_trait;
use std::time::Duration;

/// Transport-level request data for one POST.
#[derive(Debug, Clone)]
pub struct HttpTransportRequest {
    pub ctx: HttpRequestContext,
    /// Full method URL, token included.
    pub url: String,
    pub body: RequestBody,
    /// Deadline for the whole round trip, body read included.
    pub timeout: Duration,
}

/// Transport-level response data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpTransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Custom HTTP transport.
///
/// Only connection, timeout and body-read failures are errors here. Non-2xx
/// statuses are returned as responses: the Bot API reports failures inside
/// the envelope.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, BotError>;
}

/// Default transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, BotError> {
        let builder = self.client.post(&request.url).timeout(request.timeout);
        let builder = match request.body {
            RequestBody::Json(bytes) => builder
                .header(reqwest::header::CONTENT_TYPE, JSON_CONTENT_TYPE)
                .body(bytes),
            RequestBody::Multipart(body) => builder.multipart(body.into_form()?),
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        tracing::trace!(target: "tgbot::http", request_id=%request.ctx.request_id, status, bytes=body.len(), "body read");

        Ok(HttpTransportResponse { status, body })
    }
}
