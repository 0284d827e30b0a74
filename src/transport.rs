//! HTTP transport seam
//!
//! [`ChatService`](crate::ChatService) talks to providers only through
//! [`HttpTransport`]. The default implementation is [`ReqwestTransport`]; tests swap
//! in a mock to observe (or forbid) network calls.

use crate::error::{ChatError, ChatResult};
use crate::logging::{log_debug, log_error};
use crate::providers::ChatRequest;
use async_trait::async_trait;
use std::time::Duration;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Executes a built [`ChatRequest`].
///
/// Implementations return `Ok` for every response that arrived, whatever its
/// status; interpreting the status is the caller's job. `Err` is reserved for
/// exchanges that never produced a response.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: ChatRequest) -> ChatResult<HttpResponse>;
}

/// [`HttpTransport`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    timeout: Option<Duration>,
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ReqwestTransport {
    /// Create a transport, optionally bounding each request by `timeout`.
    pub fn new(timeout: Option<Duration>) -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout,
        }
    }

    /// Reuse an existing client (connection pool, proxy settings...).
    pub fn with_client(client: reqwest::Client, timeout: Option<Duration>) -> Self {
        Self { client, timeout }
    }

    fn map_send_error(&self, url: &str, error: reqwest::Error) -> ChatError {
        log_error!(
            url = %url,
            error = %error,
            is_timeout = error.is_timeout(),
            "HTTP request failed"
        );
        if error.is_timeout() {
            ChatError::timeout(self.timeout)
        } else {
            ChatError::request_failed(format!("Request failed: {error}"), Some(Box::new(error)))
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: ChatRequest) -> ChatResult<HttpResponse> {
        let mut builder = self
            .client
            .request(request.method.clone(), &request.url)
            .headers(request.headers.clone())
            .json(&request.body);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| self.map_send_error(&request.url, e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| self.map_send_error(&request.url, e))?;

        log_debug!(
            provider = %request.provider,
            status = status,
            body_length = body.len(),
            "Received provider response"
        );

        Ok(HttpResponse { status, body })
    }
}
