//! HTTP transport used by remote forms.
//!
//! Pages never call `fetch` directly; they go through [`HttpTransport`] so the
//! request lifecycle can be exercised without a browser.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde_json::Value;
use thiserror::Error;

/// Failure of a single API call
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("invalid request: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ApiError {
    /// Text shown inline to the user.
    ///
    /// Server replies with a non-empty body are shown verbatim; anything else
    /// falls back to the page's generic message.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { body, .. } if !body.trim().is_empty() => body.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Status code and raw text body of a response
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx reply into [`ApiError::Status`]
    pub fn into_success(self) -> Result<String, ApiError> {
        if self.is_success() {
            Ok(self.body)
        } else {
            Err(ApiError::Status {
                status: self.status,
                body: self.body,
            })
        }
    }
}

/// Minimal JSON-over-HTTP client.
///
/// Implementations only report transport failures as errors; HTTP status
/// handling is left to the caller.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn get(&self, url: &str) -> Result<HttpReply, ApiError>;

    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpReply, ApiError>;
}

/// Browser `fetch` transport backed by `gloo-net`
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn get(&self, url: &str) -> Result<HttpReply, ApiError> {
        let response = Request::get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to send request: {}", e)))?;
        read_reply(response).await
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpReply, ApiError> {
        // `json` sets `Content-Type: application/json`
        let response = Request::post(url)
            .header("Accept", "application/json")
            .json(body)
            .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to send request: {}", e)))?;
        read_reply(response).await
    }
}

async fn read_reply(response: gloo_net::http::Response) -> Result<HttpReply, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(format!("Failed to read response: {}", e)))?;
    Ok(HttpReply { status, body })
}
