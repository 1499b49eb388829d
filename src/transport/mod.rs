//! 传输层：同步 HTTP 请求/响应的抽象及其 reqwest 实现。
//!
//! Transport seam.
//!
//! The request client talks to the network only through [`Transport`], so the
//! retry and error-mapping logic can be exercised against a fake. Anything a
//! transport returns as `Err` is treated as a retryable transport failure;
//! HTTP error statuses are *responses*, not errors.

pub mod http;

pub use http::HttpTransport;

use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::Method;
use url::Url;

/// A fully built HTTP request, ready to go on the wire.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
}

/// Raw HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Synchronous request/response exchange.
///
/// Implementations must be stateless per call; the client may invoke `send`
/// repeatedly for the same request when retrying.
pub trait Transport: Send + Sync {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}
