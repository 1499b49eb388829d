use crate::client::config::ClientConfig;
use crate::client::policy::{Decision, RetryPolicy};
use crate::client::request::{build_url, ApiRequest, RequestBody};
use crate::transport::{HttpRequest, HttpResponse, Transport};
use crate::{Error, Result};
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Correlation id attached to every request.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Blocking client for the DocumentAtom service.
///
/// Holds only immutable configuration, so one instance can be shared across
/// threads behind an `Arc`. Each [`request`](Self::request) is independent.
pub struct DocumentAtomClient {
    pub(crate) config: ClientConfig,
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) policy: RetryPolicy,
    pub(crate) default_headers: HeaderMap,
}

impl std::fmt::Debug for DocumentAtomClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentAtomClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl DocumentAtomClient {
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    pub fn retries(&self) -> u32 {
        self.config.retries
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Releases the underlying transport.
    pub fn close(self) {
        debug!(base_url = self.config.base_url.as_str(), "closing document-atom client");
    }

    /// Execute a request and decode the JSON body.
    ///
    /// Returns `Ok(None)` for a successful response with an empty body.
    /// Transport failures are retried up to `retries` times; HTTP error
    /// statuses are mapped to [`Error::Api`] (or `Unexpected error`) at once.
    pub fn request(&self, request: ApiRequest) -> Result<Option<serde_json::Value>> {
        let request_id = Uuid::new_v4().to_string();
        let http_request = self.prepare(request, &request_id)?;
        let max_attempts = self.config.max_attempts();
        let start = Instant::now();

        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            debug!(
                method = %http_request.method,
                url = %http_request.url,
                attempt,
                max_attempts,
                request_id = request_id.as_str(),
                "document-atom request attempt"
            );

            match self.transport.send(&http_request) {
                Ok(response) => {
                    return self.handle_response(response, &http_request, &request_id, start)
                }
                Err(err) => match self.policy.decide(attempt - 1) {
                    Decision::Retry { delay } => {
                        warn!(
                            attempt,
                            max_attempts,
                            delay_ms = delay.as_millis() as u64,
                            request_id = request_id.as_str(),
                            error = %err,
                            "document-atom transport failure, retrying"
                        );
                        if !delay.is_zero() {
                            std::thread::sleep(delay);
                        }
                    }
                    Decision::Fail => {
                        error!(
                            attempts = attempt,
                            url = %http_request.url,
                            request_id = request_id.as_str(),
                            duration_ms = start.elapsed().as_millis() as u64,
                            error = %err,
                            "document-atom request failed after all attempts"
                        );
                        return Err(Error::RetriesExhausted {
                            attempts: attempt,
                            source: err,
                        });
                    }
                },
            }
        }
    }

    /// Execute a request and decode the body into `T`.
    ///
    /// An empty body is decoded as JSON `null`, which fails for struct types.
    pub fn request_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let value = self.request(request)?.unwrap_or(serde_json::Value::Null);
        Ok(serde_json::from_value(value)?)
    }

    pub(crate) fn prepare(&self, request: ApiRequest, request_id: &str) -> Result<HttpRequest> {
        let url = build_url(&self.config.base_url, &request.path, &request.query)?;
        let mut headers = self.default_headers.clone();

        let body = match request.body {
            RequestBody::Empty => None,
            RequestBody::Json(value) => {
                let encoded = serde_json::to_vec(&value)
                    .map_err(|e| Error::sdk(format!("Failed to encode JSON body: {}", e)))?;
                Some(Bytes::from(encoded))
            }
            RequestBody::Raw(content) => {
                headers.remove(CONTENT_TYPE);
                Some(content)
            }
        };

        // Call-supplied headers replace defaults of the same name.
        let mut last: Option<HeaderName> = None;
        for (name, value) in request.headers {
            match name {
                Some(name) => {
                    headers.insert(name.clone(), value);
                    last = Some(name);
                }
                None => {
                    if let Some(name) = &last {
                        headers.append(name.clone(), value);
                    }
                }
            }
        }

        if let Ok(value) = HeaderValue::from_str(request_id) {
            headers.insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
        }

        Ok(HttpRequest {
            method: request.method,
            url,
            headers,
            body,
        })
    }

    fn handle_response(
        &self,
        response: HttpResponse,
        request: &HttpRequest,
        request_id: &str,
        start: Instant,
    ) -> Result<Option<serde_json::Value>> {
        if !response.is_success() {
            let err = Error::from_response(response.status, &response.body);
            info!(
                http_status = response.status,
                error_code = err.api_code().map(|c| c.code()).unwrap_or("unknown"),
                method = %request.method,
                url = %request.url,
                request_id,
                duration_ms = start.elapsed().as_millis() as u64,
                "document-atom request failed"
            );
            return Err(err);
        }

        debug!(
            http_status = response.status,
            body_bytes = response.body.len(),
            request_id,
            duration_ms = start.elapsed().as_millis() as u64,
            "document-atom request succeeded"
        );

        if response.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        Ok(Some(serde_json::from_slice(&response.body)?))
    }
}
