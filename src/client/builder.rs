use crate::client::config::ClientConfig;
use crate::client::core::DocumentAtomClient;
use crate::client::policy::RetryPolicy;
use crate::transport::{HttpTransport, Transport};
use crate::{Error, ErrorContext, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Builder for creating clients with custom configuration.
///
/// Keep this surface area small and predictable (developer-friendly).
pub struct DocumentAtomClientBuilder {
    config: ClientConfig,
    headers: HeaderMap,
    transport: Option<Arc<dyn Transport>>,
}

impl DocumentAtomClientBuilder {
    pub fn new() -> Self {
        Self::from_config(ClientConfig::new(String::new()))
    }

    pub fn from_config(config: ClientConfig) -> Self {
        Self {
            config,
            headers: HeaderMap::new(),
            transport: None,
        }
    }

    /// Start from `DOCUMENT_ATOM_*` environment settings (see [`ClientConfig::from_env`]).
    pub fn from_env() -> Self {
        Self::from_config(ClientConfig::from_env())
    }

    /// Service root address (required).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.base_url = endpoint.into();
        self
    }

    /// Per-attempt timeout. Default 10 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Retries after the first attempt on transport failures. Default 3.
    pub fn retries(mut self, retries: u32) -> Self {
        self.config.retries = retries;
        self
    }

    /// Exponential backoff between retries, starting at `min` and capped at `max`.
    ///
    /// The default is zero, i.e. immediate retry.
    pub fn retry_backoff(mut self, min: Duration, max: Duration) -> Self {
        self.config.retry_min_delay = min;
        self.config.retry_max_delay = max;
        self
    }

    /// Route all traffic through an HTTP(S) proxy.
    pub fn proxy_url(mut self, url: impl Into<String>) -> Self {
        self.config.proxy_url = Some(url.into());
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Add a header sent with every request (e.g. an access key).
    pub fn default_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Replace the HTTP transport (primarily for testing with fakes).
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<DocumentAtomClient> {
        let config = self.config;
        validate_config(&config)?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let agent = HeaderValue::from_str(&config.user_agent).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid user agent: {}", e),
                ErrorContext::new()
                    .with_field_path("user_agent")
                    .with_source("client_builder"),
            )
        })?;
        default_headers.insert(USER_AGENT, agent);
        for (name, value) in self.headers.iter() {
            default_headers.insert(name.clone(), value.clone());
        }

        let transport: Arc<dyn Transport> = match self.transport {
            Some(t) => t,
            None => Arc::new(HttpTransport::new(&config)?),
        };

        let policy = RetryPolicy::new(
            config.retries,
            config.retry_min_delay,
            config.retry_max_delay,
        );

        Ok(DocumentAtomClient {
            config,
            transport,
            policy,
            default_headers,
        })
    }
}

impl Default for DocumentAtomClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn config_error(msg: impl Into<String>, field: &str) -> Error {
    Error::configuration_with_context(
        msg,
        ErrorContext::new()
            .with_field_path(field)
            .with_source("client_builder"),
    )
}

fn validate_config(config: &ClientConfig) -> Result<()> {
    let endpoint = config.base_url.trim();
    if endpoint.is_empty() {
        return Err(config_error("Endpoint is required", "endpoint"));
    }

    let url = Url::parse(endpoint)
        .map_err(|e| config_error(format!("Invalid endpoint {}: {}", endpoint, e), "endpoint"))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(config_error(
            format!("Unsupported endpoint scheme: {}", url.scheme()),
            "endpoint",
        ));
    }

    if config.timeout.is_zero() {
        return Err(config_error("timeout must be positive", "timeout"));
    }

    if let Some(proxy) = &config.proxy_url {
        Url::parse(proxy)
            .map_err(|e| config_error(format!("Invalid proxy URL {}: {}", proxy, e), "proxy_url"))?;
    }

    Ok(())
}
