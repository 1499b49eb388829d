//! Client configuration.

use std::env;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_RETRIES: u32 = 3;

/// Connection settings of a [`DocumentAtomClient`](super::DocumentAtomClient).
///
/// Owned by the client once built; the client never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Service root, e.g. `http://localhost:8000`. Kept exactly as given.
    pub base_url: String,
    /// Per-attempt timeout.
    pub timeout: Duration,
    /// Extra attempts after the first one on transport failures.
    pub retries: u32,
    /// Delay before the first retry; doubles on each further retry.
    pub retry_min_delay: Duration,
    /// Upper bound for the retry delay.
    pub retry_max_delay: Duration,
    pub user_agent: String,
    pub proxy_url: Option<String>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            retries: DEFAULT_RETRIES,
            retry_min_delay: Duration::ZERO,
            retry_max_delay: Duration::ZERO,
            user_agent: format!("document-atom-sdk/{}", env!("CARGO_PKG_VERSION")),
            proxy_url: None,
        }
    }

    /// Total number of attempts per request.
    pub fn max_attempts(&self) -> u32 {
        self.retries.saturating_add(1)
    }

    /// Reads settings from the environment.
    ///
    /// - `DOCUMENT_ATOM_ENDPOINT`
    /// - `DOCUMENT_ATOM_TIMEOUT_SECS` (default 10)
    /// - `DOCUMENT_ATOM_RETRIES` (default 3)
    /// - `DOCUMENT_ATOM_RETRY_MIN_DELAY_MS` / `DOCUMENT_ATOM_RETRY_MAX_DELAY_MS` (default 0)
    /// - `DOCUMENT_ATOM_PROXY_URL`
    ///
    /// Unparsable numbers are ignored with a warning. A missing endpoint leaves
    /// `base_url` empty, which the builder rejects.
    pub fn from_env() -> Self {
        let mut config = Self::new(env::var("DOCUMENT_ATOM_ENDPOINT").unwrap_or_default());

        if let Some(secs) = env_number::<u64>("DOCUMENT_ATOM_TIMEOUT_SECS") {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(retries) = env_number::<u32>("DOCUMENT_ATOM_RETRIES") {
            config.retries = retries;
        }
        if let Some(ms) = env_number::<u64>("DOCUMENT_ATOM_RETRY_MIN_DELAY_MS") {
            config.retry_min_delay = Duration::from_millis(ms);
        }
        config.retry_max_delay = env_number::<u64>("DOCUMENT_ATOM_RETRY_MAX_DELAY_MS")
            .map(Duration::from_millis)
            .unwrap_or(config.retry_min_delay);
        config.proxy_url = env::var("DOCUMENT_ATOM_PROXY_URL")
            .ok()
            .filter(|s| !s.trim().is_empty());

        config
    }
}

fn env_number<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(key, value = raw.as_str(), "ignoring unparsable environment setting");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("http://test-api.com");
        assert_eq!(config.base_url, "http://test-api.com");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.retries, 3);
        assert_eq!(config.max_attempts(), 4);
        assert!(config.user_agent.starts_with("document-atom-sdk/"));
    }

    #[test]
    fn test_from_env() {
        // Only this test touches these variables.
        env::set_var("DOCUMENT_ATOM_ENDPOINT", "http://env-api.com");
        env::set_var("DOCUMENT_ATOM_TIMEOUT_SECS", "30");
        env::set_var("DOCUMENT_ATOM_RETRIES", "not-a-number");
        env::set_var("DOCUMENT_ATOM_RETRY_MIN_DELAY_MS", "50");

        let config = ClientConfig::from_env();
        assert_eq!(config.base_url, "http://env-api.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.retries, DEFAULT_RETRIES);
        assert_eq!(config.retry_min_delay, Duration::from_millis(50));
        assert_eq!(config.retry_max_delay, Duration::from_millis(50));

        for key in [
            "DOCUMENT_ATOM_ENDPOINT",
            "DOCUMENT_ATOM_TIMEOUT_SECS",
            "DOCUMENT_ATOM_RETRIES",
            "DOCUMENT_ATOM_RETRY_MIN_DELAY_MS",
        ] {
            env::remove_var(key);
        }
    }
}
