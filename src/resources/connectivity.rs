use crate::client::{ApiRequest, DocumentAtomClient};
use crate::{configuration, Error, Result};
use std::sync::Arc;
use tracing::error;

/// Health check against the service root.
#[derive(Debug, Clone)]
pub struct Connectivity {
    client: Arc<DocumentAtomClient>,
}

impl Connectivity {
    pub fn new(client: Arc<DocumentAtomClient>) -> Self {
        Self { client }
    }

    /// Uses the process-wide client; fails with [`Error::NotConfigured`] before `configure`.
    pub fn shared() -> Result<Self> {
        Ok(Self::new(configuration::client()?))
    }

    /// `HEAD <base>/`. Returns `true` for any successful response.
    ///
    /// Any failure is logged and returned wrapped in [`Error::Sdk`]; the
    /// original error is kept as the source.
    pub fn validate_connectivity(&self) -> Result<bool> {
        match self.client.request(ApiRequest::head("")) {
            Ok(_) => Ok(true),
            Err(e) => {
                let message = format!("Failed to validate connectivity: {}", e);
                error!(base_url = self.client.base_url(), error = %e, "failed to validate connectivity");
                Err(Error::sdk_with_source(message, e))
            }
        }
    }
}
