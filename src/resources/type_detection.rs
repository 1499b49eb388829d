use crate::client::{ApiRequest, DocumentAtomClient};
use crate::file_input::{normalize, FileInput};
use crate::types::TypeDetectionResult;
use crate::{configuration, Result};
use std::sync::Arc;

const RESOURCE_NAME: &str = "typedetect";

/// File type detection.
#[derive(Debug, Clone)]
pub struct TypeDetection {
    client: Arc<DocumentAtomClient>,
}

impl TypeDetection {
    pub fn new(client: Arc<DocumentAtomClient>) -> Self {
        Self { client }
    }

    /// Uses the process-wide client; fails with [`crate::Error::NotConfigured`] before `configure`.
    pub fn shared() -> Result<Self> {
        Ok(Self::new(configuration::client()?))
    }

    /// Detect the type of a document.
    ///
    /// The `Content-Type` sent is inferred from the resolved filename, so
    /// `filename` matters for bytes and nameless streams (where it is required).
    pub fn detect_type<'a>(
        &self,
        input: impl Into<FileInput<'a>>,
        filename: Option<&str>,
    ) -> Result<TypeDetectionResult> {
        let payload = normalize(input.into(), filename)?;
        let content_type = payload.content_type;
        super::send_document(
            &self.client,
            ApiRequest::post(RESOURCE_NAME),
            payload,
            content_type,
        )
    }
}
