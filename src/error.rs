use crate::error_code::ApiErrorCode;
use crate::transport::TransportError;
use crate::types::ApiErrorResponse;
use std::path::PathBuf;
use thiserror::Error;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Argument or configuration key that caused the error (e.g., "format_type", "endpoint")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected values)
    pub details: Option<String>,
    /// Source of the error (e.g., "file_input", "atom_extraction")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for the DocumentAtom SDK.
///
/// Every failure the SDK reports is a variant of this enum, so callers can
/// match broadly (`Err(e)`) or narrowly (`Err(Error::Api { code: ApiErrorCode::NotFound, .. })`).
#[derive(Debug, Error)]
pub enum Error {
    /// Bad caller input, detected before anything is sent over the wire.
    #[error("Validation error: {message}{}", format_context(.context))]
    Validation {
        message: String,
        context: ErrorContext,
    },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("SDK is not configured. Call 'configure' first.")]
    NotConfigured,

    /// A local file passed as input does not exist.
    #[error("File does not exist: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    /// Every attempt failed at the transport level.
    #[error("Request failed after {attempts} attempts: {source}")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        source: TransportError,
    },

    /// Error reported by the server; `message` is the server's description.
    #[error("{message}")]
    Api {
        code: ApiErrorCode,
        status: u16,
        message: String,
    },

    /// A successful response carried a body that is not the expected JSON.
    #[error("Deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// Catch-all SDK error.
    #[error("{message}")]
    Sdk {
        message: String,
        #[source]
        source: Option<Box<Error>>,
    },
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Create a new validation error with structured context
    pub fn validation_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Validation {
            message: msg.into(),
            context,
        }
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Create a generic SDK error.
    pub fn sdk(msg: impl Into<String>) -> Self {
        Error::Sdk {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a generic SDK error that wraps another error.
    pub fn sdk_with_source(msg: impl Into<String>, source: Error) -> Self {
        Error::Sdk {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Translate a non-2xx response into an error.
    ///
    /// A recognised `Error` code in the body wins. Without one, the HTTP status
    /// is consulted (5xx is always a server error). Anything else becomes an
    /// `Unexpected error`.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let parsed: Option<ApiErrorResponse> = serde_json::from_slice(body).ok();

        let description = parsed
            .as_ref()
            .and_then(|r| r.description.as_deref())
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        let code = parsed
            .as_ref()
            .and_then(|r| r.error.as_deref())
            .and_then(ApiErrorCode::from_server_code)
            .or_else(|| ApiErrorCode::from_http_status(status));

        if let Some(code) = code {
            return Error::Api {
                code,
                status,
                message: description.unwrap_or_else(|| code.description().to_string()),
            };
        }

        let detail = match parsed.and_then(|r| r.error) {
            Some(server_code) => match description {
                Some(d) => format!("{}: {}", server_code, d),
                None => server_code,
            },
            None => {
                let text = String::from_utf8_lossy(body);
                let text = text.trim();
                if text.is_empty() {
                    format!("HTTP {} with empty body", status)
                } else {
                    format!("HTTP {}: {}", status, text)
                }
            }
        };
        Error::sdk(format!("Unexpected error: {}", detail))
    }

    /// Server error code, if this error was reported by the server.
    pub fn api_code(&self) -> Option<ApiErrorCode> {
        match self {
            Error::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// HTTP status of a server-reported error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } | Error::Validation { context, .. } => {
                Some(context)
            }
            _ => None,
        }
    }
}
