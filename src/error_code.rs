//! 服务端错误码：定义 DocumentAtom 服务返回的错误码及其映射规则。
//!
//! DocumentAtom server error codes.
//!
//! Failed requests carry a JSON body of the shape
//! `{"Error": "<code>", "Description": "<text>"}` together with a non-2xx
//! status. This module holds the canonical code table and the fallback
//! classification by HTTP status used when the body cannot be interpreted.
//!
//! ## Example
//!
//! ```rust
//! use document_atom_sdk::error_code::ApiErrorCode;
//!
//! let code = ApiErrorCode::from_server_code("NotFound").unwrap();
//! assert_eq!(code, ApiErrorCode::NotFound);
//! assert_eq!(code.code(), "NotFound");
//! assert_eq!(ApiErrorCode::from_http_status(503), Some(ApiErrorCode::InternalError));
//! ```

use std::fmt;

/// Error code reported by the DocumentAtom service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorCode {
    /// Authentication material was not accepted
    AuthenticationFailed,
    /// Authenticated, but not allowed to perform the request
    AuthorizationFailed,
    /// Malformed URL, query or request body
    BadRequest,
    /// Operation would conflict with an existing resource
    Conflict,
    /// Request body could not be deserialized by the server
    DeserializationError,
    /// Account, credentials or resource are inactive
    Inactive,
    /// Resource is in use
    InUse,
    /// Supplied numeric value or range is invalid
    InvalidRange,
    /// Resource was expected to be empty
    NotEmpty,
    /// Resource does not exist
    NotFound,
    /// Internal error on the server
    InternalError,
    /// Operation timed out on the server
    Timeout,
}

impl ApiErrorCode {
    pub const ALL: [ApiErrorCode; 12] = [
        Self::AuthenticationFailed,
        Self::AuthorizationFailed,
        Self::BadRequest,
        Self::Conflict,
        Self::DeserializationError,
        Self::Inactive,
        Self::InUse,
        Self::InvalidRange,
        Self::NotEmpty,
        Self::NotFound,
        Self::InternalError,
        Self::Timeout,
    ];

    /// Returns the code string as it appears on the wire (e.g. `"NotFound"`).
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            Self::AuthenticationFailed => "AuthenticationFailed",
            Self::AuthorizationFailed => "AuthorizationFailed",
            Self::BadRequest => "BadRequest",
            Self::Conflict => "Conflict",
            Self::DeserializationError => "DeserializationError",
            Self::Inactive => "Inactive",
            Self::InUse => "InUse",
            Self::InvalidRange => "InvalidRange",
            Self::NotEmpty => "NotEmpty",
            Self::NotFound => "NotFound",
            Self::InternalError => "InternalError",
            Self::Timeout => "Timeout",
        }
    }

    /// Returns the error kind name callers see in messages (e.g. `"ResourceNotFoundError"`).
    #[inline]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AuthenticationFailed => "AuthenticationError",
            Self::AuthorizationFailed => "AuthorizationError",
            Self::BadRequest => "BadRequestError",
            Self::Conflict => "ConflictError",
            Self::DeserializationError => "DeserializationError",
            Self::Inactive => "InactiveError",
            Self::InUse => "InUseError",
            Self::InvalidRange => "InvalidRangeError",
            Self::NotEmpty => "NotEmptyError",
            Self::NotFound => "ResourceNotFoundError",
            Self::InternalError => "ServerError",
            Self::Timeout => "TimeoutError",
        }
    }

    /// Canonical description, used when the server omits one.
    pub fn description(&self) -> &'static str {
        match self {
            Self::AuthenticationFailed => "Your authentication material was not accepted.",
            Self::AuthorizationFailed => {
                "Your authentication material was accepted, but you are not authorized to perform this request."
            }
            Self::BadRequest => {
                "We were unable to discern your request. Please check your URL, query, and request body."
            }
            Self::Conflict => {
                "Operation failed as it would create a conflict with an existing resource."
            }
            Self::DeserializationError => {
                "Your request body was invalid and could not be deserialized."
            }
            Self::Inactive => {
                "Your account, credentials, or the requested resource are marked as inactive."
            }
            Self::InUse => "The requested resource is in use.",
            Self::InvalidRange => "An invalid range has been supplied and cannot be fulfilled.",
            Self::NotEmpty => "The requested resource is not empty.",
            Self::NotFound => "The requested resource was not found.",
            Self::InternalError => "An internal error has been encountered.",
            Self::Timeout => "The operation timed out.",
        }
    }

    /// Maps a server error code to the corresponding `ApiErrorCode`.
    ///
    /// Matching ignores case, underscores and dashes, so `"NotFound"`,
    /// `"not_found"` and `"NOT-FOUND"` are all accepted. A few historical
    /// aliases (`"Unauthorized"`, `"Forbidden"`) are supported as well.
    pub fn from_server_code(server_code: &str) -> Option<Self> {
        let normalized: String = server_code
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let code = match normalized.as_str() {
            "authenticationfailed" | "unauthorized" => Self::AuthenticationFailed,
            "authorizationfailed" | "forbidden" => Self::AuthorizationFailed,
            "badrequest" => Self::BadRequest,
            "conflict" => Self::Conflict,
            "deserializationerror" => Self::DeserializationError,
            "inactive" => Self::Inactive,
            "inuse" => Self::InUse,
            "invalidrange" => Self::InvalidRange,
            "notempty" => Self::NotEmpty,
            "notfound" => Self::NotFound,
            "internalerror" | "servererror" => Self::InternalError,
            "timeout" => Self::Timeout,
            _ => return None,
        };
        Some(code)
    }

    /// Classifies an HTTP status when the error body carries no usable code.
    ///
    /// Only server-side statuses are classified; a 4xx without a code is
    /// ambiguous and yields `None`.
    pub fn from_http_status(status: u16) -> Option<Self> {
        match status {
            504 => Some(Self::Timeout),
            500..=599 => Some(Self::InternalError),
            _ => None,
        }
    }
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
