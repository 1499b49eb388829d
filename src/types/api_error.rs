//! Error body returned by the service.

use serde::{Deserialize, Serialize};

/// `{"Error": "<code>", "Description": "<text>"}`
///
/// Both fields are optional here so that a partially well-formed body can
/// still be classified by status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(rename = "Error", alias = "error", default)]
    pub error: Option<String>,
    #[serde(rename = "Description", alias = "description", default)]
    pub description: Option<String>,
}
