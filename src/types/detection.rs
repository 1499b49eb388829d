//! Type detection results.

use super::Metadata;
use serde::{Deserialize, Serialize};

/// Response of a type detection request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDetectionResult {
    #[serde(rename = "FileType", alias = "file_type")]
    pub file_type: String,
    /// Detector confidence in `[0, 1]`, when the server reports one.
    #[serde(
        rename = "Confidence",
        alias = "confidence",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub confidence: Option<f64>,
    #[serde(
        rename = "Metadata",
        alias = "metadata",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub metadata: Option<Metadata>,
}
