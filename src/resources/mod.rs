//! 资源门面：连通性检查、类型检测与原子提取。
//!
//! # Resource Façades
//!
//! Thin wrappers that turn one service operation into an [`ApiRequest`],
//! delegate file handling to [`crate::file_input`] and the network exchange
//! to [`DocumentAtomClient`].
//!
//! | Façade | Operation | Wire |
//! |--------|-----------|------|
//! | [`Connectivity`] | `validate_connectivity` | `HEAD /` |
//! | [`TypeDetection`] | `detect_type` | `POST /typedetect` |
//! | [`AtomExtraction`] | `extract_atoms`, `extract_atoms_<format>` | `POST /atom/<format>[?ocr]` |
//!
//! Each façade wraps an `Arc<DocumentAtomClient>`: pass one explicitly with
//! `new`, or use the process-wide client with `shared()`.
//!
//! ```rust,no_run
//! use document_atom_sdk::{configure, AtomExtraction};
//!
//! fn main() -> document_atom_sdk::Result<()> {
//!     configure("http://localhost:8000")?;
//!     let result = AtomExtraction::shared()?.extract_atoms_pdf("report.pdf", Some(true), None)?;
//!     println!("{} atoms", result.atoms.len());
//!     Ok(())
//! }
//! ```

pub mod atom_extraction;
pub mod connectivity;
pub mod type_detection;

pub use atom_extraction::AtomExtraction;
pub use connectivity::Connectivity;
pub use type_detection::TypeDetection;

use crate::client::{ApiRequest, DocumentAtomClient};
use crate::file_input::NormalizedPayload;
use crate::Result;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Sends a normalized document as the raw request body with `content_type`.
pub(crate) fn send_document<T: DeserializeOwned>(
    client: &DocumentAtomClient,
    request: ApiRequest,
    payload: NormalizedPayload,
    content_type: &'static str,
) -> Result<T> {
    debug!(
        path = request.path.as_str(),
        filename = payload.filename.as_str(),
        bytes = payload.len(),
        content_type,
        "uploading document"
    );
    client.request_json(request.content_type(content_type).raw(payload.content))
}
