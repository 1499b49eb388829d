//! 类型系统模块：定义 DocumentAtom 服务请求与响应的数据类型。
//!
//! # Types Module
//!
//! Plain data types decoded from DocumentAtom responses. They carry no
//! behaviour; equality is field equality.
//!
//! Field names on the wire are PascalCase (`Atoms`, `FileType`, ...). The
//! snake_case spelling is accepted as well when decoding.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Atom`] | One extracted unit of document content |
//! | [`AtomExtractionResult`] | Result of `POST /atom/<format>` |
//! | [`TypeDetectionResult`] | Result of `POST /typedetect` |
//! | [`ApiErrorResponse`] | Error body returned with non-2xx statuses |
//!
//! ## Example
//!
//! ```rust
//! use document_atom_sdk::types::AtomExtractionResult;
//!
//! let result: AtomExtractionResult =
//!     serde_json::from_str(r#"{"Atoms":[{"Content":"hello"}]}"#).unwrap();
//! assert_eq!(result.atoms.len(), 1);
//! assert_eq!(result.atoms[0].content, "hello");
//! ```

pub mod api_error;
pub mod atom;
pub mod detection;

pub use api_error::ApiErrorResponse;
pub use atom::{Atom, AtomExtractionResult};
pub use detection::TypeDetectionResult;

/// Free-form metadata map attached to atoms and results.
pub type Metadata = serde_json::Map<String, serde_json::Value>;
