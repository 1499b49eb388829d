//! # document-atom-sdk
//!
//! DocumentAtom 服务的 Rust 客户端：连通性检查、文件类型检测与文档原子提取。
//!
//! Client library for a DocumentAtom service, which breaks documents into
//! structured "atoms" (text fragments, tables, images, ...).
//!
//! ## Overview
//!
//! The SDK is a thin, synchronous layer over HTTP. A [`DocumentAtomClient`]
//! owns the base address, timeout and retry settings; three resource façades
//! turn service operations into requests on top of it:
//!
//! - [`Connectivity`]: `HEAD /`, is the service reachable?
//! - [`TypeDetection`]: `POST /typedetect`, what kind of document is this?
//! - [`AtomExtraction`]: `POST /atom/<format>`, split a document into atoms
//!
//! Documents can be given as a local path, in-memory bytes or an open stream
//! (see [`FileInput`]). Transport failures are retried; HTTP error statuses are
//! mapped to [`Error::Api`] with an [`ApiErrorCode`] and never retried.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use document_atom_sdk::{configure, AtomExtraction, Connectivity};
//!
//! fn main() -> document_atom_sdk::Result<()> {
//!     configure("http://localhost:8000")?;
//!
//!     if Connectivity::shared()?.validate_connectivity()? {
//!         let result = AtomExtraction::shared()?.extract_atoms("report.pdf", "pdf", Some(true), None)?;
//!         for atom in &result.atoms {
//!             println!("{}", atom.content);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Request client, builder and retry policy |
//! | [`configuration`] | Process-wide shared client |
//! | [`resources`] | Connectivity, type detection and atom extraction façades |
//! | [`file_input`] | Path / bytes / stream normalization |
//! | [`format`] | Supported extraction formats |
//! | [`transport`] | HTTP transport seam |
//! | [`types`] | Response data types |
//! | [`error`] / [`error_code`] | Error taxonomy |

pub mod client;
pub mod configuration;
pub mod error;
pub mod error_code;
pub mod file_input;
pub mod format;
pub mod resources;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{ApiRequest, ClientConfig, DocumentAtomClient, DocumentAtomClientBuilder};
pub use configuration::{configure, configure_with};
pub use error::{Error, ErrorContext};
pub use error_code::ApiErrorCode;
pub use file_input::FileInput;
pub use format::Format;
pub use resources::{AtomExtraction, Connectivity, TypeDetection};
pub use types::{ApiErrorResponse, Atom, AtomExtractionResult, TypeDetectionResult};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
