//! Resilient request client for the DocumentAtom service.
//!
//! Developer-friendly goal: keep the public surface small and predictable.
//! Implementation details are split into submodules under `src/client/`.

pub mod builder;
pub mod config;
pub mod core;
mod policy;
pub mod request;

pub use builder::DocumentAtomClientBuilder;
pub use config::{ClientConfig, DEFAULT_RETRIES, DEFAULT_TIMEOUT};
pub use self::core::{DocumentAtomClient, REQUEST_ID_HEADER};
pub use request::{build_url, ApiRequest, QueryParam, RequestBody};
