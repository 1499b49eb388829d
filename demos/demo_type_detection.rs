//! File type detection
//!
//! Usage:
//!   DOCUMENT_ATOM_ENDPOINT=http://localhost:8000 cargo run --example demo_type_detection -- path/to/file

use document_atom_sdk::{DocumentAtomClientBuilder, TypeDetection};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: demo_type_detection <file>"))?;

    let endpoint =
        std::env::var("DOCUMENT_ATOM_ENDPOINT").unwrap_or_else(|_| "http://localhost:8000".into());
    let client = Arc::new(DocumentAtomClientBuilder::from_env().endpoint(endpoint).build()?);

    let result = TypeDetection::new(client).detect_type(path.as_str(), None)?;
    match result.confidence {
        Some(c) => println!("{} -> {} (confidence {:.2})", path, result.file_type, c),
        None => println!("{} -> {}", path, result.file_type),
    }
    Ok(())
}
