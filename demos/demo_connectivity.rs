//! Connectivity check
//!
//! Configures the process-wide client from the environment and sends a
//! `HEAD /` to the service.
//!
//! Usage:
//!   DOCUMENT_ATOM_ENDPOINT=http://localhost:8000 cargo run --example demo_connectivity

use document_atom_sdk::{configure_with, Connectivity, DocumentAtomClientBuilder};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("document_atom_sdk=info".parse()?))
        .init();

    let endpoint =
        std::env::var("DOCUMENT_ATOM_ENDPOINT").unwrap_or_else(|_| "http://localhost:8000".into());
    let client = configure_with(DocumentAtomClientBuilder::from_env().endpoint(endpoint))?;

    match Connectivity::shared()?.validate_connectivity() {
        Ok(_) => println!("✅ {} is reachable", client.base_url()),
        Err(e) => {
            println!("❌ {}", e);
            std::process::exit(1);
        }
    }
    Ok(())
}
