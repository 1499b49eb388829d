//! OCR-capable formats
//!
//! Runs the same document through extraction with and without OCR and
//! compares the atom counts. Only pdf, powerpoint and rtf honour the flag.
//!
//! Usage:
//!   DOCUMENT_ATOM_ENDPOINT=http://localhost:8000 cargo run --example demo_ocr_formats -- scan.pdf

use document_atom_sdk::{AtomExtraction, DocumentAtomClientBuilder, Format};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: demo_ocr_formats <pdf|pptx|rtf file>"))?;
    let format = match path.rsplit('.').next().map(str::to_ascii_lowercase).as_deref() {
        Some("pdf") => Format::Pdf,
        Some("pptx") | Some("ppt") => Format::PowerPoint,
        Some("rtf") => Format::Rtf,
        _ => anyhow::bail!("OCR is only supported for pdf, powerpoint and rtf"),
    };

    let endpoint =
        std::env::var("DOCUMENT_ATOM_ENDPOINT").unwrap_or_else(|_| "http://localhost:8000".into());
    // OCR is slow; give it more time than the default.
    let client = DocumentAtomClientBuilder::from_env()
        .endpoint(endpoint)
        .timeout(Duration::from_secs(120))
        .build()?;
    let atoms = AtomExtraction::new(Arc::new(client));

    for ocr in [None, Some(true)] {
        let result = atoms.extract_atoms_as(path.as_str(), format, ocr, None)?;
        println!(
            "{} ocr={:<5} -> {} atoms",
            format,
            ocr.unwrap_or(false),
            result.atoms.len()
        );
    }
    Ok(())
}
