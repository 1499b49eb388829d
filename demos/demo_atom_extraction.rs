//! Atom extraction
//!
//! Extracts atoms from a local file. The format is taken from the second
//! argument, or guessed from the file suffix.
//!
//! Usage:
//!   DOCUMENT_ATOM_ENDPOINT=http://localhost:8000 cargo run --example demo_atom_extraction -- report.docx [word]

use document_atom_sdk::{configure_with, AtomExtraction, DocumentAtomClientBuilder, Format};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn guess_format(path: &Path) -> Option<Format> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let format = match ext.as_str() {
        "csv" => Format::Csv,
        "xlsx" | "xls" => Format::Excel,
        "html" | "htm" => Format::Html,
        "json" => Format::Json,
        "md" => Format::Markdown,
        "jpg" | "jpeg" | "tif" | "tiff" => Format::Ocr,
        "pdf" => Format::Pdf,
        "png" => Format::Png,
        "pptx" | "ppt" => Format::PowerPoint,
        "rtf" => Format::Rtf,
        "txt" => Format::Text,
        "docx" | "doc" => Format::Word,
        "xml" => Format::Xml,
        _ => return None,
    };
    Some(format)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .ok_or_else(|| anyhow::anyhow!("usage: demo_atom_extraction <file> [format]"))?;
    let format = match args.next() {
        Some(name) => name.parse::<Format>()?,
        None => guess_format(Path::new(&path))
            .ok_or_else(|| anyhow::anyhow!("cannot guess format, supported: {}", Format::supported_list()))?,
    };

    let endpoint =
        std::env::var("DOCUMENT_ATOM_ENDPOINT").unwrap_or_else(|_| "http://localhost:8000".into());
    configure_with(DocumentAtomClientBuilder::from_env().endpoint(endpoint))?;

    let result = AtomExtraction::shared()?.extract_atoms_as(path.as_str(), format, None, None)?;
    println!("📄 {} ({}): {} atoms", path, format, result.atoms.len());
    for (i, atom) in result.atoms.iter().enumerate() {
        let kind = atom.atom_type.as_deref().unwrap_or("-");
        println!("  [{:>3}] {:<10} {}", i, kind, atom.content.lines().next().unwrap_or(""));
    }
    Ok(())
}
