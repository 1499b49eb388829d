//! Input shapes
//!
//! The same text document sent as a path, as bytes and as a stream.
//!
//! Usage:
//!   DOCUMENT_ATOM_ENDPOINT=http://localhost:8000 cargo run --example demo_file_inputs

use document_atom_sdk::{configure_with, AtomExtraction, DocumentAtomClientBuilder, FileInput};
use std::fs::File;
use std::io::Write;
use tracing_subscriber::EnvFilter;

const SAMPLE: &str = "First paragraph.\n\nSecond paragraph.\n";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let endpoint =
        std::env::var("DOCUMENT_ATOM_ENDPOINT").unwrap_or_else(|_| "http://localhost:8000".into());
    configure_with(DocumentAtomClientBuilder::from_env().endpoint(endpoint))?;
    let atoms = AtomExtraction::shared()?;

    let path = std::env::temp_dir().join("document-atom-demo.txt");
    File::create(&path)?.write_all(SAMPLE.as_bytes())?;

    // Path: the filename comes from the path itself.
    let from_path = atoms.extract_atoms_text(path.as_path(), None)?;
    println!("path   -> {} atoms", from_path.atoms.len());

    // Bytes: a filename is required.
    let from_bytes = atoms.extract_atoms_text(SAMPLE.as_bytes(), Some("sample.txt"))?;
    println!("bytes  -> {} atoms", from_bytes.atoms.len());

    // Stream: rewound before reading, named explicitly.
    let mut file = File::open(&path)?;
    let from_stream =
        atoms.extract_atoms_text(FileInput::named_stream(&mut file, "sample.txt"), None)?;
    println!("stream -> {} atoms", from_stream.atoms.len());

    // A nameless stream without a filename is rejected before any request.
    let mut file = File::open(&path)?;
    if let Err(e) = atoms.extract_atoms_text(FileInput::stream(&mut file), None) {
        println!("stream without name -> {}", e);
    }

    std::fs::remove_file(&path)?;
    Ok(())
}
