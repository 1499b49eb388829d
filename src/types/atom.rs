//! Atom extraction results.

use super::Metadata;
use serde::{Deserialize, Serialize};

/// A single extracted unit of document content (paragraph, cell, region, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    #[serde(rename = "Content", alias = "content")]
    pub content: String,
    #[serde(
        rename = "AtomType",
        alias = "atom_type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub atom_type: Option<String>,
    /// Location of the atom inside the source document (page, bounding box, ...).
    #[serde(
        rename = "Position",
        alias = "position",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub position: Option<Metadata>,
    #[serde(
        rename = "Metadata",
        alias = "metadata",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub metadata: Option<Metadata>,
}

impl Atom {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            atom_type: None,
            position: None,
            metadata: None,
        }
    }
}

/// Response of an atom extraction request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AtomExtractionResult {
    #[serde(rename = "Atoms", alias = "atoms", default)]
    pub atoms: Vec<Atom>,
    #[serde(
        rename = "Metadata",
        alias = "metadata",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub metadata: Option<Metadata>,
    #[serde(
        rename = "FileType",
        alias = "file_type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub file_type: Option<String>,
}

impl AtomExtractionResult {
    /// Concatenated content of all atoms, one per line.
    pub fn text(&self) -> String {
        self.atoms
            .iter()
            .map(|a| a.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_full_atom() {
        let atom: Atom = serde_json::from_value(json!({
            "Content": "Quarterly revenue",
            "AtomType": "Text",
            "Position": {"Page": 2, "Line": 14},
            "Metadata": {"Font": "Helvetica"}
        }))
        .unwrap();
        assert_eq!(atom.content, "Quarterly revenue");
        assert_eq!(atom.atom_type.as_deref(), Some("Text"));
        assert_eq!(atom.position.as_ref().unwrap()["Page"], json!(2));
        assert_eq!(atom.metadata.as_ref().unwrap()["Font"], json!("Helvetica"));
    }

    #[test]
    fn test_missing_atoms_defaults_to_empty() {
        let result: AtomExtractionResult =
            serde_json::from_value(json!({"FileType": "Pdf"})).unwrap();
        assert!(result.atoms.is_empty());
        assert_eq!(result.file_type.as_deref(), Some("Pdf"));
    }

    #[test]
    fn test_snake_case_names_are_accepted() {
        let result: AtomExtractionResult = serde_json::from_value(json!({
            "atoms": [{"content": "a", "atom_type": "Table"}],
            "file_type": "Csv"
        }))
        .unwrap();
        assert_eq!(result.atoms[0].atom_type.as_deref(), Some("Table"));
        assert_eq!(result.file_type.as_deref(), Some("Csv"));
    }

    #[test]
    fn test_atom_requires_content() {
        let err = serde_json::from_value::<Atom>(json!({"AtomType": "Text"}));
        assert!(err.is_err());
    }

    #[test]
    fn test_serializes_with_wire_names() {
        let result = AtomExtractionResult {
            atoms: vec![Atom::new("x")],
            metadata: None,
            file_type: None,
        };
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"Atoms": [{"Content": "x"}]})
        );
        assert_eq!(result.text(), "x");
    }
}
