//! Document formats accepted by the atom extraction endpoint.

use crate::{Error, ErrorContext};
use std::fmt;
use std::str::FromStr;

/// Format identifier selecting both the `atom/<format>` route and the MIME type sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Format {
    Csv,
    Excel,
    Html,
    Json,
    Markdown,
    Ocr,
    Pdf,
    Png,
    PowerPoint,
    Rtf,
    Text,
    Word,
    Xml,
}

impl Format {
    /// All supported formats, sorted by name.
    pub const ALL: [Format; 13] = [
        Format::Csv,
        Format::Excel,
        Format::Html,
        Format::Json,
        Format::Markdown,
        Format::Ocr,
        Format::Pdf,
        Format::Png,
        Format::PowerPoint,
        Format::Rtf,
        Format::Text,
        Format::Word,
        Format::Xml,
    ];

    /// Path segment used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Csv => "csv",
            Format::Excel => "excel",
            Format::Html => "html",
            Format::Json => "json",
            Format::Markdown => "markdown",
            Format::Ocr => "ocr",
            Format::Pdf => "pdf",
            Format::Png => "png",
            Format::PowerPoint => "powerpoint",
            Format::Rtf => "rtf",
            Format::Text => "text",
            Format::Word => "word",
            Format::Xml => "xml",
        }
    }

    /// `Content-Type` sent with the document bytes.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Format::Csv => "text/csv",
            Format::Excel => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Format::Html => "text/html",
            Format::Json => "application/json",
            Format::Markdown => "text/markdown",
            Format::Ocr => "application/octet-stream",
            Format::Pdf => "application/pdf",
            Format::Png => "image/png",
            Format::PowerPoint => {
                "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            }
            Format::Rtf => "application/rtf",
            Format::Text => "text/plain",
            Format::Word => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            Format::Xml => "application/xml",
        }
    }

    /// Whether the server honours the `ocr` flag for this format.
    pub fn supports_ocr(&self) -> bool {
        matches!(self, Format::Pdf | Format::PowerPoint | Format::Rtf)
    }

    /// Comma separated list of supported format names.
    pub fn supported_list() -> String {
        Self::ALL
            .iter()
            .map(Format::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = Error;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == lowered)
            .ok_or_else(|| {
                Error::validation_with_context(
                    format!(
                        "Unsupported format: {}. Supported formats: {}",
                        lowered,
                        Self::supported_list()
                    ),
                    ErrorContext::new()
                        .with_field_path("format_type")
                        .with_source("atom_extraction"),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("PDF".parse::<Format>().unwrap(), Format::Pdf);
        assert_eq!("PowerPoint".parse::<Format>().unwrap(), Format::PowerPoint);
        assert_eq!(" csv ".parse::<Format>().unwrap(), Format::Csv);
    }

    #[test]
    fn test_every_format_parses_from_its_name() {
        for f in Format::ALL {
            assert_eq!(f.as_str().parse::<Format>().unwrap(), f);
        }
    }

    #[test]
    fn test_unsupported_format_lists_supported_set() {
        let err = "docx".parse::<Format>().unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
        let msg = err.to_string();
        assert!(msg.contains("Unsupported format: docx"));
        assert!(msg.contains(
            "csv, excel, html, json, markdown, ocr, pdf, png, powerpoint, rtf, text, word, xml"
        ));
    }

    #[test]
    fn test_ocr_capable_formats() {
        let ocr: Vec<_> = Format::ALL.iter().filter(|f| f.supports_ocr()).collect();
        assert_eq!(ocr, vec![&Format::Pdf, &Format::PowerPoint, &Format::Rtf]);
    }

    #[test]
    fn test_all_is_sorted_by_name() {
        let names: Vec<_> = Format::ALL.iter().map(|f| f.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
