use crate::client::{ApiRequest, DocumentAtomClient};
use crate::file_input::{normalize, FileInput};
use crate::format::Format;
use crate::types::AtomExtractionResult;
use crate::{configuration, Result};
use std::sync::Arc;

const RESOURCE_NAME: &str = "atom";

/// Atom extraction for the supported document formats.
///
/// OCR is opt-in: the `ocr` flag is only put on the wire when `ocr` is
/// `Some(true)` and the format supports it (pdf, powerpoint, rtf).
/// `Some(false)` and `None` produce identical requests.
#[derive(Debug, Clone)]
pub struct AtomExtraction {
    client: Arc<DocumentAtomClient>,
}

impl AtomExtraction {
    pub fn new(client: Arc<DocumentAtomClient>) -> Self {
        Self { client }
    }

    /// Uses the process-wide client; fails with [`crate::Error::NotConfigured`] before `configure`.
    pub fn shared() -> Result<Self> {
        Ok(Self::new(configuration::client()?))
    }

    /// Route for `format`: `atom/<format>`, plus `?ocr` when requested and supported.
    pub fn route(format: Format, ocr: Option<bool>) -> ApiRequest {
        let request = ApiRequest::post(format!("{}/{}", RESOURCE_NAME, format.as_str()));
        if format.supports_ocr() && ocr == Some(true) {
            request.flag("ocr")
        } else {
            request
        }
    }

    /// Extract atoms from a document.
    ///
    /// `format_type` is matched case-insensitively against [`Format::ALL`];
    /// an unknown format fails validation before the input is read.
    pub fn extract_atoms<'a>(
        &self,
        input: impl Into<FileInput<'a>>,
        format_type: &str,
        ocr: Option<bool>,
        filename: Option<&str>,
    ) -> Result<AtomExtractionResult> {
        let format: Format = format_type.parse()?;
        self.extract_atoms_as(input, format, ocr, filename)
    }

    /// Same as [`extract_atoms`](Self::extract_atoms) with an already typed format.
    pub fn extract_atoms_as<'a>(
        &self,
        input: impl Into<FileInput<'a>>,
        format: Format,
        ocr: Option<bool>,
        filename: Option<&str>,
    ) -> Result<AtomExtractionResult> {
        let payload = normalize(input.into(), filename)?;
        super::send_document(
            &self.client,
            Self::route(format, ocr),
            payload,
            format.mime_type(),
        )
    }

    pub fn extract_atoms_csv<'a>(
        &self,
        input: impl Into<FileInput<'a>>,
        filename: Option<&str>,
    ) -> Result<AtomExtractionResult> {
        self.extract_atoms_as(input, Format::Csv, None, filename)
    }

    pub fn extract_atoms_excel<'a>(
        &self,
        input: impl Into<FileInput<'a>>,
        filename: Option<&str>,
    ) -> Result<AtomExtractionResult> {
        self.extract_atoms_as(input, Format::Excel, None, filename)
    }

    pub fn extract_atoms_html<'a>(
        &self,
        input: impl Into<FileInput<'a>>,
        filename: Option<&str>,
    ) -> Result<AtomExtractionResult> {
        self.extract_atoms_as(input, Format::Html, None, filename)
    }

    pub fn extract_atoms_json<'a>(
        &self,
        input: impl Into<FileInput<'a>>,
        filename: Option<&str>,
    ) -> Result<AtomExtractionResult> {
        self.extract_atoms_as(input, Format::Json, None, filename)
    }

    pub fn extract_atoms_markdown<'a>(
        &self,
        input: impl Into<FileInput<'a>>,
        filename: Option<&str>,
    ) -> Result<AtomExtractionResult> {
        self.extract_atoms_as(input, Format::Markdown, None, filename)
    }

    /// Extract atoms from an image or scanned document using the OCR endpoint.
    pub fn extract_atoms_ocr<'a>(
        &self,
        input: impl Into<FileInput<'a>>,
        filename: Option<&str>,
    ) -> Result<AtomExtractionResult> {
        self.extract_atoms_as(input, Format::Ocr, None, filename)
    }

    pub fn extract_atoms_pdf<'a>(
        &self,
        input: impl Into<FileInput<'a>>,
        ocr: Option<bool>,
        filename: Option<&str>,
    ) -> Result<AtomExtractionResult> {
        self.extract_atoms_as(input, Format::Pdf, ocr, filename)
    }

    pub fn extract_atoms_png<'a>(
        &self,
        input: impl Into<FileInput<'a>>,
        filename: Option<&str>,
    ) -> Result<AtomExtractionResult> {
        self.extract_atoms_as(input, Format::Png, None, filename)
    }

    pub fn extract_atoms_powerpoint<'a>(
        &self,
        input: impl Into<FileInput<'a>>,
        ocr: Option<bool>,
        filename: Option<&str>,
    ) -> Result<AtomExtractionResult> {
        self.extract_atoms_as(input, Format::PowerPoint, ocr, filename)
    }

    pub fn extract_atoms_rtf<'a>(
        &self,
        input: impl Into<FileInput<'a>>,
        ocr: Option<bool>,
        filename: Option<&str>,
    ) -> Result<AtomExtractionResult> {
        self.extract_atoms_as(input, Format::Rtf, ocr, filename)
    }

    pub fn extract_atoms_text<'a>(
        &self,
        input: impl Into<FileInput<'a>>,
        filename: Option<&str>,
    ) -> Result<AtomExtractionResult> {
        self.extract_atoms_as(input, Format::Text, None, filename)
    }

    pub fn extract_atoms_word<'a>(
        &self,
        input: impl Into<FileInput<'a>>,
        filename: Option<&str>,
    ) -> Result<AtomExtractionResult> {
        self.extract_atoms_as(input, Format::Word, None, filename)
    }

    pub fn extract_atoms_xml<'a>(
        &self,
        input: impl Into<FileInput<'a>>,
        filename: Option<&str>,
    ) -> Result<AtomExtractionResult> {
        self.extract_atoms_as(input, Format::Xml, None, filename)
    }
}
