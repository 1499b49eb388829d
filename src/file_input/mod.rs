//! 文件输入归一化：将路径、字节或流转换为带文件名的字节载荷。
//!
//! File input normalization.
//!
//! Every upload operation accepts a [`FileInput`] and turns it into a
//! [`NormalizedPayload`] (bytes, resolved filename, inferred content type)
//! before any network I/O happens. Invalid input fails here, never on the wire.
//!
//! | Variant | Filename source | Fails when |
//! |---------|-----------------|------------|
//! | `Path` | base name of the path | path missing (`FileNotFound`) or not a regular file |
//! | `Bytes` | `filename` argument | no `filename` given |
//! | `Stream` | `filename` argument, else the stream name | neither is set, or the name is `"file"` |

pub mod content_type;

pub use content_type::{content_type_for, OCTET_STREAM};

use crate::{Error, ErrorContext, Result};
use bytes::Bytes;
use std::fs;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// Placeholder stream name that never counts as a real filename.
const SENTINEL_STREAM_NAME: &str = "file";

/// Readable, rewindable byte source.
pub trait ReadSeek: Read + Seek {}

impl<T: Read + Seek + ?Sized> ReadSeek for T {}

/// A document handed to an upload operation.
pub enum FileInput<'a> {
    /// Local file; read fully during normalization.
    Path(PathBuf),
    /// In-memory document content.
    Bytes(Bytes),
    /// Open stream. It is rewound to the start before reading.
    Stream {
        reader: &'a mut dyn ReadSeek,
        name: Option<String>,
    },
}

impl<'a> FileInput<'a> {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        FileInput::Path(path.into())
    }

    pub fn bytes(content: impl Into<Bytes>) -> Self {
        FileInput::Bytes(content.into())
    }

    /// Stream without a name; a filename must be passed to the operation.
    pub fn stream(reader: &'a mut dyn ReadSeek) -> Self {
        FileInput::Stream { reader, name: None }
    }

    pub fn named_stream(reader: &'a mut dyn ReadSeek, name: impl Into<String>) -> Self {
        FileInput::Stream {
            reader,
            name: Some(name.into()),
        }
    }

    /// Short description of the variant, for logs and messages.
    pub fn kind(&self) -> &'static str {
        match self {
            FileInput::Path(_) => "path",
            FileInput::Bytes(_) => "bytes",
            FileInput::Stream { .. } => "stream",
        }
    }
}

impl std::fmt::Debug for FileInput<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileInput::Path(p) => f.debug_tuple("Path").field(p).finish(),
            FileInput::Bytes(b) => write!(f, "Bytes({} bytes)", b.len()),
            FileInput::Stream { name, .. } => f.debug_struct("Stream").field("name", name).finish(),
        }
    }
}

impl From<PathBuf> for FileInput<'_> {
    fn from(path: PathBuf) -> Self {
        FileInput::Path(path)
    }
}

impl From<&Path> for FileInput<'_> {
    fn from(path: &Path) -> Self {
        FileInput::Path(path.to_path_buf())
    }
}

/// A string is taken as a file path.
impl From<&str> for FileInput<'_> {
    fn from(path: &str) -> Self {
        FileInput::Path(PathBuf::from(path))
    }
}

impl From<String> for FileInput<'_> {
    fn from(path: String) -> Self {
        FileInput::Path(PathBuf::from(path))
    }
}

impl From<Bytes> for FileInput<'_> {
    fn from(content: Bytes) -> Self {
        FileInput::Bytes(content)
    }
}

impl From<Vec<u8>> for FileInput<'_> {
    fn from(content: Vec<u8>) -> Self {
        FileInput::Bytes(Bytes::from(content))
    }
}

impl From<&[u8]> for FileInput<'_> {
    fn from(content: &[u8]) -> Self {
        FileInput::Bytes(Bytes::copy_from_slice(content))
    }
}

impl<const N: usize> From<&[u8; N]> for FileInput<'_> {
    fn from(content: &[u8; N]) -> Self {
        FileInput::Bytes(Bytes::copy_from_slice(content))
    }
}

/// Document bytes ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPayload {
    pub content: Bytes,
    pub filename: String,
    /// Inferred from the filename suffix.
    pub content_type: &'static str,
}

impl NormalizedPayload {
    fn new(content: Bytes, filename: String) -> Self {
        let content_type = content_type_for(&filename);
        Self {
            content,
            filename,
            content_type,
        }
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

fn validation(msg: impl Into<String>, field: &str) -> Error {
    Error::validation_with_context(
        msg,
        ErrorContext::new()
            .with_field_path(field)
            .with_source("file_input"),
    )
}

/// Resolves a [`FileInput`] into bytes plus a filename.
///
/// `filename` is required for `Bytes` and for streams without a usable name.
/// For `Path` inputs it is ignored; the path's base name is used instead.
pub fn normalize(input: FileInput<'_>, filename: Option<&str>) -> Result<NormalizedPayload> {
    let filename = filename.filter(|f| !f.trim().is_empty());

    match input {
        FileInput::Path(path) => {
            if !path.exists() {
                return Err(Error::FileNotFound { path });
            }
            if !path.is_file() {
                return Err(validation(
                    format!("Path is not a file: {}", path.display()),
                    "file_input",
                ));
            }
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .ok_or_else(|| {
                    validation(
                        format!("Path has no file name: {}", path.display()),
                        "file_input",
                    )
                })?;
            // fs::read closes the handle on every exit path.
            let content = fs::read(&path)?;
            Ok(NormalizedPayload::new(Bytes::from(content), name))
        }
        FileInput::Bytes(content) => {
            let name = filename.ok_or_else(|| {
                validation("filename is required when file_input is bytes", "filename")
            })?;
            Ok(NormalizedPayload::new(content, name.to_string()))
        }
        FileInput::Stream { reader, name } => {
            let resolved = match filename {
                Some(f) => f.to_string(),
                None => name
                    .filter(|n| !n.trim().is_empty() && n != SENTINEL_STREAM_NAME)
                    .ok_or_else(|| {
                        validation(
                            "filename is required when file_input is a file-like object without a name",
                            "filename",
                        )
                    })?,
            };
            reader.seek(SeekFrom::Start(0))?;
            let mut content = Vec::new();
            reader.read_to_end(&mut content)?;
            Ok(NormalizedPayload::new(Bytes::from(content), resolved))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn test_path_is_read_and_named_after_base_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.md");
        fs::write(&path, "# Title").unwrap();

        let payload = normalize(FileInput::path(&path), None).unwrap();
        assert_eq!(payload.filename, "notes.md");
        assert_eq!(payload.content, Bytes::from_static(b"# Title"));
        assert_eq!(payload.content_type, "text/markdown");
    }

    #[test]
    fn test_path_ignores_filename_argument() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(b"a,b\n1,2\n").unwrap();

        let payload = normalize(FileInput::path(file.path()), Some("other.pdf")).unwrap();
        assert!(payload.filename.ends_with(".csv"));
        assert_eq!(payload.content_type, "text/csv");
    }

    #[test]
    fn test_missing_path_is_not_found() {
        let err = normalize(FileInput::from("/nonexistent/file.txt"), None).unwrap_err();
        match err {
            Error::FileNotFound { path } => assert_eq!(path, PathBuf::from("/nonexistent/file.txt")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = normalize(FileInput::path(dir.path()), None).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
        assert!(err.to_string().contains("Path is not a file"));
    }

    #[test]
    fn test_bytes_require_filename() {
        let err = normalize(FileInput::from(b"content"), None).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
        assert!(err.to_string().contains("filename is required"));

        let err = normalize(FileInput::from(b"content"), Some("")).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn test_bytes_with_filename() {
        let payload = normalize(FileInput::from(b"content".to_vec()), Some("test.txt")).unwrap();
        assert_eq!(payload.filename, "test.txt");
        assert_eq!(payload.content_type, "text/plain");
        assert_eq!(payload.len(), 7);
    }

    #[test]
    fn test_nameless_stream_requires_filename() {
        let mut cursor = Cursor::new(b"data".to_vec());
        let err = normalize(FileInput::stream(&mut cursor), None).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn test_sentinel_stream_name_is_rejected() {
        let mut cursor = Cursor::new(b"data".to_vec());
        let err = normalize(FileInput::named_stream(&mut cursor, "file"), None).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn test_explicit_filename_beats_stream_name() {
        let mut cursor = Cursor::new(b"data".to_vec());
        let payload =
            normalize(FileInput::named_stream(&mut cursor, "file"), Some("scan.png")).unwrap();
        assert_eq!(payload.filename, "scan.png");
        assert_eq!(payload.content_type, "image/png");
    }

    #[test]
    fn test_stream_is_rewound_before_reading() {
        let mut cursor = Cursor::new(b"hello world".to_vec());
        let mut skip = [0u8; 6];
        cursor.read_exact(&mut skip).unwrap();

        let payload = normalize(FileInput::named_stream(&mut cursor, "greeting.txt"), None).unwrap();
        assert_eq!(payload.content, Bytes::from_static(b"hello world"));
        assert_eq!(payload.filename, "greeting.txt");
    }

    #[test]
    fn test_kind() {
        let mut cursor = Cursor::new(Vec::<u8>::new());
        assert_eq!(FileInput::from("a.pdf").kind(), "path");
        assert_eq!(FileInput::from(Vec::<u8>::new()).kind(), "bytes");
        assert_eq!(FileInput::stream(&mut cursor).kind(), "stream");
    }
}
