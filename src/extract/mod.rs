//! Document text extraction
//!
//! Turns a PDF or DOCX file into plain text. Extractors return an explicit
//! `Result`; `extract_text` is the boundary that logs failures and picks the
//! fallback (whatever text was recovered, possibly nothing).

pub mod docx;
pub mod pdf;

use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised while pulling text out of a document
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF extraction failed: {0}")]
    Pdf(String),
    #[error("Failed to read DOCX container: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("DOCX is missing part {0}")]
    MissingPart(&'static str),
    #[error("Malformed DOCX XML: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("PDF library panicked: {0}")]
    Panic(String),
}

/// What an extractor managed to recover.
///
/// `error` is set when extraction stopped early; `text` still holds any
/// content read before the failure.
#[derive(Debug, Default)]
pub struct Extraction {
    pub text: String,
    pub error: Option<ExtractError>,
}

impl Extraction {
    pub fn complete(text: String) -> Self {
        Self { text, error: None }
    }

    pub fn failed(text: String, error: ExtractError) -> Self {
        Self { text, error: Some(error) }
    }
}

/// Supported document kinds, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    /// `.docx`, and `.doc` which goes through the same reader
    Docx,
}

impl DocumentKind {
    /// Map a lower-cased extension (with leading dot) to a kind
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            ".pdf" => Some(DocumentKind::Pdf),
            ".docx" | ".doc" => Some(DocumentKind::Docx),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Docx => "docx",
        }
    }
}

/// Lower-cased extension with its leading dot, or "" when there is none
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

/// Format detected from magic bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SniffedFormat {
    Pdf,
    Docx,
    /// Legacy OLE compound document (binary .doc)
    Doc,
    Unknown,
}

/// Detect document format from magic bytes
pub fn sniff_format(bytes: &[u8]) -> SniffedFormat {
    if bytes.starts_with(b"%PDF") {
        return SniffedFormat::Pdf;
    }
    // DOCX is a ZIP file starting with PK\x03\x04
    if bytes.starts_with(&[0x50, 0x4B, 0x03, 0x04]) {
        if let Ok(mut archive) = zip::ZipArchive::new(std::io::Cursor::new(bytes)) {
            if archive.by_name(docx::DOCUMENT_PART).is_ok() {
                return SniffedFormat::Docx;
            }
        }
        return SniffedFormat::Unknown;
    }
    if bytes.starts_with(&[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1]) {
        return SniffedFormat::Doc;
    }
    SniffedFormat::Unknown
}

fn sniff_agrees(kind: DocumentKind, sniffed: SniffedFormat) -> bool {
    matches!(
        (kind, sniffed),
        (DocumentKind::Pdf, SniffedFormat::Pdf) | (DocumentKind::Docx, SniffedFormat::Docx)
    )
}

/// Extract text from raw document bytes with the extractor for `kind`
pub fn extract_bytes(kind: DocumentKind, bytes: &[u8]) -> Extraction {
    let sniffed = sniff_format(bytes);
    if !sniff_agrees(kind, sniffed) {
        warn!(
            "Content looks like {:?} but extension says {}; trying the {} reader anyway",
            sniffed,
            kind.as_str(),
            kind.as_str()
        );
    }

    match kind {
        DocumentKind::Pdf => pdf::extract(bytes),
        DocumentKind::Docx => docx::extract(bytes),
    }
}

/// Read a document and return its text, or an empty string on failure.
///
/// Failures are logged to stderr. Text recovered before a failure is kept.
pub fn extract_text(path: &Path, kind: DocumentKind) -> String {
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            warn!("Error extracting text from {}: {}", kind.as_str().to_uppercase(), ExtractError::from(e));
            return String::new();
        }
    };

    let extraction = extract_bytes(kind, &bytes);
    if let Some(e) = &extraction.error {
        warn!("Error extracting text from {}: {}", kind.as_str().to_uppercase(), e);
    }
    debug!(chars = extraction.text.len(), "Extracted {} text", kind.as_str());
    extraction.text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_extension() {
        assert_eq!(DocumentKind::from_extension(".pdf"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_extension(".docx"), Some(DocumentKind::Docx));
        assert_eq!(DocumentKind::from_extension(".doc"), Some(DocumentKind::Docx));
        assert_eq!(DocumentKind::from_extension(".txt"), None);
        assert_eq!(DocumentKind::from_extension(""), None);
    }

    #[test]
    fn test_extension_of_lowercases_and_keeps_dot() {
        assert_eq!(extension_of(Path::new("/tmp/Judgment.PDF")), ".pdf");
        assert_eq!(extension_of(Path::new("case.tar.gz")), ".gz");
        assert_eq!(extension_of(Path::new("README")), "");
        assert_eq!(extension_of(Path::new(".hidden")), "");
    }

    #[test]
    fn test_sniff_format() {
        assert_eq!(sniff_format(b"%PDF-1.7\n"), SniffedFormat::Pdf);
        assert_eq!(
            sniff_format(&[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1, 0x00]),
            SniffedFormat::Doc
        );
        assert_eq!(sniff_format(b"hello"), SniffedFormat::Unknown);
        // Bare ZIP signature without a readable archive behind it
        assert_eq!(sniff_format(&[0x50, 0x4B, 0x03, 0x04, 0x00]), SniffedFormat::Unknown);
    }

    #[test]
    fn test_sniff_docx() {
        let bytes = docx::tests::docx_bytes("<w:body><w:p><w:r><w:t>x</w:t></w:r></w:p></w:body>");
        assert_eq!(sniff_format(&bytes), SniffedFormat::Docx);
    }

    #[test]
    fn test_extract_text_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let text = extract_text(&dir.path().join("gone.pdf"), DocumentKind::Pdf);
        assert_eq!(text, "");
    }

    #[test]
    fn test_extract_text_garbage_pdf_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        std::fs::write(&path, b"this is not a pdf").unwrap();
        assert_eq!(extract_text(&path, DocumentKind::Pdf), "");
    }

    #[test]
    fn test_extract_text_docx_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("order.docx");
        let bytes = docx::tests::docx_bytes(
            "<w:body><w:p><w:r><w:t>Bail granted.</w:t></w:r></w:p></w:body>",
        );
        std::fs::write(&path, bytes).unwrap();
        assert_eq!(extract_text(&path, DocumentKind::Docx), "Bail granted.\n");
    }
}
