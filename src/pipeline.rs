//! One document in, one JSON line out.
//!
//! Validation and extraction happen before anything expensive: the
//! summarization model is only built once there is text to analyze.

use crate::analysis::{AnalysisOutput, Analyzer};
use crate::extract::{self, DocumentKind};
use crate::utils::is_blank;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Failures reported to the caller as `{"error": ...}` with exit code 1.
///
/// `Display` is the exact message the caller sees.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),
    #[error("Text extraction failed or document is empty.")]
    EmptyDocument,
}

/// What the binary prints and how it exits
#[derive(Debug, PartialEq, Eq)]
pub struct Report {
    pub output: AnalysisOutput,
    pub exit_code: u8,
}

impl Report {
    fn success(output: AnalysisOutput) -> Self {
        Self { output, exit_code: 0 }
    }

    fn failure(error: PipelineError) -> Self {
        Self {
            output: AnalysisOutput::error(error.to_string()),
            exit_code: 1,
        }
    }
}

/// Check that the file exists and has a supported extension
pub fn classify_document(path: &Path) -> Result<DocumentKind, PipelineError> {
    if !path.exists() {
        return Err(PipelineError::FileNotFound(path.to_path_buf()));
    }

    let ext = extract::extension_of(path);
    DocumentKind::from_extension(&ext).ok_or(PipelineError::UnsupportedType(ext))
}

/// Validate the path and pull its text; blank text is an error
pub fn load_document(path: &Path) -> Result<String, PipelineError> {
    let kind = classify_document(path)?;
    info!(path = %path.display(), kind = kind.as_str(), "Extracting document text");

    let text = extract::extract_text(path, kind);
    if is_blank(&text) {
        return Err(PipelineError::EmptyDocument);
    }
    Ok(text)
}

/// Run the whole pipeline for one file.
///
/// `make_analyzer` is only called once the document produced text.
pub fn run<F>(path: &Path, make_analyzer: F) -> Report
where
    F: FnOnce() -> Analyzer,
{
    let text = match load_document(path) {
        Ok(text) => text,
        Err(e) => return Report::failure(e),
    };

    let mut analyzer = make_analyzer();
    Report::success(AnalysisOutput::Analysis(analyzer.analyze(&text)))
}
