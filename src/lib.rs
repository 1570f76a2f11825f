//! lexbrief: summarize and classify legal case documents.
//!
//! Pipeline: PDF/DOCX -> text -> summary + keyword heuristics -> one JSON line.

pub mod analysis;
pub mod extract;
pub mod heuristics;
pub mod logging;
pub mod pipeline;
pub mod settings;
pub mod summarize;
pub mod utils;

pub use analysis::{AnalysisOutput, Analyzer, CaseAnalysis};
pub use pipeline::{run, PipelineError, Report};
pub use settings::Settings;
pub use summarize::{ModelHandle, Summarizer};
