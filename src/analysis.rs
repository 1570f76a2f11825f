//! Result assembly and JSON output
//!
//! The caller reads exactly one JSON line from stdout: either the full
//! analysis or `{"error": "..."}`. The line is written with the
//! `", "` / `": "` separators and `\uXXXX` escaping of DEL and non-ASCII text that
//! existing consumers of this output were built against.

use crate::heuristics::{
    predict_case_type, predict_outcome, predict_winning_party, CaseType, Outcome, PartyExtractor,
    PartyPair, RegexSectionExtractor, SectionExtractor, VersusPartyExtractor,
};
use crate::summarize::Summarizer;
use serde::Serialize;
use std::io;

/// Everything inferred about one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseAnalysis {
    pub summary: String,
    pub predicted_case_type: CaseType,
    pub predicted_outcome: Outcome,
    pub parties: PartyPair,
    pub sections: Vec<String>,
    pub winning_party_prediction: String,
}

/// The single object written to stdout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnalysisOutput {
    Analysis(CaseAnalysis),
    Error { error: String },
}

impl AnalysisOutput {
    pub fn error(message: impl Into<String>) -> Self {
        AnalysisOutput::Error { error: message.into() }
    }

    /// Serialize to one line of JSON
    pub fn to_json_line(&self) -> String {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedAsciiFormatter);
        // Only strings, enums and plain structs: serialization cannot fail
        if self.serialize(&mut ser).is_err() {
            return r#"{"error": "Failed to serialize analysis result."}"#.to_string();
        }
        // The formatter only ever emits ASCII
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// Runs every heuristic over one document's text
pub struct Analyzer {
    summarizer: Summarizer,
    parties: Box<dyn PartyExtractor>,
    sections: Box<dyn SectionExtractor>,
}

impl Analyzer {
    pub fn new(summarizer: Summarizer) -> Self {
        Self {
            summarizer,
            parties: Box::new(VersusPartyExtractor),
            sections: Box::new(RegexSectionExtractor),
        }
    }

    pub fn with_extractors(
        summarizer: Summarizer,
        parties: Box<dyn PartyExtractor>,
        sections: Box<dyn SectionExtractor>,
    ) -> Self {
        Self {
            summarizer,
            parties,
            sections,
        }
    }

    /// Party extraction runs once; its result feeds the winning-party guess
    pub fn analyze(&mut self, text: &str) -> CaseAnalysis {
        let parties = self.parties.extract(text);
        CaseAnalysis {
            summary: self.summarizer.summarize(text),
            predicted_case_type: predict_case_type(text),
            predicted_outcome: predict_outcome(text),
            sections: self.sections.extract(text),
            winning_party_prediction: predict_winning_party(text, &parties),
            parties,
        }
    }
}

/// Compact JSON with `", "` and `": "` separators; DEL and non-ASCII as `\uXXXX`
struct SpacedAsciiFormatter;

impl serde_json::ser::Formatter for SpacedAsciiFormatter {
    fn begin_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W: ?Sized + io::Write>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()> {
        if fragment.bytes().all(|b| b.is_ascii() && b != 0x7f) {
            return writer.write_all(fragment.as_bytes());
        }
        let mut units = [0u16; 2];
        for c in fragment.chars() {
            if c.is_ascii() && c != '\x7f' {
                writer.write_all(&[c as u8])?;
            } else {
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}
