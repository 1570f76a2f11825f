// =============================================================================
// Case Heuristics Module
// =============================================================================
//
// Deterministic keyword and pattern classifiers over extracted case text:
// - case_type: Criminal / Civil / Corporate / Property / Family / Other
// - outcome: Favorable / Disposed (Infructuous) / Unfavorable / Settlement / Pending
// - parties: petitioner and respondent names from the cause title
// - sections: cited statutes, articles, rules and reporter citations
// - winning_party: which side the judgment language leans towards
//
// Keyword classifiers are ordered rule tables, first match wins. Order is
// precedence: more specific phrases sit above generic keywords.

pub mod case_type;
pub mod outcome;
pub mod parties;
pub mod sections;
pub mod winning_party;

pub use case_type::{predict_case_type, CaseType};
pub use outcome::{predict_outcome, Outcome};
pub use parties::{PartyExtractor, PartyPair, VersusPartyExtractor};
pub use sections::{RegexSectionExtractor, SectionExtractor};
pub use winning_party::predict_winning_party;

/// Placeholder for anything a pattern extractor could not find
pub const NOT_FOUND: &str = "Not Found";

/// One row of a classifier table: the label applies when any keyword
/// occurs as a substring of the lower-cased text.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule<L> {
    pub label: L,
    pub keywords: &'static [&'static str],
}

impl<L: Copy> KeywordRule<L> {
    pub const fn new(label: L, keywords: &'static [&'static str]) -> Self {
        Self { label, keywords }
    }

    /// `lowered` must already be lower-case
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

/// Evaluate rules in order against `text`; the first hit wins
pub fn first_match<L: Copy>(rules: &[KeywordRule<L>], text: &str, default: L) -> L {
    let lowered = text.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.label)
        .unwrap_or(default)
}
