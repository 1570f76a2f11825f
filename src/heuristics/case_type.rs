//! Case-type classification by keyword groups

use super::{first_match, KeywordRule};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CaseType {
    Criminal,
    Civil,
    Corporate,
    Property,
    Family,
    Other,
}

impl CaseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseType::Criminal => "Criminal",
            CaseType::Civil => "Civil",
            CaseType::Corporate => "Corporate",
            CaseType::Property => "Property",
            CaseType::Family => "Family",
            CaseType::Other => "Other",
        }
    }
}

/// Checked top to bottom. Criminal first: bail orders routinely mention
/// family or property matters in passing.
pub const CASE_TYPE_RULES: &[KeywordRule<CaseType>] = &[
    KeywordRule::new(CaseType::Criminal, &["criminal", "bail", "fir", "offence"]),
    KeywordRule::new(CaseType::Civil, &["civil petition", "writ petition", "civil suit"]),
    KeywordRule::new(CaseType::Corporate, &["company", "corporate"]),
    KeywordRule::new(CaseType::Property, &["property", "land", "revenue"]),
    KeywordRule::new(CaseType::Family, &["divorce", "custody", "family"]),
];

pub fn predict_case_type(text: &str) -> CaseType {
    first_match(CASE_TYPE_RULES, text, CaseType::Other)
}
