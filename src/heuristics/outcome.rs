//! Predicted outcome from judgment wording

use super::{first_match, KeywordRule};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Favorable,
    #[serde(rename = "Disposed (Infructuous)")]
    DisposedInfructuous,
    Unfavorable,
    Settlement,
    Pending,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Favorable => "Favorable",
            Outcome::DisposedInfructuous => "Disposed (Infructuous)",
            Outcome::Unfavorable => "Unfavorable",
            Outcome::Settlement => "Settlement",
            Outcome::Pending => "Pending",
        }
    }
}

/// Specific operative phrases first, so "bail application is allowed" in an
/// order that also mentions an earlier dismissal still reads as favorable.
pub const OUTCOME_RULES: &[KeywordRule<Outcome>] = &[
    KeywordRule::new(
        Outcome::Favorable,
        &["bail application is allowed", "petition is granted"],
    ),
    KeywordRule::new(Outcome::DisposedInfructuous, &["become infructuous"]),
    KeywordRule::new(
        Outcome::Favorable,
        &["acquitted", "allowed", "set aside", "successful"],
    ),
    KeywordRule::new(
        Outcome::Unfavorable,
        &["convicted", "upheld", "denied", "dismissed", "unfavorable"],
    ),
    KeywordRule::new(Outcome::Settlement, &["settlement", "mediation", "compromise"]),
];

pub fn predict_outcome(text: &str) -> Outcome {
    first_match(OUTCOME_RULES, text, Outcome::Pending)
}
