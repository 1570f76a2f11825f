//! Naive "who is winning" guess from judgment vocabulary

use super::parties::PartyPair;

pub const ANALYSIS_NOT_POSSIBLE: &str = "Analysis not possible";
pub const INFRUCTUOUS: &str = "Case became infructuous; no winning party.";
pub const NEUTRAL: &str = "Outcome appears neutral or unclear";

const FAVORABLE_KEYWORDS: &[&str] = &[
    "granted",
    "allowed",
    "acquitted",
    "successful",
    "in favor of",
    "bail application is allowed",
];

const UNFAVORABLE_KEYWORDS: &[&str] = &[
    "dismissed",
    "rejected",
    "denied",
    "convicted",
    "against",
    "failed",
];

/// Number of keywords present anywhere in `lowered`.
///
/// Each keyword counts once however often it occurs. Plain substring test,
/// so "against" also hits inside longer words.
fn keyword_hits(lowered: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|k| lowered.contains(*k)).count()
}

pub fn predict_winning_party(text: &str, parties: &PartyPair) -> String {
    if text.is_empty() || !parties.is_found() {
        return ANALYSIS_NOT_POSSIBLE.to_string();
    }

    let lowered = text.to_lowercase();
    let petitioner_score = keyword_hits(&lowered, FAVORABLE_KEYWORDS);
    let respondent_score = keyword_hits(&lowered, UNFAVORABLE_KEYWORDS);

    if petitioner_score > respondent_score {
        return format!("Appears stronger for {} (Petitioner)", parties.party1);
    }
    if respondent_score > petitioner_score {
        return format!("Appears stronger for {} (Respondent)", parties.party2);
    }
    if lowered.contains("infructuous") {
        return INFRUCTUOUS.to_string();
    }
    NEUTRAL.to_string()
}
