//! Party names from the cause title
//!
//! Judgments open with a block like
//!
//! ```text
//! Muhammad Aslam
//! ...Petitioner(s)
//! Versus
//! The State through P.G. Punjab
//! ...Respondent(s)
//! ```
//!
//! Only the first such block in the document is used.

use super::NOT_FOUND;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static VERSUS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?si)([\w\s\x1c-\x1f,./\r\n]+?)[\s\x1c-\x1f]*\.{3}Petitioner\(s\)[\s\x1c-\x1f]*Versus[\s\x1c-\x1f]*([\w\s\x1c-\x1f,./\r\n]+?)[\s\x1c-\x1f]*\.{3}Respondent\(s\)",
    )
    .unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartyPair {
    pub party1: String,
    pub party2: String,
}

impl PartyPair {
    pub fn not_found() -> Self {
        Self {
            party1: NOT_FOUND.to_string(),
            party2: NOT_FOUND.to_string(),
        }
    }

    pub fn is_found(&self) -> bool {
        self.party1 != NOT_FOUND
    }
}

/// Pulls the petitioner/respondent pair out of case text
pub trait PartyExtractor {
    fn extract(&self, text: &str) -> PartyPair;
}

/// Matches the "...Petitioner(s) Versus ...Respondent(s)" cause title
#[derive(Debug, Default, Clone, Copy)]
pub struct VersusPartyExtractor;

impl PartyExtractor for VersusPartyExtractor {
    fn extract(&self, text: &str) -> PartyPair {
        match VERSUS_REGEX.captures(text) {
            Some(caps) => PartyPair {
                party1: collapse_lines(caps.get(1).map_or("", |m| m.as_str())),
                party2: collapse_lines(caps.get(2).map_or("", |m| m.as_str())),
            },
            None => PartyPair::not_found(),
        }
    }
}

/// Line terminators found in extracted text; `\r\n` counts as one
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Unicode whitespace plus the ASCII information separators
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Trim, then join the block's lines with single spaces
fn collapse_lines(block: &str) -> String {
    let block = block.trim_matches(is_space).replace("\r\n", "\n");
    block
        .split(LINE_BREAKS)
        .collect::<Vec<_>>()
        .join(" ")
        .trim_matches(is_space)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> PartyPair {
        VersusPartyExtractor.extract(text)
    }

    #[test]
    fn test_simple_cause_title() {
        let parties = extract("Alice Corp\n...Petitioner(s)\nVersus\nBob Ltd\n...Respondent(s)");
        assert_eq!(parties.party1, "Alice Corp");
        assert_eq!(parties.party2, "Bob Ltd");
        assert!(parties.is_found());
    }

    #[test]
    fn test_multiline_names_are_collapsed() {
        let text = "Muhammad Aslam and\nanother\n...Petitioner(s)\nVersus\nThe State through\nP.G. Punjab\n...Respondent(s)";
        let parties = extract(text);
        assert_eq!(parties.party1, "Muhammad Aslam and another");
        assert_eq!(parties.party2, "The State through P.G. Punjab");
    }

    #[test]
    fn test_case_insensitive_markers() {
        let parties = extract("Zahid Khan ...PETITIONER(S) VERSUS Federation of Pakistan ...respondent(s)");
        assert_eq!(parties.party1, "Zahid Khan");
        assert_eq!(parties.party2, "Federation of Pakistan");
    }

    #[test]
    fn test_crlf_line_breaks() {
        let parties = extract("Alice Corp\r\n...Petitioner(s)\r\nVersus\r\nBob\r\nLtd\r\n...Respondent(s)");
        assert_eq!(parties.party1, "Alice Corp");
        assert_eq!(parties.party2, "Bob Ltd");
    }

    #[test]
    fn test_lone_carriage_returns() {
        let parties = extract("Alice\rCorp\r...Petitioner(s)\rVersus\rBob\rLtd\r...Respondent(s)");
        assert_eq!(parties.party1, "Alice Corp");
        assert_eq!(parties.party2, "Bob Ltd");
    }

    #[test]
    fn test_form_feeds_and_unicode_separators() {
        let text = "Alice\x0cCorp\n...Petitioner(s)\nVersus\nBob\u{2028}Ltd\u{85}Pvt\n...Respondent(s)";
        let parties = extract(text);
        assert_eq!(parties.party1, "Alice Corp");
        assert_eq!(parties.party2, "Bob Ltd Pvt");
    }

    #[test]
    fn test_information_separators_split_lines() {
        let text = "Alice\x1dCorp\x1e\n...Petitioner(s)\nVersus\x1c\nBob\x0bLtd\n...Respondent(s)";
        let parties = extract(text);
        assert_eq!(parties.party1, "Alice Corp");
        assert_eq!(parties.party2, "Bob Ltd");
    }

    #[test]
    fn test_collapse_lines_keeps_blank_lines_as_spaces() {
        assert_eq!(collapse_lines("  A\r\n\r\nB\u{2029} "), "A  B");
    }

    #[test]
    fn test_only_first_match_is_used() {
        let text = "A\n...Petitioner(s)\nVersus\nB\n...Respondent(s)\n\nC\n...Petitioner(s)\nVersus\nD\n...Respondent(s)";
        let parties = extract(text);
        assert_eq!(parties.party1, "A");
        assert_eq!(parties.party2, "B");
    }

    #[test]
    fn test_no_cause_title() {
        let parties = extract("ORDER SHEET\nThe matter is adjourned.");
        assert_eq!(parties, PartyPair::not_found());
        assert!(!parties.is_found());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(PartyPair::not_found()).unwrap();
        assert_eq!(json, serde_json::json!({"party1": "Not Found", "party2": "Not Found"}));
    }
}
