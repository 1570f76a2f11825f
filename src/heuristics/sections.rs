//! Cited legal provisions
//!
//! Collects Supreme Court Rules orders, SCMR reporter citations, sections,
//! articles, rules and code citations (PPC, CrPC, CPC, QSO).

use super::NOT_FOUND;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Applied in this order; results keep pattern order, then text order
const SECTION_PATTERNS: &[&str] = &[
    r"Order\s+[A-Z]+\s+Rule\s+\d+\s+of\s+the\s+Supreme\s+Court\s+Rules,\s+\d{4}",
    r"\d{4}\s+SCMR\s+\d+",
    r"Section\s+\d+[\w-]*\b",
    r"Article\s+\d+[\w-]*\b",
    r"Rule\s+\d+[\w-]*\b",
    r"\b\d+[\w-]*\s+(?:PPC|CrPC|CPC|QSO)\b",
];

static SECTION_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    SECTION_PATTERNS
        .iter()
        .map(|p| Regex::new(&format!("(?i){}", p)).unwrap())
        .collect()
});

/// Lists the legal provisions a text cites
pub trait SectionExtractor {
    fn extract(&self, text: &str) -> Vec<String>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RegexSectionExtractor;

impl SectionExtractor for RegexSectionExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        let found = SECTION_REGEXES
            .iter()
            .flat_map(|re| re.find_iter(text).map(|m| m.as_str()));

        let sections = dedup_in_order(found);
        if sections.is_empty() {
            vec![NOT_FOUND.to_string()]
        } else {
            sections
        }
    }
}

/// Drop repeats, keeping each value where it first appeared
fn dedup_in_order<'a>(items: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .filter(|s| seen.insert(*s))
        .map(str::to_string)
        .collect()
}
