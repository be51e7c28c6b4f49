//! Instrument annotation: contradiction markers and structured bill headers.
//!
//! Contradiction markers are words an issuer or holder stamps on an
//! instrument to say it must not be honoured as written. Any of them turns a
//! document into a contradiction case regardless of what the rule table says.

use instrument_text::NormalizedText;
use serde::{Deserialize, Serialize};

/// Default contradiction markers, reported in this casing.
pub const CONTRADICTION_KEYWORDS: [&str; 4] = ["VOID", "FRAUD", "PROTEST", "ALL RIGHTS RESERVED"];

/// Outcome of a contradiction scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContradictionCheck {
    NoContradiction,
    ContradictionFound {
        /// Markers found, in keyword-list order.
        keywords: Vec<String>,
    },
}

impl ContradictionCheck {
    pub fn is_contradiction(&self) -> bool {
        matches!(self, ContradictionCheck::ContradictionFound { .. })
    }
}

/// `TO:` / `FROM:` / `AMOUNT DUE:` header lines of a structured bill.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillHeader {
    pub to: Option<String>,
    pub from: Option<String>,
    pub amount_due: Option<String>,
}

/// Full annotation of one instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub header: BillHeader,
    pub contradictions: ContradictionCheck,
}

/// Annotates instruments with contradiction markers and bill headers.
#[derive(Debug, Clone)]
pub struct InstrumentAnnotator {
    contradiction_keywords: Vec<String>,
}

impl Default for InstrumentAnnotator {
    fn default() -> Self {
        Self::with_keywords(&CONTRADICTION_KEYWORDS)
    }
}

impl InstrumentAnnotator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Annotator with a custom marker list. Markers match case-insensitively
    /// at word boundaries.
    pub fn with_keywords(keywords: &[&str]) -> Self {
        Self {
            contradiction_keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    pub fn annotate(&self, text: &NormalizedText) -> Annotation {
        Annotation {
            header: parse_header(text),
            contradictions: self.check_contradictions(text),
        }
    }

    pub fn check_contradictions(&self, text: &NormalizedText) -> ContradictionCheck {
        let keywords: Vec<&str> = self.contradiction_keywords.iter().map(String::as_str).collect();
        let found = find_contradictions(text, &keywords);
        if found.is_empty() {
            ContradictionCheck::NoContradiction
        } else {
            ContradictionCheck::ContradictionFound { keywords: found }
        }
    }
}

pub(crate) fn find_contradictions(text: &NormalizedText, keywords: &[&str]) -> Vec<String> {
    keywords
        .iter()
        .filter(|keyword| text.contains_phrase(keyword))
        .map(|keyword| keyword.to_string())
        .collect()
}

fn parse_header(text: &NormalizedText) -> BillHeader {
    let mut header = BillHeader::default();

    for line in text.source_lines() {
        if header.to.is_none() {
            header.to = header_value(line, "TO:");
        }
        if header.from.is_none() {
            header.from = header_value(line, "FROM:");
        }
        if header.amount_due.is_none() {
            header.amount_due = header_value(line, "AMOUNT DUE:");
        }
    }

    header
}

fn header_value(line: &str, label: &str) -> Option<String> {
    let prefix = line.get(..label.len())?;
    if !prefix.eq_ignore_ascii_case(label) {
        return None;
    }
    let value = line[label.len()..].trim();
    (!value.is_empty()).then(|| value.to_string())
}
