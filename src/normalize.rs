//! Canonical search form for extracted document text.

use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

use crate::MatchSpan;

/// Characters PDF extraction leaves behind that carry no meaning for matching.
const INVISIBLE: [char; 4] = ['\u{00AD}', '\u{200B}', '\u{200D}', '\u{FEFF}'];

/// Normalized view of a document.
///
/// - `text`: lowercase, whitespace collapsed to single spaces, trimmed
/// - `lines`: non-empty logical lines in the same lowercase form
/// - `source_lines`: the same lines with original casing, for field
///   extraction where values (names, account numbers) must be reported as
///   written
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedText {
    text: String,
    lines: Vec<String>,
    source_lines: Vec<String>,
}

impl NormalizedText {
    /// Normalize raw extracted text.
    ///
    /// Hyphenated wraps (`pay-` at the end of one line, `able` at the start of
    /// the next) are rejoined before anything else so the repaired word is
    /// visible both in the full text and in the line decomposition.
    pub fn from_text(raw: &str) -> Self {
        let source_lines: Vec<String> = repair_wraps(raw)
            .iter()
            .map(|line| collapse_whitespace(&strip_invisible(line)))
            .filter(|line| !line.is_empty())
            .collect();

        let lines = source_lines.iter().map(|line| line.to_lowercase()).collect();
        let text = normalize(&source_lines.join(" "));

        Self {
            text,
            lines,
            source_lines,
        }
    }

    /// The full normalized text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Non-empty lowercase lines in document order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Non-empty lines with original casing, aligned index-for-index with
    /// [`lines`](Self::lines).
    pub fn source_lines(&self) -> &[String] {
        &self.source_lines
    }

    /// True when the document had no visible content.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Length of the normalized text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Word tokens of the normalized text (Unicode word boundaries,
    /// punctuation dropped).
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.text.unicode_words()
    }

    /// True if `word` appears as a whole token.
    pub fn contains_word(&self, word: &str) -> bool {
        let needle = word.to_lowercase();
        self.words().any(|w| w == needle)
    }

    /// True if `phrase` appears at word boundaries.
    pub fn contains_phrase(&self, phrase: &str) -> bool {
        !self.find_phrase(phrase).is_empty()
    }

    /// All occurrences of `phrase` bounded by non-alphanumeric characters (or
    /// the ends of the text). The phrase is normalized the same way the
    /// document was, so callers may pass it in any casing or spacing.
    pub fn find_phrase(&self, phrase: &str) -> Vec<MatchSpan> {
        let needle = normalize(phrase);
        if needle.is_empty() {
            return Vec::new();
        }

        self.text
            .match_indices(needle.as_str())
            .filter(|(start, _)| is_word_boundary(&self.text, *start, *start + needle.len()))
            .map(|(start, _)| MatchSpan::new(start, start + needle.len()))
            .collect()
    }

    /// Index of the first lowercase line containing `needle`.
    pub fn find_line(&self, needle: &str) -> Option<usize> {
        let needle = normalize(needle);
        self.lines.iter().position(|line| line.contains(&needle))
    }
}

/// Lowercase, strip invisible characters and collapse whitespace.
///
/// Idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(raw: &str) -> String {
    collapse_whitespace(&strip_invisible(raw).to_lowercase())
}

/// True for empty or whitespace-only input.
pub fn is_blank(raw: &str) -> bool {
    strip_invisible(raw).trim().is_empty()
}

fn strip_invisible(raw: &str) -> String {
    raw.chars().filter(|c| !INVISIBLE.contains(c)).collect()
}

fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_word_boundary(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.map_or(false, char::is_alphanumeric) && !after.map_or(false, char::is_alphanumeric)
}

/// Join lines broken by extraction mid-word.
///
/// A line ending in `letter-` followed by a line starting with a lowercase
/// letter is treated as one hyphenated word split by layout, not a compound.
fn repair_wraps(raw: &str) -> Vec<String> {
    let mut logical: Vec<String> = Vec::new();
    let mut pending_join = false;

    for line in raw.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            pending_join = false;
            continue;
        }

        let continues = pending_join && trimmed.chars().next().map_or(false, char::is_lowercase);
        match logical.last_mut() {
            Some(previous) if continues => {
                previous.pop();
                previous.push_str(trimmed);
            }
            _ => logical.push(trimmed.to_string()),
        }

        pending_join = logical.last().map_or(false, |l| ends_with_wrap_hyphen(l));
    }

    logical
}

fn ends_with_wrap_hyphen(line: &str) -> bool {
    let mut chars = line.chars().rev();
    chars.next() == Some('-') && chars.next().map_or(false, char::is_alphabetic)
}
