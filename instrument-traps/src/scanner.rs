//! The trap scanner.

use instrument_text::{context_window, MatchSpan, NormalizedText, SpanDisplay};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    AnalysisSummary, PatternLibrary, ScanConfig, Severity, TrapCategory, TrapClass, TrapPattern,
};

/// Which buckets a scan fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanType {
    #[default]
    Comprehensive,
    TrapsOnly,
    FramingOnly,
}

impl ScanType {
    fn includes(&self, class: TrapClass) -> bool {
        match self {
            ScanType::Comprehensive => true,
            ScanType::TrapsOnly => class == TrapClass::Trap,
            ScanType::FramingOnly => class == TrapClass::Framing,
        }
    }
}

/// One pattern occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrapHit {
    pub trap_type: String,
    pub trap_category: TrapCategory,
    pub severity: Severity,
    /// The matched text, at most `max_context_chars` characters.
    #[serde(default)]
    pub term: String,
    /// Byte span of the whole match in the normalized document.
    #[serde(default)]
    pub span: MatchSpan,
    /// Bounded window of normalized text around the match.
    pub context: String,
    pub description: String,
    /// Description followed by the pattern's filled rebuttal template.
    pub rebuttal: String,
}

/// Output of one scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    #[serde(default)]
    pub institutional_framing: Vec<TrapHit>,
    #[serde(default)]
    pub semantic_traps: Vec<TrapHit>,
    /// Reports coming back from a caller may omit this; consumers recompute
    /// it from the hits.
    #[serde(default)]
    pub summary: AnalysisSummary,
}

impl ScanReport {
    /// Both buckets, framing first.
    pub fn hits(&self) -> impl Iterator<Item = &TrapHit> {
        self.institutional_framing.iter().chain(&self.semantic_traps)
    }

    /// Underline every hit in `text`, labelled with its trap type.
    ///
    /// `text` must be the normalized document this report was produced from.
    pub fn display<'a>(&self, text: &'a NormalizedText) -> SpanDisplay<'a> {
        let mut display = SpanDisplay::new(text.as_str());
        for hit in self.hits() {
            display.include(hit.span, hit.trap_type.clone());
        }
        display
    }
}

/// Scans documents against a pattern library.
///
/// # Example
///
/// ```
/// use instrument_traps::{RiskLevel, ScanType, TrapScanner};
///
/// let report = TrapScanner::new().scan("By using this site you agree to our terms.", ScanType::Comprehensive);
/// assert_eq!(report.semantic_traps.len(), 2);
/// assert_eq!(report.summary.document_risk_level, RiskLevel::HighRiskAdhesion);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TrapScanner<'l> {
    library: &'l PatternLibrary,
    config: ScanConfig,
}

impl Default for TrapScanner<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl TrapScanner<'static> {
    /// Scanner over the built-in library.
    pub fn new() -> Self {
        Self::with_library(PatternLibrary::builtin())
    }
}

impl<'l> TrapScanner<'l> {
    pub fn with_library(library: &'l PatternLibrary) -> Self {
        Self {
            library,
            config: ScanConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn scan(&self, text: &str, scan_type: ScanType) -> ScanReport {
        self.scan_normalized(&NormalizedText::from_text(text), scan_type)
    }

    /// Scan already-normalized text. Empty text yields an empty report.
    pub fn scan_normalized(&self, text: &NormalizedText, scan_type: ScanType) -> ScanReport {
        let mut institutional_framing = Vec::new();
        let mut semantic_traps = Vec::new();

        for pattern in self.library.patterns() {
            let class = pattern.category.class();
            if !scan_type.includes(class) {
                continue;
            }
            let bucket = match class {
                TrapClass::Framing => &mut institutional_framing,
                TrapClass::Trap => &mut semantic_traps,
            };
            bucket.extend(
                pattern
                    .find(text.as_str())
                    .into_iter()
                    .map(|span| self.hit(pattern, text.as_str(), span)),
            );
        }

        institutional_framing.sort_by_key(|hit: &TrapHit| hit.span.start);
        semantic_traps.sort_by_key(|hit: &TrapHit| hit.span.start);

        let summary =
            AnalysisSummary::from_hits(&institutional_framing, &semantic_traps, &self.config);

        debug!(
            ?scan_type,
            framing = summary.total_framing_detected,
            traps = summary.total_traps_detected,
            high = summary.high_severity_count,
            risk = summary.document_risk_level.as_str(),
            "trap scan complete"
        );

        ScanReport {
            institutional_framing,
            semantic_traps,
            summary,
        }
    }

    fn hit(&self, pattern: &TrapPattern, text: &str, span: MatchSpan) -> TrapHit {
        let term: String = span
            .slice(text)
            .chars()
            .take(self.config.max_context_chars)
            .collect();
        TrapHit {
            trap_type: pattern.trap_type.clone(),
            trap_category: pattern.category,
            severity: pattern.severity,
            context: context_window(
                text,
                span,
                self.config.context_radius,
                self.config.max_context_chars,
            ),
            description: pattern.description.clone(),
            rebuttal: pattern.rebuttal_for(&term),
            term,
            span,
        }
    }
}
