//! Rebuttal documents built from a trap scan.
//!
//! Output is a pure function of the scan hits, the parameters and the
//! generator's configuration: no clock, no randomness. The same scan always
//! produces the same document. A report's `summary` is never trusted; counts
//! and risk level are recomputed from its hits.

use instrument_traps::{AnalysisSummary, ScanConfig, ScanReport, TrapCategory, TrapHit};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{RebuttalConfig, RebuttalStrength, ReportError, ReportResult, SignatoryBlock};

pub const SIGNATORY_SECTION_TITLE: &str = "Signatory Block";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RebuttalParams {
    pub include_signatory_block: bool,
    pub signatory_name: Option<String>,
    pub jurisdiction: Option<String>,
}

impl RebuttalParams {
    pub fn signed_by(name: impl Into<String>) -> Self {
        Self {
            include_signatory_block: true,
            signatory_name: Some(name.into()),
            jurisdiction: None,
        }
    }

    pub fn with_jurisdiction(mut self, jurisdiction: impl Into<String>) -> Self {
        self.jurisdiction = Some(jurisdiction.into());
        self
    }

    fn signatory_name(&self) -> Option<&str> {
        self.signatory_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RebuttalSection {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticLineage {
    pub author: String,
    pub basis: String,
    pub authority: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rebuttal {
    /// One section per category present, in category order, then the
    /// signatory block when requested.
    pub rebuttal_sections: Vec<RebuttalSection>,
    pub semantic_lineage: SemanticLineage,
    pub rebuttal_strength: RebuttalStrength,
    pub signatory_block: Option<SignatoryBlock>,
}

impl Rebuttal {
    /// Plain-text rendering: each section as its title line followed by its
    /// content, separated by blank lines.
    pub fn render(&self) -> String {
        self.rebuttal_sections
            .iter()
            .map(|section| format!("{}\n{}", section.title, section.content))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[derive(Debug, Clone, Default)]
pub struct RebuttalGenerator {
    config: RebuttalConfig,
    scan_config: ScanConfig,
}

impl RebuttalGenerator {
    pub fn new(config: RebuttalConfig) -> Self {
        Self {
            config,
            scan_config: ScanConfig::default(),
        }
    }

    /// Thresholds used when recomputing the risk level from the hits.
    pub fn with_scan_config(mut self, scan_config: ScanConfig) -> Self {
        self.scan_config = scan_config;
        self
    }

    pub fn config(&self) -> &RebuttalConfig {
        &self.config
    }

    pub fn generate(&self, report: &ScanReport, params: &RebuttalParams) -> ReportResult<Rebuttal> {
        let signatory_block = if params.include_signatory_block {
            let name = params.signatory_name().ok_or(ReportError::MissingSignatory)?;
            Some(SignatoryBlock::new(
                name,
                params.jurisdiction.as_deref(),
                &self.config,
            ))
        } else {
            None
        };

        let mut rebuttal_sections: Vec<RebuttalSection> = TrapCategory::ALL
            .iter()
            .filter_map(|category| {
                let hits: Vec<&TrapHit> = report
                    .hits()
                    .filter(|hit| hit.trap_category == *category)
                    .collect();
                (!hits.is_empty()).then(|| category_section(*category, &hits))
            })
            .collect();

        if let Some(block) = &signatory_block {
            rebuttal_sections.push(RebuttalSection {
                title: SIGNATORY_SECTION_TITLE.to_string(),
                content: block.to_string(),
            });
        }

        let summary = AnalysisSummary::from_hits(
            &report.institutional_framing,
            &report.semantic_traps,
            &self.scan_config,
        );
        let semantic_lineage = SemanticLineage {
            author: params
                .signatory_name()
                .unwrap_or(self.config.default_author.as_str())
                .to_string(),
            basis: format!(
                "Semantic analysis: {} institutional framing, {} semantic trap(s), risk level {}",
                summary.total_framing_detected,
                summary.total_traps_detected,
                summary.document_risk_level.as_str()
            ),
            authority: self.config.authority.clone(),
        };

        debug!(
            sections = rebuttal_sections.len(),
            signed = signatory_block.is_some(),
            "rebuttal generated"
        );

        Ok(Rebuttal {
            rebuttal_sections,
            semantic_lineage,
            rebuttal_strength: RebuttalStrength::assess(report.hits()),
            signatory_block,
        })
    }
}

/// Generate with the default [`RebuttalConfig`].
pub fn generate_rebuttal(report: &ScanReport, params: &RebuttalParams) -> ReportResult<Rebuttal> {
    RebuttalGenerator::default().generate(report, params)
}

fn category_section(category: TrapCategory, hits: &[&TrapHit]) -> RebuttalSection {
    let terms = distinct(hits.iter().map(|hit| {
        if hit.term.is_empty() {
            hit.trap_type.as_str()
        } else {
            hit.term.as_str()
        }
    }))
        .into_iter()
        .map(|term| format!("'{term}'"))
        .collect::<Vec<_>>()
        .join(", ");

    let mut content = category
        .rebuttal_template()
        .replace("{terms}", &terms)
        .replace("{count}", &hits.len().to_string());

    for rebuttal in distinct(hits.iter().map(|hit| hit.rebuttal.as_str())) {
        content.push_str("\n- ");
        content.push_str(rebuttal);
    }

    RebuttalSection {
        title: category.title().to_string(),
        content,
    }
}

fn distinct<'a>(items: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    for item in items {
        if !seen.contains(&item) {
            seen.push(item);
        }
    }
    seen
}
