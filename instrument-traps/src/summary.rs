use serde::{Deserialize, Serialize};

use crate::{ScanConfig, Severity, TrapHit};

/// Document-level risk, ordered from least to most severe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    #[default]
    MinimalSemanticIssues,
    LowLevelFraming,
    ModerateSemanticWarfare,
    HighRiskAdhesion,
}

impl RiskLevel {
    /// First matching tier wins: any high-severity hit (or `threshold_high`
    /// hits in total) is high risk.
    pub fn classify(total: usize, high_severity: usize, config: &ScanConfig) -> Self {
        // A zero threshold would make an empty document high risk.
        let threshold_high = config.threshold_high.max(1);
        let threshold_moderate = config.threshold_moderate.max(1);

        if high_severity >= 1 || total >= threshold_high {
            RiskLevel::HighRiskAdhesion
        } else if total >= threshold_moderate {
            RiskLevel::ModerateSemanticWarfare
        } else if total >= 1 {
            RiskLevel::LowLevelFraming
        } else {
            RiskLevel::MinimalSemanticIssues
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::MinimalSemanticIssues => "minimal_semantic_issues",
            RiskLevel::LowLevelFraming => "low_level_framing",
            RiskLevel::ModerateSemanticWarfare => "moderate_semantic_warfare",
            RiskLevel::HighRiskAdhesion => "high_risk_adhesion",
        }
    }
}

/// Counts over one scan. Always derived from the hit lists of the same run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub total_framing_detected: usize,
    pub total_traps_detected: usize,
    /// High-severity hits across both buckets.
    pub high_severity_count: usize,
    pub document_risk_level: RiskLevel,
}

impl AnalysisSummary {
    pub fn from_hits(framing: &[TrapHit], traps: &[TrapHit], config: &ScanConfig) -> Self {
        let high_severity_count = framing
            .iter()
            .chain(traps)
            .filter(|hit| hit.severity == Severity::High)
            .count();
        let total = framing.len() + traps.len();

        Self {
            total_framing_detected: framing.len(),
            total_traps_detected: traps.len(),
            high_severity_count,
            document_risk_level: RiskLevel::classify(total, high_severity_count, config),
        }
    }

    pub fn total(&self) -> usize {
        self.total_framing_detected + self.total_traps_detected
    }
}
