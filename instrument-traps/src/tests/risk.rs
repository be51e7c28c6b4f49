use instrument_text::MatchSpan;
use proptest::prelude::*;

use crate::{AnalysisSummary, RiskLevel, ScanConfig, Severity, TrapCategory, TrapHit};

fn hit(category: TrapCategory, severity: Severity) -> TrapHit {
    TrapHit {
        trap_type: category.as_str().to_string(),
        trap_category: category,
        severity,
        term: String::new(),
        span: MatchSpan::new(0, 0),
        context: String::new(),
        description: String::new(),
        rebuttal: String::new(),
    }
}

fn severity() -> impl Strategy<Value = Severity> {
    prop_oneof![Just(Severity::Low), Just(Severity::Medium), Just(Severity::High)]
}

fn hits(category: TrapCategory) -> impl Strategy<Value = Vec<TrapHit>> {
    prop::collection::vec(severity(), 0..12)
        .prop_map(move |severities| severities.into_iter().map(|s| hit(category, s)).collect())
}

#[test]
fn classification_tiers() {
    let config = ScanConfig::default();
    assert_eq!(RiskLevel::classify(0, 0, &config), RiskLevel::MinimalSemanticIssues);
    assert_eq!(RiskLevel::classify(1, 0, &config), RiskLevel::LowLevelFraming);
    assert_eq!(RiskLevel::classify(2, 0, &config), RiskLevel::LowLevelFraming);
    assert_eq!(RiskLevel::classify(3, 0, &config), RiskLevel::ModerateSemanticWarfare);
    assert_eq!(RiskLevel::classify(7, 0, &config), RiskLevel::ModerateSemanticWarfare);
    assert_eq!(RiskLevel::classify(8, 0, &config), RiskLevel::HighRiskAdhesion);
    assert_eq!(RiskLevel::classify(1, 1, &config), RiskLevel::HighRiskAdhesion);
}

#[test]
fn zero_thresholds_keep_empty_documents_minimal() {
    let config = ScanConfig {
        threshold_high: 0,
        threshold_moderate: 0,
        ..ScanConfig::default()
    };
    assert_eq!(RiskLevel::classify(0, 0, &config), RiskLevel::MinimalSemanticIssues);
    assert_eq!(RiskLevel::classify(1, 0, &config), RiskLevel::HighRiskAdhesion);
}

#[test]
fn risk_level_serde_names() {
    for level in [
        RiskLevel::MinimalSemanticIssues,
        RiskLevel::LowLevelFraming,
        RiskLevel::ModerateSemanticWarfare,
        RiskLevel::HighRiskAdhesion,
    ] {
        assert_eq!(
            serde_json::to_string(&level).unwrap(),
            format!("\"{}\"", level.as_str())
        );
    }
}

proptest! {
    #[test]
    fn counts_recompute_from_hits(
        framing in hits(TrapCategory::IdentityFraming),
        traps in hits(TrapCategory::ConsentPresumption),
    ) {
        let summary = AnalysisSummary::from_hits(&framing, &traps, &ScanConfig::default());
        prop_assert_eq!(summary.total_framing_detected, framing.len());
        prop_assert_eq!(summary.total_traps_detected, traps.len());
        let high = framing.iter().chain(&traps).filter(|h| h.severity == Severity::High).count();
        prop_assert_eq!(summary.high_severity_count, high);
    }

    #[test]
    fn adding_high_severity_hit_never_lowers_risk(
        framing in hits(TrapCategory::IdentityFraming),
        mut traps in hits(TrapCategory::RightsWaiver),
        high in 0usize..20,
        moderate in 0usize..20,
    ) {
        let config = ScanConfig::default().with_thresholds(high, moderate);
        let before = AnalysisSummary::from_hits(&framing, &traps, &config);

        traps.push(hit(TrapCategory::RightsWaiver, Severity::High));
        let after = AnalysisSummary::from_hits(&framing, &traps, &config);

        prop_assert!(after.document_risk_level >= before.document_risk_level);
        prop_assert_eq!(after.document_risk_level, RiskLevel::HighRiskAdhesion);
    }

    #[test]
    fn adding_any_hit_never_lowers_risk(
        mut traps in hits(TrapCategory::ObligationImposition),
        extra in severity(),
    ) {
        let config = ScanConfig::default();
        let before = AnalysisSummary::from_hits(&[], &traps, &config);
        traps.push(hit(TrapCategory::ObligationImposition, extra));
        let after = AnalysisSummary::from_hits(&[], &traps, &config);
        prop_assert!(after.document_risk_level >= before.document_risk_level);
    }
}
