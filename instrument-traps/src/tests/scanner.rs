use instrument_text::NormalizedText;

use crate::{
    PatternLibrary, RiskLevel, ScanConfig, ScanType, Severity, TrapCategory, TrapScanner,
};

fn scan(text: &str) -> crate::ScanReport {
    TrapScanner::new().scan(text, ScanType::Comprehensive)
}

#[test]
fn empty_document_is_minimal() {
    for text in ["", "   \n\t  "] {
        let report = scan(text);
        assert!(report.institutional_framing.is_empty());
        assert!(report.semantic_traps.is_empty());
        assert_eq!(report.summary.high_severity_count, 0);
        assert_eq!(
            report.summary.document_risk_level,
            RiskLevel::MinimalSemanticIssues
        );
    }
}

#[test]
fn single_high_severity_trap_is_adhesion() {
    let report = scan("These terms are subject to change.");
    assert!(report.institutional_framing.is_empty());
    assert_eq!(report.semantic_traps.len(), 1);

    let hit = &report.semantic_traps[0];
    assert_eq!(hit.trap_type, "subject_to");
    assert_eq!(hit.trap_category, TrapCategory::JurisdictionPresumption);
    assert_eq!(hit.severity, Severity::High);
    assert_eq!(hit.term, "subject to");
    assert_eq!(report.summary.document_risk_level, RiskLevel::HighRiskAdhesion);
}

#[test]
fn risk_tiers_by_count() {
    assert_eq!(
        scan("Notice to the resident.").summary.document_risk_level,
        RiskLevel::LowLevelFraming
    );
    assert_eq!(
        scan("You must pay. Payment is required. You are responsible.")
            .summary
            .document_risk_level,
        RiskLevel::ModerateSemanticWarfare
    );
}

#[test]
fn thresholds_come_from_config() {
    let report = TrapScanner::new()
        .with_config(ScanConfig::default().with_thresholds(2, 1))
        .scan("You must pay.", ScanType::Comprehensive);
    assert_eq!(
        report.summary.document_risk_level,
        RiskLevel::ModerateSemanticWarfare
    );
}

#[test]
fn scan_type_empties_the_other_bucket() {
    let text = "Every citizen is liable.";

    let full = TrapScanner::new().scan(text, ScanType::Comprehensive);
    assert_eq!(full.institutional_framing.len(), 1);
    assert_eq!(full.semantic_traps.len(), 1);
    assert_eq!(full.summary.high_severity_count, 1);

    let traps = TrapScanner::new().scan(text, ScanType::TrapsOnly);
    assert!(traps.institutional_framing.is_empty());
    assert_eq!(traps.summary.total_framing_detected, 0);
    assert_eq!(traps.summary.high_severity_count, 0);
    assert_eq!(traps.summary.document_risk_level, RiskLevel::LowLevelFraming);

    let framing = TrapScanner::new().scan(text, ScanType::FramingOnly);
    assert!(framing.semantic_traps.is_empty());
    assert_eq!(framing.summary.total_traps_detected, 0);
    assert_eq!(framing.summary.document_risk_level, RiskLevel::HighRiskAdhesion);
}

#[test]
fn hit_carries_description_and_rebuttal() {
    let report = scan("Every citizen is liable.");
    let hit = &report.institutional_framing[0];
    assert_eq!(hit.context, "every citizen is liable.");
    assert_eq!(
        hit.rebuttal,
        "Presumes a citizenship status that carries statutory obligations. I do not accept the status of 'citizen' as assigned."
    );
    assert!(hit.rebuttal.starts_with(&hit.description));
}

#[test]
fn context_is_bounded() {
    let text = format!("{} you agree {}", "word ".repeat(500), "more ".repeat(500));
    let report = TrapScanner::new()
        .with_config(ScanConfig::default().with_context_radius(400))
        .scan(&text, ScanType::Comprehensive);
    assert_eq!(report.semantic_traps.len(), 1);
    let context = &report.semantic_traps[0].context;
    assert_eq!(context.chars().count(), 200);

    let narrow = TrapScanner::new().scan(&text, ScanType::Comprehensive);
    assert!(narrow.semantic_traps[0].context.chars().count() <= 2 * 60 + "you agree".len());
    assert!(narrow.semantic_traps[0].context.contains("you agree"));
}

#[test]
fn every_occurrence_is_a_hit_in_document_order() {
    let report = scan("You must sign. Liable parties must pay.");
    let types: Vec<_> = report.semantic_traps.iter().map(|h| h.trap_type.as_str()).collect();
    assert_eq!(types, ["must", "liable", "must"]);
}

#[test]
fn custom_library() {
    let library = PatternLibrary::from_ron_str(
        r#"[(
            category: consent_presumption,
            trap_type: "click_wrap",
            severity: medium,
            pattern: r"\bclick(?:ing)? (?:accept|agree)\b",
            description: "Treats a click as a signature.",
            rebuttal_template: "'{term}' is not a signature.",
        )]"#,
    )
    .unwrap();

    let report = TrapScanner::with_library(&library).scan("By clicking Accept", ScanType::Comprehensive);
    assert_eq!(report.semantic_traps.len(), 1);
    assert_eq!(
        report.semantic_traps[0].rebuttal,
        "Treats a click as a signature. 'clicking accept' is not a signature."
    );
    assert_eq!(report.summary.document_risk_level, RiskLevel::LowLevelFraming);
}

#[test]
fn report_serializes_camel_case() {
    let json = serde_json::to_value(scan("You agree.")).unwrap();
    assert_eq!(json["semanticTraps"][0]["trapType"], "you_agree");
    assert_eq!(json["semanticTraps"][0]["trapCategory"], "consent_presumption");
    assert_eq!(json["semanticTraps"][0]["severity"], "high");
    assert_eq!(json["summary"]["documentRiskLevel"], "high_risk_adhesion");
    assert_eq!(json["institutionalFraming"], serde_json::json!([]));
}

#[test]
fn display_underlines_hits() {
    let text = NormalizedText::from_text("Every citizen is liable.");
    let report = TrapScanner::new().scan_normalized(&text, ScanType::Comprehensive);

    insta::assert_snapshot!(report.display(&text).to_string(), @r###"
    every citizen is liable.
          ╰─────╯citizen
                     ╰────╯liable
    "###);
}

#[test]
fn greedy_custom_pattern_stays_bounded() {
    let library = PatternLibrary::from_specs([crate::TrapPatternSpec {
        category: TrapCategory::ConsentPresumption,
        trap_type: "agree_tail".into(),
        severity: Severity::Medium,
        pattern: r"\byou agree\b.*".into(),
        description: "Greedy.".into(),
        rebuttal_template: "Rebut '{term}'.".into(),
    }]);
    let document = format!("you agree {}", "x".repeat(500_000));
    let report = TrapScanner::with_library(&library).scan(&document, ScanType::Comprehensive);

    let hit = &report.semantic_traps[0];
    let max = ScanConfig::default().max_context_chars;
    assert_eq!(hit.span.len(), document.len());
    assert_eq!(hit.term.chars().count(), max);
    assert!(hit.term.starts_with("you agree x"));
    assert!(hit.context.chars().count() <= max);
    assert!(hit.rebuttal.chars().count() <= "Greedy. Rebut ''.".len() + max);
}
