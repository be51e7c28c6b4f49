use instrument_traps::{ScanType, TrapScanner};

use crate::{
    generate_rebuttal, RebuttalConfig, RebuttalGenerator, RebuttalParams, RebuttalStrength,
    ReportError, SIGNATORY_SECTION_TITLE,
};

fn scan(text: &str) -> instrument_traps::ScanReport {
    TrapScanner::new().scan(text, ScanType::Comprehensive)
}

#[test]
fn full_rebuttal_document() {
    let report = scan("Every citizen is liable. You agree to binding arbitration.");
    let rebuttal = generate_rebuttal(&report, &RebuttalParams::signed_by("Jane Doe")).unwrap();

    assert_eq!(rebuttal.rebuttal_strength, RebuttalStrength::StrongRebuttalRequired);
    assert_eq!(rebuttal.semantic_lineage.author, "Jane Doe");
    assert_eq!(
        rebuttal.semantic_lineage.basis,
        "Semantic analysis: 1 institutional framing, 3 semantic trap(s), risk level high_risk_adhesion"
    );
    assert_eq!(rebuttal.semantic_lineage.authority, "UCC 1-207; UCC 1-308");

    insta::assert_snapshot!(rebuttal.render(), @r###"
    Rebuttal of Identity Framing
    The document applies 1 identity construct(s): 'citizen'. Each is rebutted; no presumption of status attaches without express agreement.
    - Presumes a citizenship status that carries statutory obligations. I do not accept the status of 'citizen' as assigned.

    Rebuttal of Imposed Obligations
    The document imposes 1 obligation(s) without consent: 'liable'. Proof of a knowing agreement to each obligation is required.
    - Asserts liability without establishing consent. I am not 'liable' absent proof of a knowing agreement.

    Rebuttal of Implied Consent
    The document implies consent 1 time(s): 'you agree'. All implied consent and adhesion terms are expressly rebutted.
    - Declares agreement on the reader's behalf. The statement 'you agree' is rebutted; no agreement was given.

    Rebuttal of Rights Waivers
    The document seeks 1 waiver(s) of rights: 'binding arbitration'. No right or remedy is waived; all are reserved.
    - Removes disputes from the courts by pre-agreement. 'binding arbitration' is not agreed; access to the courts is reserved.

    Signatory Block
    Signed: Jane Doe
    Capacity: Principal Author
    Jurisdiction: Common Law
    WITHOUT PREJUDICE UCC 1-207
    All Rights Reserved
    "###);
}

#[test]
fn repeated_terms_are_counted_once_in_the_term_list() {
    let report = scan("You must pay. You must sign. Payment is required.");
    let rebuttal = generate_rebuttal(&report, &RebuttalParams::default()).unwrap();

    assert_eq!(rebuttal.rebuttal_sections.len(), 1);
    let section = &rebuttal.rebuttal_sections[0];
    assert_eq!(section.title, "Rebuttal of Imposed Obligations");
    assert!(section
        .content
        .starts_with("The document imposes 3 obligation(s) without consent: 'must', 'required'."));
    assert_eq!(section.content.matches("\n- ").count(), 2);
    assert_eq!(rebuttal.rebuttal_strength, RebuttalStrength::BasicRebuttalSufficient);
}

#[test]
fn no_hits_means_no_category_sections() {
    let report = scan("Thank you for your payment.");
    let unsigned = generate_rebuttal(&report, &RebuttalParams::default()).unwrap();
    assert!(unsigned.rebuttal_sections.is_empty());
    assert_eq!(unsigned.semantic_lineage.author, "Principal Author");
    assert_eq!(unsigned.rebuttal_strength, RebuttalStrength::MinimalRebuttalNeeded);

    let signed = generate_rebuttal(
        &report,
        &RebuttalParams::signed_by("Jane Doe").with_jurisdiction("Republic of Texas"),
    )
    .unwrap();
    assert_eq!(signed.rebuttal_sections.len(), 1);
    assert_eq!(signed.rebuttal_sections[0].title, SIGNATORY_SECTION_TITLE);
    assert!(signed.rebuttal_sections[0]
        .content
        .contains("Jurisdiction: Republic of Texas"));
}

#[test]
fn signatory_block_requires_a_name() {
    let report = scan("You agree.");
    let params = RebuttalParams {
        include_signatory_block: true,
        signatory_name: Some("   ".into()),
        jurisdiction: None,
    };
    assert_eq!(
        generate_rebuttal(&report, &params),
        Err(ReportError::MissingSignatory)
    );
}

#[test]
fn deterministic_output() {
    let report = scan("By using this service you are deemed to have consented.");
    let params = RebuttalParams::signed_by("Jane Doe");
    assert_eq!(
        generate_rebuttal(&report, &params),
        generate_rebuttal(&report, &params)
    );
}

#[test]
fn custom_config_wording() {
    let generator = RebuttalGenerator::new(
        RebuttalConfig::default()
            .with_authority("Common law")
            .with_reservation("Without prejudice"),
    );
    let rebuttal = generator
        .generate(&scan("You agree."), &RebuttalParams::signed_by("J. Doe"))
        .unwrap();
    assert_eq!(rebuttal.semantic_lineage.authority, "Common law");
    let block = rebuttal.signatory_block.unwrap();
    assert_eq!(block.reservation, "Without prejudice");
    assert_eq!(block.capacity, generator.config().capacity);
}

#[test]
fn params_deserialize_from_camel_case() {
    let params: RebuttalParams = serde_json::from_str(
        r#"{"includeSignatoryBlock":true,"signatoryName":"Jane Doe"}"#,
    )
    .unwrap();
    assert_eq!(params, RebuttalParams::signed_by("Jane Doe"));
}

#[test]
fn lineage_counts_come_from_the_hits() {
    let mut report = scan("You agree.");
    report.summary.total_traps_detected = 99;
    report.summary.document_risk_level = instrument_traps::RiskLevel::MinimalSemanticIssues;

    let rebuttal = generate_rebuttal(&report, &RebuttalParams::default()).unwrap();
    assert_eq!(
        rebuttal.semantic_lineage.basis,
        "Semantic analysis: 0 institutional framing, 1 semantic trap(s), risk level high_risk_adhesion"
    );
}

#[test]
fn lineage_uses_generator_thresholds() {
    let report = scan("Every resident must pay.");
    let rebuttal = RebuttalGenerator::default()
        .with_scan_config(instrument_traps::ScanConfig::default().with_thresholds(2, 1))
        .generate(&report, &RebuttalParams::default())
        .unwrap();
    assert!(rebuttal
        .semantic_lineage
        .basis
        .ends_with("1 institutional framing, 1 semantic trap(s), risk level high_risk_adhesion"));
}

#[test]
fn hits_without_term_or_summary() {
    let report: instrument_traps::ScanReport = serde_json::from_value(serde_json::json!({
        "institutionalFraming": [],
        "semanticTraps": [{
            "trapType": "you_agree",
            "trapCategory": "consent_presumption",
            "severity": "high",
            "context": "you agree.",
            "description": "Declares agreement on the reader's behalf.",
            "rebuttal": "Declares agreement on the reader's behalf. No agreement was given."
        }]
    }))
    .unwrap();

    let rebuttal = generate_rebuttal(&report, &RebuttalParams::default()).unwrap();
    assert_eq!(rebuttal.rebuttal_sections.len(), 1);
    assert!(rebuttal.rebuttal_sections[0].content.contains("'you_agree'"));
    assert!(rebuttal.semantic_lineage.basis.contains("1 semantic trap(s)"));
    assert_eq!(rebuttal.rebuttal_strength, RebuttalStrength::BasicRebuttalSufficient);
}
