use instrument_text::NormalizedText;

use crate::{BillHeader, ContradictionCheck, InstrumentAnnotator};

fn annotate(input: &str) -> crate::Annotation {
    InstrumentAnnotator::default().annotate(&NormalizedText::from_text(input))
}

#[test]
fn structured_bill_header() {
    let annotation = annotate("TO: Acme Utilities\nFROM: Jane Doe\nAmount Due:  $120.00\nThank you");
    assert_eq!(
        annotation.header,
        BillHeader {
            to: Some("Acme Utilities".into()),
            from: Some("Jane Doe".into()),
            amount_due: Some("$120.00".into()),
        }
    );
    assert_eq!(annotation.contradictions, ContradictionCheck::NoContradiction);
}

#[test]
fn first_header_line_wins() {
    let annotation = annotate("to: First\nTO: Second");
    assert_eq!(annotation.header.to.as_deref(), Some("First"));
    assert_eq!(annotation.header.from, None);
}

#[test]
fn empty_header_value_is_ignored() {
    let annotation = annotate("FROM:\nFROM: Billing Dept");
    assert_eq!(annotation.header.from.as_deref(), Some("Billing Dept"));
}

#[test]
fn keywords_reported_in_list_order() {
    let annotation = annotate("All rights reserved. Paid under protest. Fraud alert.");
    assert_eq!(
        annotation.contradictions,
        ContradictionCheck::ContradictionFound {
            keywords: vec!["FRAUD".into(), "PROTEST".into(), "ALL RIGHTS RESERVED".into()],
        }
    );
}

#[test]
fn keywords_match_whole_words_only() {
    let check = InstrumentAnnotator::default()
        .check_contradictions(&NormalizedText::from_text("Avoidance of protestations"));
    assert!(!check.is_contradiction());
}

#[test]
fn custom_keyword_list() {
    let annotator = InstrumentAnnotator::with_keywords(&["CANCELLED"]);
    let check = annotator.check_contradictions(&NormalizedText::from_text("cancelled - VOID"));
    assert_eq!(
        check,
        ContradictionCheck::ContradictionFound {
            keywords: vec!["CANCELLED".into()],
        }
    );
}

#[test]
fn contradiction_check_serializes_with_status_tag() {
    let check = ContradictionCheck::ContradictionFound {
        keywords: vec!["VOID".into()],
    };
    assert_eq!(
        serde_json::to_string(&check).unwrap(),
        r#"{"status":"CONTRADICTION_FOUND","keywords":["VOID"]}"#
    );
    assert_eq!(
        serde_json::to_string(&ContradictionCheck::NoContradiction).unwrap(),
        r#"{"status":"NO_CONTRADICTION"}"#
    );
}
