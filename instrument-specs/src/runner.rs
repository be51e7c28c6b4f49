//! Runs scenarios through the evaluator, scanner and annotator and compares
//! the outcome with the fixture's expectations.

use std::fmt;
use std::fmt::Write;

use instrument_rules::{
    identify_coupons, Annotation, ContradictionCheck, Coupon, Evaluation, EvaluatorConfig,
    InstrumentAnnotator, NegotiabilityEvaluator,
};
use instrument_text::NormalizedText;
use instrument_traps::{ScanReport, ScanType, TrapScanner};

use crate::{ScenarioFixture, SpecError, SpecResult};

/// Everything one scenario produced, from a single normalization.
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub evaluation: Evaluation,
    pub scan: ScanReport,
    pub annotation: Annotation,
    pub coupons: Vec<Coupon>,
}

/// One expectation that did not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub field: &'static str,
    pub expected: String,
    pub actual: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected {}, got {}",
            self.field, self.expected, self.actual
        )
    }
}

pub fn run_fixture(fixture: &ScenarioFixture) -> ScenarioOutcome {
    let text = NormalizedText::from_text(&fixture.text);

    let mut config = EvaluatorConfig::default();
    if let Some(year) = fixture.reference_year {
        config = config.with_reference_year(year);
    }

    ScenarioOutcome {
        evaluation: NegotiabilityEvaluator::new()
            .with_config(config)
            .evaluate_normalized(&text),
        scan: TrapScanner::new().scan_normalized(&text, ScanType::Comprehensive),
        annotation: InstrumentAnnotator::default().annotate(&text),
        coupons: identify_coupons(&text),
    }
}

/// Compare an outcome with the fixture's expectations.
pub fn check_fixture(fixture: &ScenarioFixture, outcome: &ScenarioOutcome) -> Vec<Mismatch> {
    let expect = &fixture.expect;
    let mut mismatches = Vec::new();

    for (field, ids, want_pass) in [("passed", &expect.passed, true), ("failed", &expect.failed, false)] {
        for id in ids {
            let actual = match outcome.evaluation.result(id) {
                Some(result) if result.passed == want_pass => continue,
                Some(result) if result.passed => "passed".to_string(),
                Some(_) => "failed".to_string(),
                None => "no such rule".to_string(),
            };
            mismatches.push(Mismatch {
                field,
                expected: format!("{id} {field}"),
                actual,
            });
        }
    }

    if let Some(expected) = expect.fully_negotiable {
        let actual = outcome.evaluation.is_fully_negotiable();
        if actual != expected {
            mismatches.push(Mismatch {
                field: "fully_negotiable",
                expected: expected.to_string(),
                actual: actual.to_string(),
            });
        }
    }

    if let Some(expected) = expect.risk_level {
        let actual = outcome.scan.summary.document_risk_level;
        if actual != expected {
            mismatches.push(Mismatch {
                field: "risk_level",
                expected: expected.as_str().to_string(),
                actual: actual.as_str().to_string(),
            });
        }
    }

    if let Some(expected) = &expect.contradictions {
        let actual: &[String] = match &outcome.annotation.contradictions {
            ContradictionCheck::NoContradiction => &[],
            ContradictionCheck::ContradictionFound { keywords } => keywords,
        };
        if actual != expected.as_slice() {
            mismatches.push(Mismatch {
                field: "contradictions",
                expected: format!("{expected:?}"),
                actual: format!("{actual:?}"),
            });
        }
    }

    if let Some(expected) = &expect.trap_types {
        let mut expected = expected.clone();
        let mut actual: Vec<String> = outcome
            .scan
            .hits()
            .map(|hit| hit.trap_type.clone())
            .collect();
        expected.sort();
        actual.sort();
        if actual != expected {
            mismatches.push(Mismatch {
                field: "trap_types",
                expected: format!("{expected:?}"),
                actual: format!("{actual:?}"),
            });
        }
    }

    if let Some(expected) = expect.coupons {
        if outcome.coupons.len() != expected {
            mismatches.push(Mismatch {
                field: "coupons",
                expected: expected.to_string(),
                actual: outcome.coupons.len().to_string(),
            });
        }
    }

    mismatches
}

/// Run and check a fixture; every failed expectation is kept in the error.
pub fn verify_fixture(name: &str, fixture: &ScenarioFixture) -> SpecResult<ScenarioOutcome> {
    let outcome = run_fixture(fixture);
    let mismatches = check_fixture(fixture, &outcome);
    if mismatches.is_empty() {
        Ok(outcome)
    } else {
        Err(SpecError::Expectation {
            fixture: name.to_string(),
            mismatches,
        })
    }
}

/// Multi-line failure report for one fixture.
pub fn format_failure(name: &str, fixture: &ScenarioFixture, mismatches: &[Mismatch]) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "FAIL: {name}");
    if let Some(title) = &fixture.title {
        let _ = writeln!(output, "  {title}");
    }
    for mismatch in mismatches {
        let _ = writeln!(output, "  \u{2717} {mismatch}");
    }
    output
}
