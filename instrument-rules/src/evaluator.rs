//! Negotiability evaluator.
//!
//! Runs a rule table against one document. Rules are independent: a rule that
//! cannot decide fails closed with an explanatory remedy and the run carries
//! on, so a table of N rules always yields N results.

use instrument_text::NormalizedText;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::rule::{EvaluationResult, Rule, RuleEvaluationError, RuleInput};
use crate::UCC_ARTICLE_3;

/// Evaluator settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Year to measure the statute of limitations against. `None` leaves
    /// year-dependent rules undecidable for documents that mention a year.
    pub reference_year: Option<i32>,
    pub limitation_years: i32,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            reference_year: None,
            limitation_years: 6,
        }
    }
}

impl EvaluatorConfig {
    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = Some(year);
        self
    }

    pub fn with_limitation_years(mut self, years: i32) -> Self {
        self.limitation_years = years;
        self
    }
}

/// Results of one evaluation run, in rule table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub results: Vec<EvaluationResult>,
}

impl Evaluation {
    /// True when every rule passed. Derived on demand, never stored.
    pub fn is_fully_negotiable(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &EvaluationResult> {
        self.results.iter().filter(|r| !r.passed)
    }

    pub fn result(&self, rule_id: &str) -> Option<&EvaluationResult> {
        self.results.iter().find(|r| r.rule_id == rule_id)
    }
}

/// Runs a rule table over documents.
///
/// # Example
///
/// ```
/// use instrument_rules::{EvaluatorConfig, NegotiabilityEvaluator};
///
/// let evaluator = NegotiabilityEvaluator::new()
///     .with_config(EvaluatorConfig::default().with_reference_year(2025));
/// let evaluation = evaluator.evaluate("Pay to bearer on demand");
/// assert!(evaluation.result("PayableToBearerOrToOrder").unwrap().passed);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NegotiabilityEvaluator<'r> {
    rules: &'r [Rule],
    config: EvaluatorConfig,
}

impl Default for NegotiabilityEvaluator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl NegotiabilityEvaluator<'static> {
    /// Evaluator over [`UCC_ARTICLE_3`].
    pub fn new() -> Self {
        Self::with_rules(UCC_ARTICLE_3)
    }
}

impl<'r> NegotiabilityEvaluator<'r> {
    /// Evaluator over any rule table.
    pub fn with_rules(rules: &'r [Rule]) -> Self {
        Self {
            rules,
            config: EvaluatorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: EvaluatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn rules(&self) -> &'r [Rule] {
        self.rules
    }

    /// Normalize `text` and evaluate it.
    pub fn evaluate(&self, text: &str) -> Evaluation {
        self.evaluate_normalized(&NormalizedText::from_text(text))
    }

    /// Evaluate already-normalized text, so callers running several analyses
    /// over one document normalize it once.
    pub fn evaluate_normalized(&self, text: &NormalizedText) -> Evaluation {
        let input = RuleInput {
            text,
            reference_year: self.config.reference_year,
            limitation_years: self.config.limitation_years,
        };

        let results: Vec<EvaluationResult> = self
            .rules
            .iter()
            .map(|rule| evaluate_rule(rule, &input))
            .collect();

        debug!(
            rules = results.len(),
            failed = results.iter().filter(|r| !r.passed).count(),
            text_len = text.len(),
            "negotiability evaluation complete"
        );

        Evaluation { results }
    }
}

fn evaluate_rule(rule: &Rule, input: &RuleInput<'_>) -> EvaluationResult {
    let outcome = if input.text.is_empty() {
        Err(RuleEvaluationError::EmptyText)
    } else {
        rule.check(input)
    };

    match outcome {
        Ok(true) => EvaluationResult::pass(rule),
        Ok(false) => EvaluationResult::fail(rule, rule.remedy_hint),
        Err(error) => {
            warn!(rule = rule.id, %error, "rule failed closed");
            EvaluationResult::undetermined(rule, &error)
        }
    }
}
