//! Rule and result types.

use std::fmt;

use instrument_text::NormalizedText;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Remedy attached to a rule that could not decide.
pub const UNDETERMINED_REMEDY: &str = "unable to determine — manual review required";

/// Everything a predicate may look at. Predicates never read the clock or
/// any other ambient state; the reference year is passed in.
#[derive(Debug, Clone, Copy)]
pub struct RuleInput<'a> {
    pub text: &'a NormalizedText,
    /// Year the instrument is evaluated against (statute of limitations).
    pub reference_year: Option<i32>,
    /// Years after which an action on the instrument is time-barred.
    pub limitation_years: i32,
}

/// Why a predicate could not decide.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleEvaluationError {
    /// Nothing to evaluate against.
    #[error("document text is empty")]
    EmptyText,
    /// A date-shaped token that is not a calendar date.
    #[error("malformed date `{0}`")]
    MalformedDate(String),
    /// The rule needs context the caller did not supply.
    #[error("missing {0}")]
    MissingReference(&'static str),
    /// Catch-all for rules that found conflicting evidence.
    #[error("{0}")]
    Undetermined(String),
}

/// Signature shared by every rule predicate.
pub type Predicate = fn(&RuleInput<'_>) -> Result<bool, RuleEvaluationError>;

/// A named, independent negotiability test.
///
/// Rules are plain data: a table is a slice of them and the evaluator is
/// generic over whichever slice it is handed.
#[derive(Clone, Copy)]
pub struct Rule {
    pub id: &'static str,
    pub label: &'static str,
    pub citation: &'static str,
    /// Shown when the rule fails.
    pub remedy_hint: &'static str,
    pub predicate: Predicate,
}

impl Rule {
    /// Run the predicate.
    pub fn check(&self, input: &RuleInput<'_>) -> Result<bool, RuleEvaluationError> {
        (self.predicate)(input)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("citation", &self.citation)
            .finish()
    }
}

/// Outcome of one rule in one evaluation run.
///
/// `remedy` is `Some` exactly when `passed` is false; build results through
/// [`EvaluationResult::pass`] and [`EvaluationResult::fail`] to keep it so.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub rule_id: String,
    pub label: String,
    pub passed: bool,
    pub citation: String,
    pub remedy: Option<String>,
}

impl EvaluationResult {
    pub fn pass(rule: &Rule) -> Self {
        Self {
            rule_id: rule.id.to_string(),
            label: rule.label.to_string(),
            passed: true,
            citation: rule.citation.to_string(),
            remedy: None,
        }
    }

    pub fn fail(rule: &Rule, remedy: impl Into<String>) -> Self {
        Self {
            rule_id: rule.id.to_string(),
            label: rule.label.to_string(),
            passed: false,
            citation: rule.citation.to_string(),
            remedy: Some(remedy.into()),
        }
    }

    /// Fail-closed result for a rule that could not decide.
    pub fn undetermined(rule: &Rule, error: &RuleEvaluationError) -> Self {
        Self::fail(rule, format!("{} ({})", UNDETERMINED_REMEDY, error))
    }

    /// True when `remedy` presence matches `passed`. Results arriving from
    /// outside the engine (deserialized) should be checked before use.
    pub fn is_consistent(&self) -> bool {
        self.passed == self.remedy.is_none()
    }
}
