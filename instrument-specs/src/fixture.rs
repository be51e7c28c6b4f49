//! Scenario fixtures: a document plus what analysing it must produce.
//!
//! ```toml
//! title = "Void check"
//! reference_year = 2025
//! text = """
//! THIS CHECK IS VOID
//! Pay to bearer
//! """
//!
//! [expect]
//! failed = ["ContradictoryTermsOfInstrument"]
//! contradictions = ["VOID"]
//! risk_level = "minimal_semantic_issues"
//! ```
//!
//! Every field under `[expect]` is optional; omitted fields are not checked.

use instrument_traps::RiskLevel;
use serde::Deserialize;

use crate::{SpecError, SpecResult};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioFixture {
    #[serde(default)]
    pub title: Option<String>,
    pub text: String,
    /// Year the statute of limitations is measured against.
    #[serde(default)]
    pub reference_year: Option<i32>,
    #[serde(default)]
    pub expect: Expectations,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Expectations {
    /// Rule ids that must pass.
    pub passed: Vec<String>,
    /// Rule ids that must fail.
    pub failed: Vec<String>,
    pub fully_negotiable: Option<bool>,
    pub risk_level: Option<RiskLevel>,
    /// Contradiction keywords in detection order; empty means none.
    pub contradictions: Option<Vec<String>>,
    /// Trap types of every hit, compared without regard to order.
    pub trap_types: Option<Vec<String>>,
    pub coupons: Option<usize>,
}

/// Parse a fixture from TOML source.
pub fn parse_fixture(source: &str) -> SpecResult<ScenarioFixture> {
    toml::from_str(source).map_err(|e| SpecError::Parse {
        line: e
            .span()
            .map(|span| line_of(source, span.start))
            .unwrap_or(0),
        message: e.message().to_string(),
    })
}

/// 1-based line number of a byte offset.
fn line_of(source: &str, offset: usize) -> usize {
    let offset = offset.min(source.len());
    source.as_bytes()[..offset]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
        + 1
}
