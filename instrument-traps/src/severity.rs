use serde::{Deserialize, Serialize};

/// How strongly a pattern frames or binds the reader.
///
/// Ordered `Low < Medium < High` so filters can compare against a minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

/// Which bucket of a scan report a hit lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrapClass {
    /// Language that casts the reader into an institutional role.
    Framing,
    /// Language that imposes obligations, jurisdiction or consent.
    Trap,
}
