use instrument_traps::{Severity, TrapHit};
use serde::{Deserialize, Serialize};

/// How forceful a rebuttal the hits call for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RebuttalStrength {
    MinimalRebuttalNeeded,
    BasicRebuttalSufficient,
    ModerateRebuttalRequired,
    StrongRebuttalRequired,
}

impl RebuttalStrength {
    /// Three or more high-severity hits need a strong rebuttal, five or more
    /// hits of any kind a moderate one.
    pub fn assess<'a>(hits: impl IntoIterator<Item = &'a TrapHit>) -> Self {
        let (total, high) = hits.into_iter().fold((0, 0), |(total, high), hit| {
            (total + 1, high + usize::from(hit.severity == Severity::High))
        });

        if high >= 3 {
            RebuttalStrength::StrongRebuttalRequired
        } else if total >= 5 {
            RebuttalStrength::ModerateRebuttalRequired
        } else if total >= 1 {
            RebuttalStrength::BasicRebuttalSufficient
        } else {
            RebuttalStrength::MinimalRebuttalNeeded
        }
    }
}
