//! Statistics and filters over trap hits.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Severity, TrapCategory, TrapHit};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrapTypeCount {
    pub trap_type: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrapStatistics {
    pub total_traps: usize,
    pub unique_trap_types: usize,
    pub high_risk_count: usize,
    /// Most frequent trap type; ties go to the type seen first.
    pub most_common_trap: Option<TrapTypeCount>,
    pub by_severity: BTreeMap<Severity, usize>,
    pub by_category: BTreeMap<TrapCategory, usize>,
}

impl TrapStatistics {
    pub fn from_hits<'a>(hits: impl IntoIterator<Item = &'a TrapHit>) -> Self {
        let mut type_counts: Vec<TrapTypeCount> = Vec::new();
        let mut by_severity = BTreeMap::new();
        let mut by_category = BTreeMap::new();
        let mut total_traps = 0;

        for hit in hits {
            total_traps += 1;
            *by_severity.entry(hit.severity).or_insert(0) += 1;
            *by_category.entry(hit.trap_category).or_insert(0) += 1;

            match type_counts.iter_mut().find(|c| c.trap_type == hit.trap_type) {
                Some(entry) => entry.count += 1,
                None => type_counts.push(TrapTypeCount {
                    trap_type: hit.trap_type.clone(),
                    count: 1,
                }),
            }
        }

        let unique_trap_types = type_counts.len();
        let most_common_trap = type_counts
            .into_iter()
            .fold(None, |best: Option<TrapTypeCount>, candidate| match best {
                Some(best) if best.count >= candidate.count => Some(best),
                _ => Some(candidate),
            });

        Self {
            total_traps,
            unique_trap_types,
            high_risk_count: by_severity.get(&Severity::High).copied().unwrap_or(0),
            most_common_trap,
            by_severity,
            by_category,
        }
    }
}

/// Selects hits by category and minimum severity.
///
/// An empty category list admits every category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrapFilter {
    pub categories: Vec<TrapCategory>,
    pub min_severity: Option<Severity>,
}

impl TrapFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(mut self, categories: &[TrapCategory]) -> Self {
        self.categories = categories.to_vec();
        self
    }

    pub fn with_min_severity(mut self, severity: Severity) -> Self {
        self.min_severity = Some(severity);
        self
    }

    pub fn matches(&self, hit: &TrapHit) -> bool {
        (self.categories.is_empty() || self.categories.contains(&hit.trap_category))
            && self.min_severity.map_or(true, |min| hit.severity >= min)
    }

    pub fn apply<'a>(&self, hits: impl IntoIterator<Item = &'a TrapHit>) -> Vec<&'a TrapHit> {
        hits.into_iter().filter(|hit| self.matches(hit)).collect()
    }
}
