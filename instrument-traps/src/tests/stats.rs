use std::collections::BTreeMap;

use crate::{
    ScanType, Severity, TrapCategory, TrapFilter, TrapScanner, TrapStatistics, TrapTypeCount,
};

fn report(text: &str) -> crate::ScanReport {
    TrapScanner::new().scan(text, ScanType::Comprehensive)
}

#[test]
fn statistics_over_a_scan() {
    let report = report("You must pay. You must sign. Every citizen is liable.");
    let stats = TrapStatistics::from_hits(report.hits());

    assert_eq!(stats.total_traps, 4);
    assert_eq!(stats.unique_trap_types, 3);
    assert_eq!(stats.high_risk_count, 1);
    assert_eq!(
        stats.most_common_trap,
        Some(TrapTypeCount {
            trap_type: "must".into(),
            count: 2,
        })
    );
    assert_eq!(
        stats.by_severity,
        BTreeMap::from([(Severity::Low, 2), (Severity::Medium, 1), (Severity::High, 1)])
    );
    assert_eq!(
        stats.by_category,
        BTreeMap::from([
            (TrapCategory::IdentityFraming, 1),
            (TrapCategory::ObligationImposition, 3),
        ])
    );
}

#[test]
fn most_common_tie_goes_to_first_seen() {
    let report = report("You are liable and must pay.");
    let stats = TrapStatistics::from_hits(report.hits());
    assert_eq!(stats.most_common_trap.unwrap().trap_type, "liable");
}

#[test]
fn empty_statistics() {
    let stats = TrapStatistics::from_hits(&[]);
    assert_eq!(stats.total_traps, 0);
    assert_eq!(stats.most_common_trap, None);
    assert!(stats.by_severity.is_empty());
}

#[test]
fn filters() {
    let report = report("You must pay. You must sign. Every citizen is liable.");

    let serious: Vec<_> = TrapFilter::new()
        .with_min_severity(Severity::Medium)
        .apply(report.hits())
        .into_iter()
        .map(|h| h.trap_type.as_str())
        .collect();
    assert_eq!(serious, ["citizen", "liable"]);

    let obligations = TrapFilter::new()
        .with_categories(&[TrapCategory::ObligationImposition])
        .apply(report.hits());
    assert_eq!(obligations.len(), 3);

    assert_eq!(TrapFilter::default().apply(report.hits()).len(), 4);
}
