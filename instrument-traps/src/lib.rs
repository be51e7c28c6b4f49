//! Semantic trap and institutional framing scanner.
//!
//! ## Scanning
//!
//! - [`TrapScanner`] - runs a [`PatternLibrary`] over a document and splits
//!   the hits into institutional framing and semantic traps
//! - [`AnalysisSummary`] / [`RiskLevel`] - counts and document risk
//!   classification, thresholds from [`ScanConfig`]
//!
//! ## Patterns
//!
//! - [`PatternLibrary::builtin`] - the shipped library
//! - [`PatternLibrary::from_ron_str`] - custom libraries of
//!   [`TrapPatternSpec`]; malformed entries are skipped with a warning
//! - [`common_trap_patterns`] - per-category reference catalogue
//!
//! ## Analysis
//!
//! - [`TrapStatistics`] - grouping by severity and category, most common trap
//! - [`TrapFilter`] - category and minimum severity selection

mod category;
mod config;
mod errors;
mod library;
mod scanner;
mod severity;
mod stats;
mod summary;

pub use category::{common_trap_patterns, CategoryProfile, TrapCategory};
pub use config::ScanConfig;
pub use errors::{ConfigError, ConfigResult, PatternMatchError};
pub use library::{builtin_specs, PatternLibrary, TrapPattern, TrapPatternSpec};
pub use scanner::{ScanReport, ScanType, TrapHit, TrapScanner};
pub use severity::{Severity, TrapClass};
pub use stats::{TrapFilter, TrapStatistics, TrapTypeCount};
pub use summary::{AnalysisSummary, RiskLevel};

#[cfg(test)]
mod tests {
    mod risk;
    mod scanner;
    mod stats;
}
