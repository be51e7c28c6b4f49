//! Derived artifacts for instrument analyses.
//!
//! - [`generate_non_negotiable_notice`] - notice listing failed negotiability
//!   rules, `None` for a fully negotiable instrument
//! - [`RebuttalGenerator`] - per-category rebuttal sections from a trap scan,
//!   an optional [`SignatoryBlock`] and the [`SemanticLineage`] record
//! - [`RebuttalStrength`] - how forceful a rebuttal the hits call for

mod config;
mod errors;
mod notice;
mod rebuttal;
mod signatory;
mod strength;

pub use config::RebuttalConfig;
pub use errors::{ReportError, ReportResult};
pub use notice::{generate_non_negotiable_notice, NOTICE_HEADER};
pub use rebuttal::{
    generate_rebuttal, Rebuttal, RebuttalGenerator, RebuttalParams, RebuttalSection,
    SemanticLineage, SIGNATORY_SECTION_TITLE,
};
pub use signatory::SignatoryBlock;
pub use strength::RebuttalStrength;
