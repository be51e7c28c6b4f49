//! Fixture-driven scenario testing for the instrument analysis crates.
//!
//! Scenarios live in `fixtures/**/*.toml`. Each holds a document and the
//! rule outcomes, risk level, contradictions, trap types and coupon count it
//! must produce.
//!
//! - [`fixture`] - fixture format and parsing
//! - [`loader`] - loading single files or whole directories
//! - [`runner`] - running scenarios and reporting mismatches
//! - [`errors`] - error types

pub mod errors;
pub mod fixture;
pub mod loader;
pub mod runner;

pub use errors::{SpecError, SpecResult};
pub use fixture::{parse_fixture, Expectations, ScenarioFixture};
pub use loader::{load_all_fixtures, load_fixture};
pub use runner::{check_fixture, format_failure, run_fixture, verify_fixture, Mismatch, ScenarioOutcome};
