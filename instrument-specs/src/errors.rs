//! Scenario harness errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::Mismatch;

#[derive(Debug, Error)]
pub enum SpecError {
    /// TOML that does not describe a scenario.
    #[error("invalid scenario at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A fixture file that failed to parse, with its location.
    #[error("{}:{line}: {message}", path.display())]
    Fixture {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// The scenario ran but produced something other than it expects.
    #[error("scenario `{fixture}` missed {} expectation(s)", mismatches.len())]
    Expectation {
        fixture: String,
        mismatches: Vec<Mismatch>,
    },
}

impl SpecError {
    /// Expectations that did not hold, empty for load errors.
    pub fn mismatches(&self) -> &[Mismatch] {
        match self {
            SpecError::Expectation { mismatches, .. } => mismatches,
            _ => &[],
        }
    }
}

pub type SpecResult<T> = Result<T, SpecError>;
