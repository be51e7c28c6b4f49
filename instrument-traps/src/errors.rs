//! Error types for pattern compilation and configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// A trap pattern that cannot be used. Libraries skip these with a warning
/// rather than failing the whole load.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PatternMatchError {
    #[error("invalid regex for trap `{trap_type}`: {source}")]
    InvalidRegex {
        trap_type: String,
        #[source]
        source: regex::Error,
    },

    #[error("empty pattern for trap `{trap_type}`")]
    EmptyPattern { trap_type: String },
}

/// Errors reading scan configuration or pattern libraries.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid RON: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("`{name}` must be at least 1")]
    ZeroThreshold { name: &'static str },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
