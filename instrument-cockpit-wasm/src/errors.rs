//! Error classes surfaced to cockpit callers.

use instrument_reports::ReportError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ingest::ExtractionError;

/// Everything a cockpit request can fail with.
///
/// Extraction failures are kept apart from input errors so the host can tell
/// "the upload could not be read" from "the document is empty".
#[derive(Debug, Error)]
pub enum CockpitError {
    #[error("invalid input: {0}")]
    Input(String),

    #[error("document too large: {size} bytes (maximum {max})")]
    InputTooLarge { size: usize, max: usize },

    #[error("text extraction failed: {0}")]
    UpstreamExtraction(#[from] ExtractionError),

    #[error("report generation failed: {0}")]
    Report(#[from] ReportError),

    #[error("failed to serialize response: {0}")]
    Serialization(String),
}

impl CockpitError {
    /// Stable machine-readable code.
    pub fn kind(&self) -> &'static str {
        match self {
            CockpitError::Input(_) => "invalid_input",
            CockpitError::InputTooLarge { .. } => "input_too_large",
            CockpitError::UpstreamExtraction(_) => "upstream_extraction",
            CockpitError::Report(_) => "report_failed",
            CockpitError::Serialization(_) => "internal_error",
        }
    }
}

pub type CockpitResult<T> = Result<T, CockpitError>;

/// Error payload returned across the wasm boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&CockpitError> for ErrorResponse {
    fn from(error: &CockpitError) -> Self {
        let details = match error {
            CockpitError::InputTooLarge { size, max } => Some(serde_json::json!({
                "size": size,
                "max_size": max,
            })),
            _ => None,
        };

        Self {
            error: ErrorDetail {
                code: error.kind().to_string(),
                message: error.to_string(),
                details,
            },
        }
    }
}
