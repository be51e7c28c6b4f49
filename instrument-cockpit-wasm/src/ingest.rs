//! Document ingestion boundary.
//!
//! Turning an upload into text happens outside the engine (the host runs PDF
//! or OCR extraction asynchronously and hands over the result). This module
//! is the seam where that result enters: one call per document, and any
//! failure is an [`ExtractionError`] rather than empty text.

use std::str::Utf8Error;

use instrument_text::is_blank;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("unsupported media type `{0}`")]
    UnsupportedMediaType(String),

    #[error("document is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] Utf8Error),

    #[error("extraction produced no text")]
    Empty,
}

/// Produces plain text from an uploaded document.
pub trait TextExtractor {
    fn extract(&self, bytes: &[u8], media_type: &str) -> Result<String, ExtractionError>;
}

/// Accepts `text/plain` uploads as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8], media_type: &str) -> Result<String, ExtractionError> {
        let essence = media_type.split(';').next().unwrap_or_default().trim();
        if !essence.eq_ignore_ascii_case("text/plain") {
            return Err(ExtractionError::UnsupportedMediaType(media_type.to_string()));
        }

        let text = std::str::from_utf8(bytes)?;
        if is_blank(text) {
            return Err(ExtractionError::Empty);
        }
        Ok(text.to_string())
    }
}

/// Text that an external extractor already produced.
///
/// Lets a host that did its own extraction pass the result through the same
/// checks as any other extractor.
#[derive(Debug, Clone)]
pub struct PreExtracted(pub Result<String, ExtractionError>);

impl TextExtractor for PreExtracted {
    fn extract(&self, _bytes: &[u8], _media_type: &str) -> Result<String, ExtractionError> {
        match &self.0 {
            Ok(text) if is_blank(text) => Err(ExtractionError::Empty),
            other => other.clone(),
        }
    }
}
