//! Text foundation for financial instrument analysis.
//!
//! Documents reach the engine as plain text already extracted from PDFs or
//! scans, usually carrying layout artifacts: broken line wraps, hyphenated
//! words split across lines, runs of whitespace, invisible characters. This
//! crate turns that text into a canonical search form shared by every
//! analysis layer:
//!
//! - [`NormalizedText`] - lowercase, whitespace-collapsed full text plus a
//!   line-oriented decomposition and word tokens
//! - [`normalize`] - the idempotent full-string transform
//! - [`MatchSpan`] / [`context_window`] - byte spans into normalized text and
//!   bounded snippets around them
//! - [`SpanDisplay`] - underline rendering of labelled spans, used by tests and
//!   annotation views
//!
//! ## Example
//!
//! ```
//! use instrument_text::NormalizedText;
//!
//! let text = NormalizedText::from_text("PAY TO THE ORDER OF\n  John   Smith");
//! assert_eq!(text.as_str(), "pay to the order of john smith");
//! assert_eq!(text.lines().len(), 2);
//! assert!(text.contains_phrase("order of john"));
//! ```

mod context;
mod display;
mod normalize;

pub use context::{context_window, MatchSpan};
pub use display::SpanDisplay;
pub use normalize::{is_blank, normalize, NormalizedText};
