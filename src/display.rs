use std::fmt;

use unicode_width::UnicodeWidthStr;

use crate::MatchSpan;

/// Renders a single line of text with labelled spans underlined beneath it.
///
/// ```text
/// pay to the order of john smith on demand
///            ╰───╯PayableToOrder
///                                ╰───────╯OnDemand
/// ```
///
/// Spans are drawn one per row in `(start, end)` order. Columns are computed
/// from display width, so wide characters stay aligned.
pub struct SpanDisplay<'a> {
    text: &'a str,
    spans: Vec<(MatchSpan, String)>,
}

impl<'a> SpanDisplay<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            spans: Vec::new(),
        }
    }

    /// Add a span to underline. Spans that do not fit the text are ignored
    /// at render time.
    pub fn include(&mut self, span: MatchSpan, label: impl Into<String>) -> &mut Self {
        self.spans.push((span, label.into()));
        self
    }
}

impl<'a> fmt::Display for SpanDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.text)?;

        let mut spans: Vec<&(MatchSpan, String)> = self.spans.iter().collect();
        spans.sort_by_key(|(span, _)| (span.start, span.end));

        for (span, label) in spans {
            let (Some(prefix), Some(covered)) =
                (self.text.get(..span.start), self.text.get(span.start..span.end))
            else {
                continue;
            };

            let padding = UnicodeWidthStr::width(prefix);
            let width = UnicodeWidthStr::width(covered);
            let marker = match width {
                0 | 1 => "╰".to_string(),
                w => format!("╰{}╯", "─".repeat(w - 2)),
            };

            writeln!(f, "{}{}{}", " ".repeat(padding), marker, label)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn underlines_spans_in_order() {
        let text = "pay to bearer on demand";
        let mut display = SpanDisplay::new(text);
        display
            .include(MatchSpan::new(14, 23), "OnDemand")
            .include(MatchSpan::new(7, 13), "Bearer");

        insta::assert_snapshot!(display.to_string(), @r###"
        pay to bearer on demand
               ╰────╯Bearer
                      ╰───────╯OnDemand
        "###);
    }

    #[test]
    fn skips_out_of_range_spans() {
        let mut display = SpanDisplay::new("void");
        display.include(MatchSpan::new(2, 40), "Bad");
        assert_eq!(display.to_string(), "void\n");
    }
}
