use instrument_rules::EvaluationResult;

pub const NOTICE_HEADER: &str =
    "NOTICE OF NON-NEGOTIABILITY\n\nThis instrument is non-negotiable for the following reasons:\n\n";

/// Notice listing every failed rule as `- label: remedy (citation)`.
///
/// `None` when nothing failed: the instrument is fully negotiable and there
/// is nothing to give notice of.
pub fn generate_non_negotiable_notice(results: &[EvaluationResult]) -> Option<String> {
    let mut failures = results.iter().filter(|r| !r.passed).peekable();
    failures.peek()?;

    let mut notice = String::from(NOTICE_HEADER);
    for failure in failures {
        notice.push_str(&format!(
            "- {}: {} ({})\n",
            failure.label,
            failure.remedy.as_deref().unwrap_or_default(),
            failure.citation
        ));
    }
    Some(notice)
}
