//! Request handlers behind the wasm exports.
//!
//! Every handler is a plain function over serializable request and response
//! types, so native hosts and tests call exactly what JavaScript calls.

use instrument_reports::{
    generate_non_negotiable_notice, Rebuttal, RebuttalConfig, RebuttalGenerator, RebuttalParams,
};
use instrument_rules::{
    identify_coupons, classify_coupon, Annotation, BillFields, Coupon, CouponFinding,
    EvaluationResult, EvaluatorConfig, InstrumentAnnotator, NegotiabilityEvaluator,
};
use instrument_text::{is_blank, NormalizedText};
use instrument_traps::{
    common_trap_patterns, CategoryProfile, ScanConfig, ScanReport, ScanType, TrapScanner,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{CockpitError, CockpitResult};
use crate::ingest::TextExtractor;

/// Maximum accepted document size in bytes.
pub const MAX_DOCUMENT_SIZE: usize = 1_000_000;

/// Engine configuration shared by all handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CockpitSettings {
    pub scan: ScanConfig,
    pub evaluator: EvaluatorConfig,
    pub rebuttal: RebuttalConfig,
}

impl CockpitSettings {
    /// Year used for limitation checks when a request does not carry one.
    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.evaluator = self.evaluator.with_reference_year(year);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScanRequest {
    pub document_text: String,
    pub scan_type: ScanType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidateRequest {
    pub document_text: String,
    /// Overrides the configured reference year for limitation checks.
    pub reference_year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateResponse {
    pub results: Vec<EvaluationResult>,
    pub is_fully_negotiable: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoticeRequest {
    pub results: Vec<EvaluationResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NoticeResponse {
    Generated { notice: String },
    /// Every rule passed; there is nothing to give notice of.
    NotApplicable { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RebuttalRequest {
    pub analysis: ScanReport,
    #[serde(flatten)]
    pub params: RebuttalParams,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestResponse {
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyzeRequest {
    pub document_text: String,
    pub scan_type: ScanType,
    pub reference_year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponReport {
    pub coupon: Coupon,
    pub findings: Vec<CouponFinding>,
}

/// Negotiability, trap scan and annotation of one document, all from a
/// single normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub negotiability: ValidateResponse,
    pub scan: ScanReport,
    pub annotation: Annotation,
    pub bill_fields: BillFields,
    pub coupons: Vec<CouponReport>,
}

pub fn scan(request: &ScanRequest, settings: &CockpitSettings) -> CockpitResult<ScanReport> {
    let text = require_text(&request.document_text)?;
    let report = TrapScanner::new()
        .with_config(settings.scan)
        .scan(text, request.scan_type);

    info!(
        operation = "scan",
        text_len = text.len(),
        risk = report.summary.document_risk_level.as_str(),
        "request handled"
    );
    Ok(report)
}

pub fn validate_negotiability(
    request: &ValidateRequest,
    settings: &CockpitSettings,
) -> CockpitResult<ValidateResponse> {
    let text = require_text(&request.document_text)?;
    let normalized = NormalizedText::from_text(text);
    let response = evaluate(&normalized, request.reference_year, settings);

    info!(
        operation = "validate_negotiability",
        text_len = text.len(),
        fully_negotiable = response.is_fully_negotiable,
        "request handled"
    );
    Ok(response)
}

pub fn generate_notice(request: &NoticeRequest) -> CockpitResult<NoticeResponse> {
    if let Some(bad) = request.results.iter().find(|r| !r.is_consistent()) {
        return Err(CockpitError::Input(format!(
            "result `{}` has passed={} but remedy={:?}",
            bad.rule_id, bad.passed, bad.remedy
        )));
    }

    let response = match generate_non_negotiable_notice(&request.results) {
        Some(notice) => NoticeResponse::Generated { notice },
        None => NoticeResponse::NotApplicable {
            message: "No negotiability failures found.".to_string(),
        },
    };

    info!(
        operation = "generate_non_negotiable_notice",
        results = request.results.len(),
        "request handled"
    );
    Ok(response)
}

pub fn generate_rebuttal(
    request: &RebuttalRequest,
    settings: &CockpitSettings,
) -> CockpitResult<Rebuttal> {
    let rebuttal = RebuttalGenerator::new(settings.rebuttal.clone())
        .with_scan_config(settings.scan)
        .generate(&request.analysis, &request.params)?;

    info!(
        operation = "generate_rebuttal",
        sections = rebuttal.rebuttal_sections.len(),
        "request handled"
    );
    Ok(rebuttal)
}

pub fn analyze(request: &AnalyzeRequest, settings: &CockpitSettings) -> CockpitResult<AnalyzeResponse> {
    let text = require_text(&request.document_text)?;
    let normalized = NormalizedText::from_text(text);

    let negotiability = evaluate(&normalized, request.reference_year, settings);
    let scan = TrapScanner::new()
        .with_config(settings.scan)
        .scan_normalized(&normalized, request.scan_type);
    let annotation = InstrumentAnnotator::default().annotate(&normalized);
    let coupons = identify_coupons(&normalized)
        .into_iter()
        .map(|coupon| CouponReport {
            findings: classify_coupon(&coupon),
            coupon,
        })
        .collect();

    info!(
        operation = "analyze",
        text_len = text.len(),
        fully_negotiable = negotiability.is_fully_negotiable,
        risk = scan.summary.document_risk_level.as_str(),
        contradiction = annotation.contradictions.is_contradiction(),
        "request handled"
    );

    Ok(AnalyzeResponse {
        negotiability,
        scan,
        annotation,
        bill_fields: BillFields::extract(&normalized),
        coupons,
    })
}

/// Run `extractor` over an upload. Failures are
/// [`CockpitError::UpstreamExtraction`], never empty text.
pub fn ingest(
    extractor: &dyn TextExtractor,
    bytes: &[u8],
    media_type: &str,
) -> CockpitResult<IngestResponse> {
    let text = extractor.extract(bytes, media_type)?;

    info!(
        operation = "ingest",
        bytes = bytes.len(),
        text_len = text.len(),
        "request handled"
    );
    Ok(IngestResponse { text })
}

pub fn trap_patterns() -> Vec<CategoryProfile> {
    common_trap_patterns()
}

fn evaluate(
    text: &NormalizedText,
    reference_year: Option<i32>,
    settings: &CockpitSettings,
) -> ValidateResponse {
    let mut config = settings.evaluator;
    if let Some(year) = reference_year {
        config = config.with_reference_year(year);
    }

    let evaluation = NegotiabilityEvaluator::new()
        .with_config(config)
        .evaluate_normalized(text);
    ValidateResponse {
        is_fully_negotiable: evaluation.is_fully_negotiable(),
        results: evaluation.results,
    }
}

fn require_text(text: &str) -> CockpitResult<&str> {
    if is_blank(text) {
        return Err(CockpitError::Input("documentText is empty".to_string()));
    }
    if text.len() > MAX_DOCUMENT_SIZE {
        return Err(CockpitError::InputTooLarge {
            size: text.len(),
            max: MAX_DOCUMENT_SIZE,
        });
    }
    Ok(text)
}
