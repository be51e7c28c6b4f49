use serde::{de::DeserializeOwned, Serialize};
use wasm_bindgen::prelude::*;

mod api;
mod cockpit;
mod errors;
mod ingest;
mod store;

pub use api::{
    analyze, generate_notice, generate_rebuttal, ingest, scan, trap_patterns,
    validate_negotiability, AnalyzeRequest, AnalyzeResponse, CockpitSettings, CouponReport,
    IngestResponse, NoticeRequest, NoticeResponse, RebuttalRequest, ScanRequest,
    ValidateRequest, ValidateResponse, MAX_DOCUMENT_SIZE,
};
pub use cockpit::Cockpit;
pub use errors::{CockpitError, CockpitResult, ErrorDetail, ErrorResponse};
pub use ingest::{ExtractionError, PlainTextExtractor, PreExtracted, TextExtractor};
pub use store::{EntryStore, LogEntry, MemoryEntryStore, DEFAULT_STORE_CAPACITY};

// Set up panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Exported handlers measure limitation periods against the browser's
/// current year unless the request names one. The engine itself never reads
/// a clock.
fn settings() -> CockpitSettings {
    let year = js_sys::Date::new_0().get_full_year();
    CockpitSettings::default().with_reference_year(year as i32)
}

// ============================================================================
// ANALYSIS API
// ============================================================================

/// Scan a document for institutional framing and semantic traps.
///
/// Takes `{ documentText, scanType }` and returns
/// `{ institutionalFraming, semanticTraps, summary }`, or `{ error }`.
#[wasm_bindgen(js_name = scanDocument)]
pub fn scan_document(request: JsValue) -> JsValue {
    handle(request, |req: ScanRequest| {
        api::scan(&req, &settings())
    })
}

/// Run the negotiability rule table.
///
/// Takes `{ documentText, referenceYear? }` and returns
/// `{ results, isFullyNegotiable }`.
#[wasm_bindgen(js_name = validateNegotiability)]
pub fn validate_negotiability_js(request: JsValue) -> JsValue {
    handle(request, |req: ValidateRequest| {
        api::validate_negotiability(&req, &settings())
    })
}

/// Build a non-negotiability notice from evaluation results.
///
/// Returns `{ status: "generated", notice }` or
/// `{ status: "not_applicable", message }` when every rule passed.
#[wasm_bindgen(js_name = generateNonNegotiableNotice)]
pub fn generate_non_negotiable_notice_js(request: JsValue) -> JsValue {
    handle(request, |req: NoticeRequest| api::generate_notice(&req))
}

/// Build a rebuttal from a previous scan result plus signatory parameters.
#[wasm_bindgen(js_name = generateRebuttal)]
pub fn generate_rebuttal_js(request: JsValue) -> JsValue {
    handle(request, |req: RebuttalRequest| {
        api::generate_rebuttal(&req, &settings())
    })
}

/// Negotiability, trap scan, contradiction check, bill fields and coupons in
/// one pass.
#[wasm_bindgen(js_name = analyzeDocument)]
pub fn analyze_document(request: JsValue) -> JsValue {
    handle(request, |req: AnalyzeRequest| {
        api::analyze(&req, &settings())
    })
}

/// Reference catalogue of trap categories.
#[wasm_bindgen(js_name = commonTrapPatterns)]
pub fn common_trap_patterns_js() -> JsValue {
    init();
    respond(Ok(api::trap_patterns()))
}

/// Check text the host extracted from an upload before analysis.
///
/// Returns `{ text }` or `{ error }` with code `upstream_extraction`.
#[wasm_bindgen(js_name = ingestPlainText)]
pub fn ingest_plain_text(bytes: &[u8], media_type: &str) -> JsValue {
    init();
    respond(api::ingest(&PlainTextExtractor, bytes, media_type))
}

fn handle<Req, Resp>(request: JsValue, handler: impl FnOnce(Req) -> CockpitResult<Resp>) -> JsValue
where
    Req: DeserializeOwned,
    Resp: Serialize,
{
    init();
    let parsed = serde_wasm_bindgen::from_value::<Req>(request)
        .map_err(|e| CockpitError::Input(format!("malformed request: {}", e)));
    respond(parsed.and_then(handler))
}

fn respond<T: Serialize>(result: CockpitResult<T>) -> JsValue {
    match result {
        Ok(value) => to_js(&value).unwrap_or_else(|e| {
            error_value(&CockpitError::Serialization(e.to_string()))
        }),
        Err(error) => error_value(&error),
    }
}

fn error_value(error: &CockpitError) -> JsValue {
    to_js(&ErrorResponse::from(error)).unwrap_or(JsValue::NULL)
}

// Maps become plain objects, so `serde_json::Value` details read as
// `result.error.details.size` in JavaScript.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}
