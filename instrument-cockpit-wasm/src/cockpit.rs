use instrument_reports::Rebuttal;
use instrument_traps::ScanReport;

use crate::api::{
    self, AnalyzeRequest, AnalyzeResponse, CockpitSettings, NoticeRequest, NoticeResponse,
    RebuttalRequest, ScanRequest, ValidateRequest, ValidateResponse,
};
use crate::errors::CockpitResult;
use crate::ingest::TextExtractor;
use crate::store::{EntryStore, LogEntry, MemoryEntryStore};

/// Request handlers bound to one set of settings, with an optional log store.
///
/// The store only receives entries; nothing read from it affects a result.
/// Keys are `{operation}-{sequence}` with a per-cockpit counter, so the log is
/// reproducible for a given sequence of requests.
#[derive(Debug, Default)]
pub struct Cockpit<S = MemoryEntryStore> {
    settings: CockpitSettings,
    store: Option<S>,
    sequence: u64,
}

impl Cockpit<MemoryEntryStore> {
    pub fn new(settings: CockpitSettings) -> Self {
        Self {
            settings,
            store: None,
            sequence: 0,
        }
    }
}

impl<S: EntryStore> Cockpit<S> {
    pub fn with_store(settings: CockpitSettings, store: S) -> Self {
        Self {
            settings,
            store: Some(store),
            sequence: 0,
        }
    }

    pub fn settings(&self) -> &CockpitSettings {
        &self.settings
    }

    pub fn store(&self) -> Option<&S> {
        self.store.as_ref()
    }

    /// Extract text from an upload. Extraction failures surface as
    /// [`crate::CockpitError::UpstreamExtraction`].
    pub fn ingest(
        &mut self,
        extractor: &dyn TextExtractor,
        bytes: &[u8],
        media_type: &str,
    ) -> CockpitResult<String> {
        let result = api::ingest(extractor, bytes, media_type).map(|response| response.text);
        self.record("ingest", bytes.len(), &result, |text| format!("{} chars", text.len()));
        result
    }

    pub fn scan(&mut self, request: &ScanRequest) -> CockpitResult<ScanReport> {
        let result = api::scan(request, &self.settings);
        self.record("scan", request.document_text.len(), &result, |report| {
            report.summary.document_risk_level.as_str().to_string()
        });
        result
    }

    pub fn validate_negotiability(
        &mut self,
        request: &ValidateRequest,
    ) -> CockpitResult<ValidateResponse> {
        let result = api::validate_negotiability(request, &self.settings);
        self.record("validate_negotiability", request.document_text.len(), &result, |r| {
            format!("{} failed", r.results.iter().filter(|r| !r.passed).count())
        });
        result
    }

    pub fn generate_notice(&mut self, request: &NoticeRequest) -> CockpitResult<NoticeResponse> {
        let result = api::generate_notice(request);
        self.record("generate_non_negotiable_notice", 0, &result, |r| match r {
            NoticeResponse::Generated { .. } => "generated".to_string(),
            NoticeResponse::NotApplicable { .. } => "not_applicable".to_string(),
        });
        result
    }

    pub fn generate_rebuttal(&mut self, request: &RebuttalRequest) -> CockpitResult<Rebuttal> {
        let result = api::generate_rebuttal(request, &self.settings);
        self.record("generate_rebuttal", 0, &result, |r| {
            format!("{} sections", r.rebuttal_sections.len())
        });
        result
    }

    pub fn analyze(&mut self, request: &AnalyzeRequest) -> CockpitResult<AnalyzeResponse> {
        let result = api::analyze(request, &self.settings);
        self.record("analyze", request.document_text.len(), &result, |r| {
            r.scan.summary.document_risk_level.as_str().to_string()
        });
        result
    }

    fn record<T>(
        &mut self,
        operation: &str,
        text_len: usize,
        result: &CockpitResult<T>,
        outcome: impl FnOnce(&T) -> String,
    ) {
        let Some(store) = self.store.as_mut() else {
            return;
        };

        self.sequence += 1;
        let outcome = match result {
            Ok(value) => outcome(value),
            Err(error) => error.kind().to_string(),
        };
        store.put(
            format!("{operation}-{:06}", self.sequence),
            LogEntry {
                operation: operation.to_string(),
                text_len,
                outcome,
            },
        );
    }
}
