use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// A signatory block was requested without a name to sign it with.
    #[error("signatory block requested but no signatory name was given")]
    MissingSignatory,
}

pub type ReportResult<T> = Result<T, ReportError>;
