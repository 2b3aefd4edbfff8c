use thiserror::Error;

/// Errors raised while building a weighted corpus.
#[derive(Debug, Error)]
pub enum DeltaTfIdfError {
    /// The lines of one of the two class inputs could not be obtained.
    /// The whole run is aborted; nothing is retried.
    #[error("source `{source_name}` is unavailable: {source}")]
    SourceUnavailable {
        source_name: String,
        #[source]
        source: std::io::Error,
    },
    /// A document term has no IDF when TF and IDF are combined.
    /// Only happens when the phases ran out of order.
    #[error("term `{term}` has no idf value; idf must be computed before weights are combined")]
    InternalConsistency { term: String },
}

/// Errors raised while writing computed weights out.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Cbor(#[from] serde_cbor::Error),
}

/// A TF or IDF scheme name that is not one of the supported ones.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown {kind} scheme `{name}`, expected one of: {expected}")]
pub struct ParseSchemeError {
    pub kind: &'static str,
    pub name: String,
    pub expected: &'static str,
}

pub type Result<T, E = DeltaTfIdfError> = std::result::Result<T, E>;
