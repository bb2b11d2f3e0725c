//! Error types for the data source adapter.

use thiserror::Error;

/// Result type for data source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors raised while setting up or talking to the data source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Credential material is missing or unusable and cannot be acquired
    /// here. Fatal until the user remediates out-of-band.
    #[error("credentials missing: {0}")]
    CredentialsMissing(String),

    /// A range string is not valid A1 notation.
    #[error("malformed range {0:?}")]
    MalformedRange(String),

    /// Transport, permission, or remote failure during a fetch or refresh.
    #[error("data source error: {0}")]
    DataSource(String),

    /// I/O failure reading or writing credential files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON in a credential or token file.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
