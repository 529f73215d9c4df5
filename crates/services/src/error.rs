//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::QuestionSetError;

/// Errors emitted while fetching and validating the question payload.
///
/// This is the only failure the quiz reports to the user; session operations
/// never fail.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadValidationError {
    #[error("Request failed with status {status}. Ensure {resource} is present.")]
    HttpStatus {
        status: u16,
        resource: String,
    },
    #[error("Could not read {resource}. Ensure {resource} is present.")]
    Io {
        resource: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("Response is not valid JSON")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Validation(#[from] QuestionSetError),
}

/// Errors emitted when a question source string cannot be interpreted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SourceError {
    #[error("question source cannot be empty")]
    Empty,
    #[error("unsupported URL scheme: {0}")]
    UnsupportedScheme(String),
    #[error("invalid file URL: {0}")]
    InvalidFileUrl(String),
}
