//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use study_core::model::SessionResultError;

/// Errors emitted by quiz sessions and the session workflow.
///
/// All of these are fail-fast: a rejected operation leaves the session
/// unchanged.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no subject selected")]
    NoSubjectSelected,

    #[error("no questions available for the selected subjects")]
    NoQuestionsAvailable,

    #[error("option index {given} out of range for a question with {len} options")]
    InvalidOptionIndex { given: usize, len: usize },

    #[error("question position {given} out of range for a session of {len} questions")]
    IndexOutOfRange { given: usize, len: usize },

    #[error("operation not valid in the session's current state")]
    InvalidSessionState,

    #[error(transparent)]
    Result(#[from] SessionResultError),
}

/// Errors emitted while bootstrapping the progress service.
///
/// Once the service is constructed, persistence failures are logged and
/// swallowed rather than surfaced.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}
