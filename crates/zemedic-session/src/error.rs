//! Error types for the upload session.

use thiserror::Error;
use zemedic_analysis::AnalysisError;
use zemedic_assets::AssetError;
use zemedic_preview::PreviewError;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors surfaced by the upload session.
///
/// Validation and decode failures resolve locally (the session moves to its
/// error state and stays usable); analysis failures are surfaced so the
/// hosting view can show the message and offer a retry. Nothing here is
/// fatal; `clear()` always returns the session to empty.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SessionError {
    /// Candidate failed intake validation.
    #[error(transparent)]
    Asset(#[from] AssetError),

    /// Candidate could not be decoded for preview.
    #[error(transparent)]
    Preview(#[from] PreviewError),

    /// The analysis client reported a failure.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    /// Submit was called with no accepted candidate.
    #[error("Please select a file to upload")]
    NoCandidate,

    /// Submit was called from a state that cannot submit.
    #[error("Cannot submit in the current state")]
    NotReady,
}
