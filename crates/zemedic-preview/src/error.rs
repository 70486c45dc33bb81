//! Error types for preview generation.

use thiserror::Error;

/// Result type for preview operations.
pub type PreviewResult<T> = Result<T, PreviewError>;

/// Errors that can occur while generating a preview.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PreviewError {
    /// The candidate's bytes could not be decoded as an image.
    #[error("Could not decode image for preview: {0}")]
    DecodeFailure(String),
}
