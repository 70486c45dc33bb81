//! Error types for asset intake and validation.

use thiserror::Error;

/// Result type for asset operations.
pub type AssetResult<T> = Result<T, AssetError>;

/// Errors that can occur while validating a candidate asset.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AssetError {
    /// File is neither a displayable image nor a recognized clinical format.
    #[error("Unsupported file type: {0}. Please upload an image file (JPEG, PNG) or DICOM file")]
    UnsupportedType(String),

    /// File exceeds the configured size ceiling.
    #[error("File too large: {size_mb:.1} MB exceeds the {limit_mb} MB limit")]
    TooLarge {
        /// Actual size of the rejected file in megabytes.
        size_mb: f64,
        /// Configured ceiling in megabytes.
        limit_mb: u64,
    },
}
